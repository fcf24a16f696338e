// Gesture and effects tuning constants shared by the web and native frontends.
// Distances are in normalized image space unless the name says otherwise.

// Landmark array sizes delivered by the detector
pub const HAND_LANDMARK_COUNT: usize = 21;
pub const FACE_LANDMARK_COUNT: usize = 468;

// Open hand
pub const OPEN_HAND_EXTENSION_RATIO: f32 = 1.5; // mean middle/ring/pinky tip reach, in hand scales
pub const OPEN_HAND_PINCH_RATIO: f32 = 0.5; // thumb-index closer than this is a pinch, not a palm

// Pointing
pub const FINGER_EXTENSION_RATIO: f32 = 1.1; // tip must reach this much further than its PIP
pub const THUMB_EXTENDED_RATIO: f32 = 0.9; // thumb tip to pinky MCP, in hand scales

// Cluster rub ("salt pinch")
pub const CLUSTER_THRESHOLD: f32 = 0.06; // every fingertip within this of the centroid
pub const CLUSTER_EXTENSION_RATIO: f32 = 1.0; // centroid at least this many hand scales from the wrist
pub const RUB_MOTION_THRESHOLD: f32 = 0.010; // wrist-relative centroid motion per frame
pub const RUB_ACTIVATION_DELAY_MS: f64 = 150.0; // rubbing must be held this long before rain starts

// Snap (pinch hysteresis)
pub const SNAP_THRESHOLD_DISTANCE: f32 = 0.05; // engage below
pub const SNAP_RELEASE_THRESHOLD: f32 = 0.12; // fire above, once engaged

// Wink (eye aspect ratio)
pub const WINK_CLOSED_THRESHOLD: f32 = 0.18;
pub const WINK_OPEN_THRESHOLD: f32 = 0.25;
pub const WINK_COOLDOWN_MS: f64 = 800.0;

// Trails
pub const MAX_LINE_POINTS: usize = 30;

// Particle spawning (canvas pixels, per render tick)
pub const PARTICLE_COUNT: usize = 30; // particles per snap burst
pub const BURST_SPEED_MIN: f32 = 2.0;
pub const BURST_SPEED_SPAN: f32 = 5.0;
pub const RAIN_PARTICLES_PER_FRAME: usize = 2;
pub const RAIN_SPREAD_PX: f32 = 40.0; // horizontal jitter window around the centroid
pub const RAIN_FALL_SPEED_MIN: f32 = 2.0;
pub const RAIN_FALL_SPEED_SPAN: f32 = 3.0;
pub const RAIN_DRIFT_SPAN: f32 = 2.0;
pub const WINK_PARTICLE_LIFE: f32 = 1.2;
pub const WINK_SIZE_MULTIPLIER: f32 = 2.5;
pub const WINK_RISE_SPEED: f32 = 1.0;

// Particle integration (per render tick)
pub const GRAVITY: f32 = 0.2;
pub const LIFE_DECAY: f32 = 0.02;
pub const LIFE_EPSILON: f32 = 1e-4; // life at or below this is spent

// Particle shapes
pub const STAR_SPIKES: usize = 5;
