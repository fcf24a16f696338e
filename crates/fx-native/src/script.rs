//! A fixed gesture choreography standing in for a camera and detector.
//!
//! Frames are numbered at the detector's nominal 30 Hz. One cycle walks
//! through every interaction once: draw a stroke, switch to SNAP, snap four
//! times, rub for rain, switch back, draw again and erase. A left wink is
//! mixed in every two seconds.

use fx_core::poses;
use fx_core::{FaceLandmarks, HandBatch, HandLabel, HandLandmarks, HandObservation};
use glam::Vec2;

pub const OBSERVATION_HZ: f64 = 30.0;
pub const FRAME_MS: f64 = 1000.0 / OBSERVATION_HZ;

const SWEEP: (u64, u64) = (0, 36);
const GAP: (u64, u64) = (36, 45);
const TO_SNAP: (u64, u64) = (45, 54);
const SNAPPING: (u64, u64) = (54, 90);
const RUBBING: (u64, u64) = (90, 126);
const TO_DRAW: (u64, u64) = (126, 135);
const SECOND_SWEEP: (u64, u64) = (135, 171);
const ERASE: (u64, u64) = (171, 180);
pub const CYCLE_FRAMES: u64 = ERASE.1;

const SNAP_PERIOD: u64 = 10; // frames per pinch + release
const WINK_PERIOD: u64 = 60;
const WINK_FRAMES: u64 = 3;

/// What the detector would report for one frame.
#[derive(Clone, Debug, Default)]
pub struct ScriptFrame {
    pub hands: HandBatch,
    pub face: Option<FaceLandmarks>,
}

fn within(n: u64, (start, end): (u64, u64)) -> bool {
    (start..end).contains(&n)
}

fn sweep(n: u64, (start, end): (u64, u64)) -> HandLandmarks {
    let p = (n - start) as f32 / (end - start) as f32;
    let by = Vec2::new(0.3 * p - 0.15, 0.05 * (p * std::f32::consts::TAU).sin());
    poses::translated(&poses::pointing(), by)
}

fn hand(label: HandLabel, landmarks: HandLandmarks) -> HandObservation {
    poses::observe(label, landmarks)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Sweep,
    Gap,
    ToSnap,
    Snapping,
    Rubbing,
    ToDraw,
    SecondSweep,
    Erase,
}

pub fn phase(n: u64) -> Phase {
    let c = n % CYCLE_FRAMES;
    [
        (SWEEP, Phase::Sweep),
        (GAP, Phase::Gap),
        (TO_SNAP, Phase::ToSnap),
        (SNAPPING, Phase::Snapping),
        (RUBBING, Phase::Rubbing),
        (TO_DRAW, Phase::ToDraw),
        (SECOND_SWEEP, Phase::SecondSweep),
    ]
    .into_iter()
    .find(|(range, _)| within(c, *range))
    .map_or(Phase::Erase, |(_, p)| p)
}

/// Frame `n` of the endlessly repeating script.
pub fn frame(n: u64) -> ScriptFrame {
    let c = n % CYCLE_FRAMES;
    let mut hands = HandBatch::new();
    match phase(n) {
        Phase::Sweep => hands.push(hand(HandLabel::Left, sweep(c, SWEEP))),
        Phase::Gap => {}
        Phase::ToSnap => hands.push(hand(HandLabel::Right, poses::open_palm())),
        Phase::Snapping => {
            let gap = if (c - SNAPPING.0) % SNAP_PERIOD < SNAP_PERIOD / 2 {
                0.03
            } else {
                0.2
            };
            hands.push(hand(HandLabel::Right, poses::pinch(gap)));
        }
        Phase::Rubbing => {
            let offset = if c % 2 == 0 {
                Vec2::ZERO
            } else {
                Vec2::new(0.015, 0.0)
            };
            hands.push(hand(HandLabel::Right, poses::cluster(offset)));
        }
        Phase::ToDraw => hands.push(hand(HandLabel::Left, poses::open_palm())),
        Phase::SecondSweep => hands.push(hand(HandLabel::Left, sweep(c, SECOND_SWEEP))),
        Phase::Erase => {
            hands.push(hand(HandLabel::Left, poses::open_palm()));
            hands.push(hand(HandLabel::Right, poses::open_palm()));
        }
    }

    let face = if n % WINK_PERIOD < WINK_FRAMES {
        poses::face(0.1, 0.3)
    } else {
        poses::face(0.3, 0.3)
    };
    ScriptFrame {
        hands,
        face: Some(face),
    }
}
