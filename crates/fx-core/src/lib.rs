pub mod clock;
pub mod config;
pub mod constants;
pub mod emit;
pub mod error;
pub mod geometry;
pub mod gestures;
pub mod interaction;
pub mod landmarks;
pub mod particles;
pub mod poses;
pub mod scene;
pub mod surface;
pub mod trail;
pub mod wink;

pub use clock::SessionClock;
pub use config::{Color, FxConfig, SparkShape, StrokeStyle};
pub use error::{ConfigError, LandmarkError};
pub use geometry::Viewport;
pub use interaction::{AppMode, GestureEvent, GestureEvents, InteractionMachine};
pub use landmarks::{
    hands_from_flat, Eye, FaceLandmarks, Finger, HandBatch, HandLabel, HandLandmarks,
    HandObservation, Landmark,
};
pub use particles::{Particle, ParticleSystem};
pub use scene::FxScene;
pub use surface::{CommandLog, DrawCommand, RenderSurface, Shape};
pub use trail::{InkSegment, PathCommand, Point, StrokeState, TrailQueue};
pub use wink::WinkDetector;
