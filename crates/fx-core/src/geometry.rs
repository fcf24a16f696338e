use crate::landmarks::HandLandmarks;
use glam::Vec2;

/// Canvas size in pixels that normalized landmarks are projected onto.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Map a normalized point to canvas pixels, mirrored horizontally so the
    /// overlay lines up with the selfie-view video.
    #[inline]
    pub fn to_canvas(&self, p: Vec2) -> Vec2 {
        Vec2::new((1.0 - p.x) * self.width, p.y * self.height)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 720.0)
    }
}

#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Wrist to index MCP distance; the per-frame unit every hand threshold is
/// expressed in.
#[inline]
pub fn hand_scale(hand: &HandLandmarks) -> f32 {
    distance(hand.wrist(), hand.index_mcp())
}

/// `tip_dist` in hand scales. A collapsed hand (zero scale) reports 0.
#[inline]
pub fn extension_ratio(tip_dist: f32, scale: f32) -> f32 {
    if scale > f32::EPSILON {
        tip_dist / scale
    } else {
        0.0
    }
}

pub fn centroid(points: &[Vec2]) -> Vec2 {
    if points.is_empty() {
        return Vec2::ZERO;
    }
    points.iter().copied().sum::<Vec2>() / points.len() as f32
}
