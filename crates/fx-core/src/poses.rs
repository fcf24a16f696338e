//! Canonical hand and face poses in normalized image space.
//!
//! The native driver replays these as a scripted session and the tests use
//! them as fixtures. Every hand shares one palm: wrist at (0.5, 0.8), index
//! MCP at (0.5, 0.7), so a hand scale of 0.1.

use crate::constants::FACE_LANDMARK_COUNT;
use crate::landmarks::{
    face_slot, slot, FaceLandmarks, HandLabel, HandLandmarks, HandObservation, Landmark,
};
use glam::Vec2;

const WRIST: Vec2 = Vec2::new(0.5, 0.8);
const THUMB_CMC: Vec2 = Vec2::new(0.46, 0.77);
const THUMB_MCP: Vec2 = Vec2::new(0.42, 0.74);
const INDEX_MCP: Vec2 = Vec2::new(0.5, 0.7);
const MIDDLE_MCP: Vec2 = Vec2::new(0.53, 0.70);
const RING_MCP: Vec2 = Vec2::new(0.56, 0.71);
const PINKY_MCP: Vec2 = Vec2::new(0.59, 0.73);
const POINTING_INDEX_TIP: Vec2 = Vec2::new(0.47, 0.55);

/// PIP and tip per finger; IP/DIP joints are placed halfway between.
struct Digits {
    thumb_tip: Vec2,
    index: (Vec2, Vec2),
    middle: (Vec2, Vec2),
    ring: (Vec2, Vec2),
    pinky: (Vec2, Vec2),
}

fn build(d: Digits) -> HandLandmarks {
    let mut pts = [Vec2::ZERO; 21];
    pts[slot::WRIST] = WRIST;
    pts[slot::THUMB_CMC] = THUMB_CMC;
    pts[slot::THUMB_MCP] = THUMB_MCP;
    pts[slot::THUMB_IP] = THUMB_MCP.lerp(d.thumb_tip, 0.5);
    pts[slot::THUMB_TIP] = d.thumb_tip;

    let fingers = [
        (slot::INDEX_MCP, INDEX_MCP, d.index),
        (slot::MIDDLE_MCP, MIDDLE_MCP, d.middle),
        (slot::RING_MCP, RING_MCP, d.ring),
        (slot::PINKY_MCP, PINKY_MCP, d.pinky),
    ];
    for (base, mcp, (pip, tip)) in fingers {
        pts[base] = mcp;
        pts[base + 1] = pip;
        pts[base + 2] = pip.lerp(tip, 0.5);
        pts[base + 3] = tip;
    }
    HandLandmarks::new(pts.map(Landmark::from))
}

/// All five fingers spread.
pub fn open_palm() -> HandLandmarks {
    build(Digits {
        thumb_tip: Vec2::new(0.35, 0.68),
        index: (Vec2::new(0.49, 0.64), Vec2::new(0.47, 0.55)),
        middle: (Vec2::new(0.53, 0.62), Vec2::new(0.53, 0.52)),
        ring: (RING_MCP.lerp(Vec2::new(0.58, 0.54), 0.5), Vec2::new(0.58, 0.54)),
        pinky: (PINKY_MCP.lerp(Vec2::new(0.63, 0.58), 0.5), Vec2::new(0.63, 0.58)),
    })
}

/// Index out, everything else curled, thumb tucked.
pub fn pointing() -> HandLandmarks {
    pointing_with_thumb(Vec2::new(0.54, 0.70))
}

fn pointing_with_thumb(thumb_tip: Vec2) -> HandLandmarks {
    build(Digits {
        thumb_tip,
        index: (Vec2::new(0.49, 0.64), POINTING_INDEX_TIP),
        middle: (Vec2::new(0.54, 0.63), Vec2::new(0.53, 0.70)),
        ring: (Vec2::new(0.57, 0.64), Vec2::new(0.56, 0.71)),
        pinky: (Vec2::new(0.60, 0.66), Vec2::new(0.58, 0.72)),
    })
}

/// Fingertips bunched above the palm, shifted by `offset` relative to the
/// wrist. Alternating offsets between frames reads as rubbing.
pub fn cluster(offset: Vec2) -> HandLandmarks {
    build(Digits {
        thumb_tip: Vec2::new(0.49, 0.63) + offset,
        index: (Vec2::new(0.49, 0.64), Vec2::new(0.50, 0.61) + offset),
        middle: (Vec2::new(0.54, 0.64), Vec2::new(0.51, 0.62) + offset),
        ring: (Vec2::new(0.57, 0.65), Vec2::new(0.515, 0.63) + offset),
        pinky: (Vec2::new(0.60, 0.67), Vec2::new(0.505, 0.64) + offset),
    })
}

/// Curled fist. The tips are close together but sit by the wrist.
pub fn fist() -> HandLandmarks {
    build(Digits {
        thumb_tip: Vec2::new(0.52, 0.72),
        index: (Vec2::new(0.50, 0.64), Vec2::new(0.50, 0.71)),
        middle: (Vec2::new(0.53, 0.64), Vec2::new(0.53, 0.72)),
        ring: (Vec2::new(0.56, 0.65), Vec2::new(0.56, 0.73)),
        pinky: (Vec2::new(0.59, 0.67), Vec2::new(0.58, 0.74)),
    })
}

/// The pointing hand with the thumb tip `gap` to the right of the index tip.
pub fn pinch(gap: f32) -> HandLandmarks {
    pointing_with_thumb(POINTING_INDEX_TIP + Vec2::new(gap, 0.0))
}

/// Whole hand moved by `by`; wrist-relative geometry is unchanged.
pub fn translated(hand: &HandLandmarks, by: Vec2) -> HandLandmarks {
    hand.map(|p| Landmark::new(p.x + by.x, p.y + by.y, p.z))
}

/// Hand scaled about its wrist, as if closer to or further from the camera.
pub fn scaled(hand: &HandLandmarks, factor: f32) -> HandLandmarks {
    let wrist = hand.wrist();
    hand.map(|p| {
        let v = wrist + (p.xy() - wrist) * factor;
        Landmark::new(v.x, v.y, p.z)
    })
}

pub fn observe(label: HandLabel, hand: HandLandmarks) -> HandObservation {
    HandObservation::new(label, hand)
}

/// A face mesh whose eyes have the given aspect ratios. Eye corners sit 0.06
/// apart, so lid separation is `ratio * 0.06`.
pub fn face(left_ratio: f32, right_ratio: f32) -> FaceLandmarks {
    use face_slot::*;
    let mut pts = [Landmark::new(0.5, 0.5, 0.0); FACE_LANDMARK_COUNT];
    set_eye(
        &mut pts,
        [LEFT_EYE_OUTER, LEFT_EYE_INNER, LEFT_EYE_TOP, LEFT_EYE_BOTTOM],
        (0.40, 0.46),
        left_ratio,
    );
    set_eye(
        &mut pts,
        [RIGHT_EYE_OUTER, RIGHT_EYE_INNER, RIGHT_EYE_TOP, RIGHT_EYE_BOTTOM],
        (0.60, 0.54),
        right_ratio,
    );
    FaceLandmarks::from_mesh(pts)
}

fn set_eye(pts: &mut [Landmark], slots: [usize; 4], (outer_x, inner_x): (f32, f32), ratio: f32) {
    let [outer, inner, top, bottom] = slots;
    let half = ratio * 0.06 / 2.0;
    let cx = (outer_x + inner_x) / 2.0;
    pts[outer] = Landmark::new(outer_x, 0.40, 0.0);
    pts[inner] = Landmark::new(inner_x, 0.40, 0.0);
    pts[top] = Landmark::new(cx, 0.40 - half, 0.0);
    pts[bottom] = Landmark::new(cx, 0.40 + half, 0.0);
}

/// Flatten to the packed `x, y, z` layout the frontends receive.
pub fn flatten(points: &[Landmark]) -> Vec<f32> {
    points.iter().flat_map(|p| [p.x, p.y, p.z]).collect()
}
