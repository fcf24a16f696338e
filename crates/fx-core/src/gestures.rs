//! Per-frame gesture predicates.
//!
//! Every hand threshold is expressed in hand scales (see
//! [`hand_scale`]) so that classification does not depend on how
//! far the hand is from the camera. The only history any predicate sees is the
//! previous frame's landmarks for cluster-rub motion.

use crate::constants::*;
use crate::geometry::{centroid, distance, extension_ratio, hand_scale};
use crate::landmarks::{Eye, FaceLandmarks, Finger, HandLandmarks};
use glam::Vec2;

/// Palm facing the camera with middle, ring and pinky spread out, and the
/// thumb not pinched against the index finger.
pub fn is_open_hand(hand: &HandLandmarks) -> bool {
    let scale = hand_scale(hand);
    let wrist = hand.wrist();
    let reach = (distance(hand.middle_tip(), wrist)
        + distance(hand.ring_tip(), wrist)
        + distance(hand.pinky_tip(), wrist))
        / 3.0;
    let extended = extension_ratio(reach, scale) > OPEN_HAND_EXTENSION_RATIO;
    let pinching =
        extension_ratio(pinch_distance(hand, Finger::Index), scale) < OPEN_HAND_PINCH_RATIO;
    extended && !pinching
}

/// Tip reaches noticeably further from the wrist than the finger's PIP joint.
pub fn is_finger_extended(hand: &HandLandmarks, finger: Finger) -> bool {
    let wrist = hand.wrist();
    distance(hand.tip(finger), wrist) > distance(hand.pip(finger), wrist) * FINGER_EXTENSION_RATIO
}

pub fn is_thumb_extended(hand: &HandLandmarks) -> bool {
    let reach = distance(hand.thumb_tip(), hand.pinky_mcp());
    extension_ratio(reach, hand_scale(hand)) > THUMB_EXTENDED_RATIO
}

/// Index finger out, the other three curled and the thumb tucked.
pub fn is_pointing(hand: &HandLandmarks) -> bool {
    is_finger_extended(hand, Finger::Index)
        && !is_finger_extended(hand, Finger::Middle)
        && !is_finger_extended(hand, Finger::Ring)
        && !is_finger_extended(hand, Finger::Pinky)
        && !is_thumb_extended(hand)
}

/// Shape half of the cluster-rub test: all five fingertips bunched together
/// and held away from the wrist. Returns the fingertip centroid when it holds.
pub fn cluster_centroid(hand: &HandLandmarks) -> Option<Vec2> {
    let tips = hand.fingertips();
    let center = centroid(&tips);
    if tips.iter().any(|t| distance(*t, center) > CLUSTER_THRESHOLD) {
        return None;
    }
    // A fist bunches the tips too, but next to the wrist.
    let reach = distance(center, hand.wrist());
    if reach < hand_scale(hand) * CLUSTER_EXTENSION_RATIO {
        return None;
    }
    Some(center)
}

/// Bunched fingertips that moved relative to the wrist since `previous`.
///
/// Motion is measured wrist-relative so that carrying the whole arm across
/// the frame does not count as rubbing.
pub fn is_cluster_rub(hand: &HandLandmarks, previous: Option<&HandLandmarks>) -> bool {
    let Some(center) = cluster_centroid(hand) else {
        return false;
    };
    let Some(previous) = previous else {
        return false;
    };
    let relative = center - hand.wrist();
    let previous_relative = centroid(&previous.fingertips()) - previous.wrist();
    relative.distance(previous_relative) > RUB_MOTION_THRESHOLD
}

/// Raw thumb tip to `finger` tip distance in normalized space.
#[inline]
pub fn pinch_distance(hand: &HandLandmarks, finger: Finger) -> f32 {
    distance(hand.thumb_tip(), hand.tip(finger))
}

/// Lid opening over corner-to-corner width.
pub fn eye_aspect_ratio(face: &FaceLandmarks, eye: Eye) -> f32 {
    let e = face.eye(eye);
    extension_ratio(distance(e.top, e.bottom), distance(e.inner, e.outer))
}

/// The eye that is winking this frame, if any. A blink closes both eyes and
/// never qualifies.
pub fn detect_wink(face: &FaceLandmarks) -> Option<Eye> {
    let ratios = [
        eye_aspect_ratio(face, Eye::Left),
        eye_aspect_ratio(face, Eye::Right),
    ];
    Eye::BOTH.into_iter().find(|eye| {
        ratios[eye.index()] < WINK_CLOSED_THRESHOLD
            && ratios[eye.other().index()] > WINK_OPEN_THRESHOLD
    })
}
