//! Typed views over the detector's landmark arrays.
//!
//! Hands arrive as 21 keypoints and faces as the 468-point mesh, both in
//! normalized image space. Only `x`/`y` take part in classification; `z` is
//! carried through untouched.

use crate::constants::{FACE_LANDMARK_COUNT, HAND_LANDMARK_COUNT};
use crate::error::LandmarkError;
use glam::Vec2;
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

/// Fixed anatomical slots of the 21-point hand model.
pub mod slot {
    pub const WRIST: usize = 0;
    pub const THUMB_CMC: usize = 1;
    pub const THUMB_MCP: usize = 2;
    pub const THUMB_IP: usize = 3;
    pub const THUMB_TIP: usize = 4;
    pub const INDEX_MCP: usize = 5;
    pub const INDEX_PIP: usize = 6;
    pub const INDEX_DIP: usize = 7;
    pub const INDEX_TIP: usize = 8;
    pub const MIDDLE_MCP: usize = 9;
    pub const MIDDLE_PIP: usize = 10;
    pub const MIDDLE_DIP: usize = 11;
    pub const MIDDLE_TIP: usize = 12;
    pub const RING_MCP: usize = 13;
    pub const RING_PIP: usize = 14;
    pub const RING_DIP: usize = 15;
    pub const RING_TIP: usize = 16;
    pub const PINKY_MCP: usize = 17;
    pub const PINKY_PIP: usize = 18;
    pub const PINKY_DIP: usize = 19;
    pub const PINKY_TIP: usize = 20;
}

/// Face mesh slots for the eye corners and lids.
pub mod face_slot {
    pub const LEFT_EYE_OUTER: usize = 33;
    pub const LEFT_EYE_INNER: usize = 133;
    pub const LEFT_EYE_TOP: usize = 159;
    pub const LEFT_EYE_BOTTOM: usize = 145;

    pub const RIGHT_EYE_OUTER: usize = 263;
    pub const RIGHT_EYE_INNER: usize = 362;
    pub const RIGHT_EYE_TOP: usize = 386;
    pub const RIGHT_EYE_BOTTOM: usize = 374;
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Landmark {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn xy(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

impl From<Vec2> for Landmark {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y, 0.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HandLabel {
    Left,
    Right,
}

impl HandLabel {
    pub const ALL: [HandLabel; 2] = [HandLabel::Left, HandLabel::Right];

    /// Slot in per-hand state pairs.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            HandLabel::Left => 0,
            HandLabel::Right => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HandLabel::Left => "Left",
            HandLabel::Right => "Right",
        }
    }
}

impl fmt::Display for HandLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HandLabel {
    type Err = LandmarkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Left" | "left" => Ok(HandLabel::Left),
            "Right" | "right" => Ok(HandLabel::Right),
            other => Err(LandmarkError::UnknownLabel(other.to_string())),
        }
    }
}

/// The four non-thumb fingers, for tests that treat them uniformly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Finger {
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    pub const ALL: [Finger; 4] = [Finger::Index, Finger::Middle, Finger::Ring, Finger::Pinky];

    fn tip_slot(self) -> usize {
        match self {
            Finger::Index => slot::INDEX_TIP,
            Finger::Middle => slot::MIDDLE_TIP,
            Finger::Ring => slot::RING_TIP,
            Finger::Pinky => slot::PINKY_TIP,
        }
    }

    fn pip_slot(self) -> usize {
        match self {
            Finger::Index => slot::INDEX_PIP,
            Finger::Middle => slot::MIDDLE_PIP,
            Finger::Ring => slot::RING_PIP,
            Finger::Pinky => slot::PINKY_PIP,
        }
    }
}

/// One hand's 21 keypoints, length-checked at construction.
#[derive(Clone, Debug, PartialEq)]
pub struct HandLandmarks {
    points: [Landmark; HAND_LANDMARK_COUNT],
}

impl HandLandmarks {
    pub fn new(points: [Landmark; HAND_LANDMARK_COUNT]) -> Self {
        Self { points }
    }

    pub fn from_slice(points: &[Landmark]) -> Result<Self, LandmarkError> {
        let points: [Landmark; HAND_LANDMARK_COUNT] = points
            .try_into()
            .map_err(|_| LandmarkError::HandLength(points.len()))?;
        Ok(Self { points })
    }

    /// Build from packed `x, y, z` triples.
    pub fn from_flat(coords: &[f32]) -> Result<Self, LandmarkError> {
        let points = triples(coords)?;
        Self::from_slice(&points)
    }

    /// Apply `f` to every keypoint, keeping slot order.
    pub fn map(&self, f: impl Fn(Landmark) -> Landmark) -> Self {
        Self {
            points: self.points.map(f),
        }
    }

    pub fn points(&self) -> &[Landmark] {
        &self.points
    }

    #[inline]
    fn at(&self, slot: usize) -> Vec2 {
        self.points[slot].xy()
    }

    pub fn wrist(&self) -> Vec2 {
        self.at(slot::WRIST)
    }
    pub fn thumb_tip(&self) -> Vec2 {
        self.at(slot::THUMB_TIP)
    }
    pub fn index_mcp(&self) -> Vec2 {
        self.at(slot::INDEX_MCP)
    }
    pub fn index_pip(&self) -> Vec2 {
        self.at(slot::INDEX_PIP)
    }
    pub fn index_tip(&self) -> Vec2 {
        self.at(slot::INDEX_TIP)
    }
    pub fn middle_tip(&self) -> Vec2 {
        self.at(slot::MIDDLE_TIP)
    }
    pub fn ring_tip(&self) -> Vec2 {
        self.at(slot::RING_TIP)
    }
    pub fn pinky_mcp(&self) -> Vec2 {
        self.at(slot::PINKY_MCP)
    }
    pub fn pinky_tip(&self) -> Vec2 {
        self.at(slot::PINKY_TIP)
    }

    pub fn tip(&self, finger: Finger) -> Vec2 {
        self.at(finger.tip_slot())
    }

    pub fn pip(&self, finger: Finger) -> Vec2 {
        self.at(finger.pip_slot())
    }

    /// Thumb, index, middle, ring and pinky tips in that order.
    pub fn fingertips(&self) -> [Vec2; 5] {
        [
            self.thumb_tip(),
            self.index_tip(),
            self.middle_tip(),
            self.ring_tip(),
            self.pinky_tip(),
        ]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HandObservation {
    pub label: HandLabel,
    pub landmarks: HandLandmarks,
}

impl HandObservation {
    pub fn new(label: HandLabel, landmarks: HandLandmarks) -> Self {
        Self { label, landmarks }
    }
}

/// Hands reported for one camera frame. Two at most in practice.
pub type HandBatch = SmallVec<[HandObservation; 2]>;

/// Split a packed multi-hand buffer (`labels.len() * 21` xyz triples) into
/// labelled observations. Any inconsistency rejects the whole batch.
pub fn hands_from_flat<S: AsRef<str>>(
    labels: &[S],
    coords: &[f32],
) -> Result<HandBatch, LandmarkError> {
    let points = triples(coords)?;
    let expected = labels.len() * HAND_LANDMARK_COUNT;
    if points.len() != expected {
        if labels.is_empty() || points.len() % HAND_LANDMARK_COUNT == 0 {
            return Err(LandmarkError::BatchMismatch {
                labels: labels.len(),
                hands: points.len() / HAND_LANDMARK_COUNT,
            });
        }
        return Err(LandmarkError::HandLength(points.len() / labels.len()));
    }
    labels
        .iter()
        .zip(points.chunks_exact(HAND_LANDMARK_COUNT))
        .map(|(label, chunk)| {
            Ok(HandObservation::new(
                label.as_ref().parse()?,
                HandLandmarks::from_slice(chunk)?,
            ))
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Eye {
    Left,
    Right,
}

impl Eye {
    pub const BOTH: [Eye; 2] = [Eye::Left, Eye::Right];

    pub fn other(self) -> Eye {
        match self {
            Eye::Left => Eye::Right,
            Eye::Right => Eye::Left,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Eye::Left => 0,
            Eye::Right => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Eye::Left => "left",
            Eye::Right => "right",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EyeLandmarks {
    pub outer: Vec2,
    pub inner: Vec2,
    pub top: Vec2,
    pub bottom: Vec2,
}

/// A single face mesh. Only the eye slots are read.
#[derive(Clone, Debug, PartialEq)]
pub struct FaceLandmarks {
    points: Vec<Landmark>,
}

impl FaceLandmarks {
    /// Meshes longer than [`FACE_LANDMARK_COUNT`] are kept whole; refined
    /// meshes append iris points after the base 468.
    pub fn from_vec(points: Vec<Landmark>) -> Result<Self, LandmarkError> {
        if points.len() < FACE_LANDMARK_COUNT {
            return Err(LandmarkError::FaceLength(points.len()));
        }
        Ok(Self { points })
    }

    pub fn from_slice(points: &[Landmark]) -> Result<Self, LandmarkError> {
        if points.len() < FACE_LANDMARK_COUNT {
            return Err(LandmarkError::FaceLength(points.len()));
        }
        Ok(Self {
            points: points.to_vec(),
        })
    }

    pub fn from_flat(coords: &[f32]) -> Result<Self, LandmarkError> {
        Self::from_vec(triples(coords)?)
    }

    pub fn from_mesh(points: [Landmark; FACE_LANDMARK_COUNT]) -> Self {
        Self {
            points: points.to_vec(),
        }
    }

    pub fn points(&self) -> &[Landmark] {
        &self.points
    }

    pub fn eye(&self, eye: Eye) -> EyeLandmarks {
        use face_slot::*;
        let (outer, inner, top, bottom) = match eye {
            Eye::Left => (LEFT_EYE_OUTER, LEFT_EYE_INNER, LEFT_EYE_TOP, LEFT_EYE_BOTTOM),
            Eye::Right => (
                RIGHT_EYE_OUTER,
                RIGHT_EYE_INNER,
                RIGHT_EYE_TOP,
                RIGHT_EYE_BOTTOM,
            ),
        };
        EyeLandmarks {
            outer: self.points[outer].xy(),
            inner: self.points[inner].xy(),
            top: self.points[top].xy(),
            bottom: self.points[bottom].xy(),
        }
    }
}

fn triples(coords: &[f32]) -> Result<Vec<Landmark>, LandmarkError> {
    if coords.len() % 3 != 0 {
        return Err(LandmarkError::Ragged(coords.len()));
    }
    Ok(coords
        .chunks_exact(3)
        .map(|c| Landmark::new(c[0], c[1], c[2]))
        .collect())
}
