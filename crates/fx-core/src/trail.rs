//! Drawing state for DRAW mode: fading trail windows and persistent ink.

use crate::config::{FxConfig, StrokeStyle};
use crate::constants::MAX_LINE_POINTS;
use crate::landmarks::HandLabel;
use glam::Vec2;
use std::collections::VecDeque;

/// A fingertip sample in canvas pixels, stamped with observation time (ms).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
    pub timestamp: f64,
}

impl Point {
    pub fn new(pos: Vec2, timestamp: f64) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            timestamp,
        }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Vec2),
    QuadTo { ctrl: Vec2, to: Vec2 },
    LineTo(Vec2),
}

/// Sliding window of the most recent [`MAX_LINE_POINTS`] samples for one hand.
#[derive(Clone, Debug, Default)]
pub struct TrailQueue {
    points: VecDeque<Point>,
}

impl TrailQueue {
    pub fn new() -> Self {
        Self {
            points: VecDeque::with_capacity(MAX_LINE_POINTS + 1),
        }
    }

    pub fn push(&mut self, point: Point) {
        self.points.push_back(point);
        while self.points.len() > MAX_LINE_POINTS {
            self.points.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Point> + '_ {
        self.points.iter()
    }

    /// Midpoint-to-midpoint quadratic smoothing through the window. Empty for
    /// fewer than two points.
    pub fn smoothed_path(&self) -> Vec<PathCommand> {
        let n = self.points.len();
        if n < 2 {
            return Vec::new();
        }
        let p = |i: usize| self.points[i].pos();
        let mut path = Vec::with_capacity(n + 1);
        path.push(PathCommand::MoveTo(p(0)));
        for i in 1..n - 1 {
            path.push(PathCommand::QuadTo {
                ctrl: p(i),
                to: (p(i) + p(i + 1)) * 0.5,
            });
        }
        path.push(PathCommand::LineTo(p(n - 1)));
        path
    }
}

/// One straight piece of persistent ink, styled at the moment it was drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InkSegment {
    pub from: Point,
    pub to: Point,
    pub style: StrokeStyle,
}

impl InkSegment {
    pub fn path(&self) -> [PathCommand; 2] {
        [
            PathCommand::MoveTo(self.from.pos()),
            PathCommand::LineTo(self.to.pos()),
        ]
    }
}

/// Per-hand trails and stroke anchors, plus ink waiting to be laid onto the
/// persistent layer by the next render tick.
#[derive(Clone, Debug, Default)]
pub struct StrokeState {
    trails: [TrailQueue; 2],
    anchors: [Option<Point>; 2],
    pending_ink: Vec<InkSegment>,
    ink_clear_requested: bool,
}

impl StrokeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extend `hand`'s stroke with a new fingertip sample.
    pub fn add_point(&mut self, hand: HandLabel, point: Point, config: &FxConfig) {
        let i = hand.index();
        if config.persistent_line {
            if let Some(from) = self.anchors[i].replace(point) {
                self.pending_ink.push(InkSegment {
                    from,
                    to: point,
                    style: config.stroke_style(),
                });
            }
        } else {
            self.trails[i].push(point);
        }
    }

    /// `hand` stopped pointing or left the frame.
    pub fn end_stroke(&mut self, hand: HandLabel, persistent: bool) {
        let i = hand.index();
        self.anchors[i] = None;
        if !persistent {
            self.trails[i].clear();
        }
    }

    /// Wipe everything drawn so far, including the persistent layer.
    pub fn clear(&mut self) {
        for t in &mut self.trails {
            t.clear();
        }
        self.anchors = [None, None];
        self.clear_ink();
    }

    pub fn set_persistent(&mut self, on: bool) {
        if on {
            for t in &mut self.trails {
                t.clear();
            }
        } else {
            self.clear_ink();
            self.anchors = [None, None];
        }
    }

    fn clear_ink(&mut self) {
        self.pending_ink.clear();
        self.ink_clear_requested = true;
    }

    pub fn trail(&self, hand: HandLabel) -> &TrailQueue {
        &self.trails[hand.index()]
    }

    pub fn anchor(&self, hand: HandLabel) -> Option<Point> {
        self.anchors[hand.index()]
    }

    pub fn pending_ink(&self) -> &[InkSegment] {
        &self.pending_ink
    }

    /// Hand the render path everything queued for the persistent layer:
    /// whether it must be cleared first, then the segments to draw once.
    pub fn take_ink(&mut self) -> (bool, Vec<InkSegment>) {
        let clear = std::mem::take(&mut self.ink_clear_requested);
        (clear, std::mem::take(&mut self.pending_ink))
    }
}
