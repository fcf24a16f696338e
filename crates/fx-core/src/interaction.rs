//! Mode arbitration and per-hand gesture state.
//!
//! [`InteractionMachine::process`] runs once per hand batch from the
//! detector and reports what happened as [`GestureEvent`]s. It never touches
//! particles or drawing state itself; see [`crate::emit`] for that half.

use crate::constants::*;
use crate::gestures;
use crate::landmarks::{Finger, HandLabel, HandLandmarks, HandObservation};
use glam::Vec2;
use smallvec::SmallVec;
use std::fmt;

/// Thumb partner for the snap pinch.
pub const SNAP_FINGER: Finger = Finger::Index;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AppMode {
    #[default]
    Draw,
    Snap,
}

impl AppMode {
    pub fn as_str(self) -> &'static str {
        match self {
            AppMode::Draw => "DRAW",
            AppMode::Snap => "SNAP",
        }
    }
}

impl fmt::Display for AppMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct HandGestureState {
    pub pinched: bool,
    pub rub_started_at: Option<f64>,
    pub last_landmarks: Option<HandLandmarks>,
}

impl HandGestureState {
    /// Feed one thumb-to-finger distance through the snap hysteresis.
    /// Engages below [`SNAP_THRESHOLD_DISTANCE`], holds through the band
    /// between the two thresholds, and returns `true` on the frame an engaged
    /// pinch opens past [`SNAP_RELEASE_THRESHOLD`].
    pub fn update_pinch(&mut self, distance: f32) -> bool {
        if distance < SNAP_THRESHOLD_DISTANCE {
            self.pinched = true;
            false
        } else if self.pinched && distance > SNAP_RELEASE_THRESHOLD {
            self.pinched = false;
            true
        } else {
            false
        }
    }
}

/// Decisions taken for one frame. Positions are normalized landmark space.
#[derive(Clone, Debug, PartialEq)]
pub enum GestureEvent {
    /// Both palms open: wipe all drawing. Nothing else happens that frame.
    Erase,
    ModeChanged { from: AppMode, to: AppMode },
    /// A held snap pinch was released.
    Snap { hand: HandLabel, at: Vec2 },
    /// Rubbing has been held past the activation delay.
    Rain { hand: HandLabel, at: Vec2 },
    /// Index fingertip of a pointing hand in DRAW mode.
    Point { hand: HandLabel, at: Vec2 },
    /// In DRAW mode, `hand` is absent or not pointing this frame.
    StrokeEnd { hand: HandLabel },
}

pub type GestureEvents = SmallVec<[GestureEvent; 4]>;

#[derive(Debug, Default)]
pub struct InteractionMachine {
    mode: AppMode,
    hands: [HandGestureState; 2],
}

impl InteractionMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn hand(&self, label: HandLabel) -> &HandGestureState {
        &self.hands[label.index()]
    }

    /// Forget all per-hand history; the mode is kept.
    pub fn reset_hands(&mut self) {
        self.hands = Default::default();
    }

    pub fn process(&mut self, hands: &[HandObservation], now_ms: f64) -> GestureEvents {
        let mut events = GestureEvents::new();

        let mut left_open = false;
        let mut right_open = false;
        for h in hands {
            if gestures::is_open_hand(&h.landmarks) {
                match h.label {
                    HandLabel::Left => left_open = true,
                    HandLabel::Right => right_open = true,
                }
            }
        }

        if left_open && right_open {
            events.push(GestureEvent::Erase);
            return events;
        }

        // With two hands in view the user is usually mid-transition; switching
        // on either palm would flicker.
        if hands.len() == 1 {
            let target = if left_open {
                Some(AppMode::Draw)
            } else if right_open {
                Some(AppMode::Snap)
            } else {
                None
            };
            if let Some(to) = target.filter(|&m| m != self.mode) {
                events.push(GestureEvent::ModeChanged {
                    from: self.mode,
                    to,
                });
                self.mode = to;
            }
        }

        let mut drawing = [false; 2];
        for h in hands {
            let state = &mut self.hands[h.label.index()];
            match self.mode {
                AppMode::Snap => Self::snap_hand(state, h, now_ms, &mut events),
                AppMode::Draw => {
                    if gestures::is_pointing(&h.landmarks) {
                        drawing[h.label.index()] = true;
                        events.push(GestureEvent::Point {
                            hand: h.label,
                            at: h.landmarks.index_tip(),
                        });
                    }
                }
            }
            state.last_landmarks = Some(h.landmarks.clone());
        }

        if self.mode == AppMode::Draw {
            for label in HandLabel::ALL {
                if !drawing[label.index()] {
                    events.push(GestureEvent::StrokeEnd { hand: label });
                }
            }
        }
        events
    }

    fn snap_hand(
        state: &mut HandGestureState,
        h: &HandObservation,
        now_ms: f64,
        events: &mut GestureEvents,
    ) {
        let hand = &h.landmarks;
        if gestures::is_cluster_rub(hand, state.last_landmarks.as_ref()) {
            let started = *state.rub_started_at.get_or_insert(now_ms);
            if now_ms - started > RUB_ACTIVATION_DELAY_MS {
                if let Some(at) = gestures::cluster_centroid(hand) {
                    events.push(GestureEvent::Rain {
                        hand: h.label,
                        at,
                    });
                }
            }
            // Rubbing and snapping are exclusive on one hand.
            state.pinched = false;
        } else {
            state.rub_started_at = None;
            if state.update_pinch(gestures::pinch_distance(hand, SNAP_FINGER)) {
                events.push(GestureEvent::Snap {
                    hand: h.label,
                    at: hand.thumb_tip(),
                });
            }
        }
    }
}
