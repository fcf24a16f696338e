//! The shared effects state both loops operate on.
//!
//! The observation side calls [`FxScene::on_hands`] / [`FxScene::on_face`]
//! whenever the detector finishes a frame; the render side calls
//! [`FxScene::tick`] once per display refresh. Frontends share one scene
//! between the two, as `Rc<RefCell<_>>` on the web and `Arc<Mutex<_>>` on
//! native, so each call runs to completion before the other starts.

use crate::config::FxConfig;
use crate::emit::{emit_gesture, emit_wink, EmitContext};
use crate::error::LandmarkError;
use crate::geometry::Viewport;
use crate::interaction::{AppMode, GestureEvent, GestureEvents, HandGestureState, InteractionMachine};
use crate::landmarks::{hands_from_flat, Eye, FaceLandmarks, HandLabel, HandObservation};
use crate::particles::ParticleSystem;
use crate::surface::{draw_segment, render_particles, render_trail, RenderSurface};
use crate::trail::StrokeState;
use crate::wink::WinkDetector;

pub struct FxScene {
    config: FxConfig,
    viewport: Viewport,
    machine: InteractionMachine,
    wink: WinkDetector,
    particles: ParticleSystem,
    strokes: StrokeState,
    ticks: u64,
}

impl FxScene {
    pub fn new(config: FxConfig, seed: u64) -> Self {
        Self {
            config,
            viewport: Viewport::default(),
            machine: InteractionMachine::new(),
            wink: WinkDetector::new(),
            particles: ParticleSystem::new(seed),
            strokes: StrokeState::new(),
            ticks: 0,
        }
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn mode(&self) -> AppMode {
        self.machine.mode()
    }

    pub fn config(&self) -> &FxConfig {
        &self.config
    }

    /// Replace the configuration, applying persistent-line transitions.
    pub fn set_config(&mut self, config: FxConfig) {
        let persistent = config.persistent_line;
        self.config = FxConfig {
            persistent_line: self.config.persistent_line,
            ..config
        };
        self.set_persistent_line(persistent);
    }

    pub fn update_config(&mut self, f: impl FnOnce(&mut FxConfig)) {
        let mut next = self.config.clone();
        f(&mut next);
        self.set_config(next);
    }

    /// Switching ink on drops the fading trails; switching it off wipes the
    /// ink layer and both stroke anchors.
    pub fn set_persistent_line(&mut self, on: bool) {
        if self.config.persistent_line == on {
            return;
        }
        self.config.persistent_line = on;
        self.strokes.set_persistent(on);
        log::info!("[config] persistent line {}", if on { "on" } else { "off" });
    }

    /// Run one detector hand batch through classification and emission.
    pub fn on_hands(&mut self, hands: &[HandObservation], now_ms: f64) -> GestureEvents {
        let events = self.machine.process(hands, now_ms);
        let mut ctx = EmitContext {
            config: &self.config,
            viewport: self.viewport,
            now_ms,
            particles: &mut self.particles,
            strokes: &mut self.strokes,
        };
        for ev in &events {
            match ev {
                GestureEvent::Erase => log::info!("[erase] both palms open"),
                GestureEvent::ModeChanged { from, to } => log::info!("[mode] {from} -> {to}"),
                GestureEvent::Snap { hand, .. } => log::debug!("[snap] {hand} released"),
                GestureEvent::Rain { hand, .. } => log::trace!("[rub] {hand} rain"),
                GestureEvent::Point { .. } | GestureEvent::StrokeEnd { .. } => {}
            }
            emit_gesture(ev, &mut ctx);
        }
        events
    }

    /// Packed variant of [`on_hands`](Self::on_hands). A malformed batch is
    /// rejected whole and leaves the scene untouched.
    pub fn on_hands_flat<S: AsRef<str>>(
        &mut self,
        labels: &[S],
        coords: &[f32],
        now_ms: f64,
    ) -> Result<GestureEvents, LandmarkError> {
        match hands_from_flat(labels, coords) {
            Ok(hands) => Ok(self.on_hands(&hands, now_ms)),
            Err(e) => {
                log::warn!("[frame] rejected hand batch: {e}");
                Err(e)
            }
        }
    }

    /// Wink sparks. `None` means no face this frame.
    pub fn on_face(&mut self, face: Option<&FaceLandmarks>, now_ms: f64) -> Option<Eye> {
        let face = face?;
        let eye = self.wink.observe(face, now_ms)?;
        log::debug!("[wink] {} eye", eye.as_str());
        let mut ctx = EmitContext {
            config: &self.config,
            viewport: self.viewport,
            now_ms,
            particles: &mut self.particles,
            strokes: &mut self.strokes,
        };
        emit_wink(eye, face, &mut ctx);
        Some(eye)
    }

    pub fn on_face_flat(
        &mut self,
        coords: Option<&[f32]>,
        now_ms: f64,
    ) -> Result<Option<Eye>, LandmarkError> {
        let face = match coords.map(FaceLandmarks::from_flat).transpose() {
            Ok(face) => face,
            Err(e) => {
                log::warn!("[frame] rejected face mesh: {e}");
                return Err(e);
            }
        };
        Ok(self.on_face(face.as_ref(), now_ms))
    }

    /// Wipe trails, anchors and the ink layer. Gesture history and the mode
    /// are untouched.
    pub fn clear_all(&mut self) {
        self.strokes.clear();
        log::info!("[erase] clear all");
    }

    /// One render tick: repaint the effects layer from current state and lay
    /// any new ink onto the persistent layer.
    pub fn tick<E, I>(&mut self, effects: &mut E, ink: &mut I)
    where
        E: RenderSurface + ?Sized,
        I: RenderSurface + ?Sized,
    {
        self.ticks += 1;
        effects.clear();
        self.particles.step();

        let (clear_ink, segments) = self.strokes.take_ink();
        if clear_ink {
            ink.clear();
        }
        for seg in &segments {
            draw_segment(ink, seg);
        }

        if !self.config.persistent_line {
            let style = self.config.stroke_style();
            for hand in HandLabel::ALL {
                render_trail(effects, self.strokes.trail(hand), &style);
            }
        }

        render_particles(effects, self.particles.live());
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn particles(&self) -> &ParticleSystem {
        &self.particles
    }

    pub fn strokes(&self) -> &StrokeState {
        &self.strokes
    }

    pub fn gesture_state(&self, hand: HandLabel) -> &HandGestureState {
        self.machine.hand(hand)
    }
}

impl Default for FxScene {
    fn default() -> Self {
        Self::new(FxConfig::default(), 42)
    }
}
