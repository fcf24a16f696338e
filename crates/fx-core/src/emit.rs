//! Turns gesture decisions into effects: spark spawns and stroke points.

use crate::config::FxConfig;
use crate::geometry::Viewport;
use crate::interaction::GestureEvent;
use crate::landmarks::{Eye, FaceLandmarks};
use crate::particles::ParticleSystem;
use crate::trail::{Point, StrokeState};

/// Everything an event may write to, borrowed for one frame.
pub struct EmitContext<'a> {
    pub config: &'a FxConfig,
    pub viewport: Viewport,
    pub now_ms: f64,
    pub particles: &'a mut ParticleSystem,
    pub strokes: &'a mut StrokeState,
}

pub fn emit_gesture(event: &GestureEvent, ctx: &mut EmitContext<'_>) {
    match *event {
        GestureEvent::Erase => ctx.strokes.clear(),
        GestureEvent::ModeChanged { .. } => {}
        GestureEvent::Snap { at, .. } => {
            let at = ctx.viewport.to_canvas(at);
            ctx.particles.spawn_burst(at, ctx.config);
        }
        GestureEvent::Rain { at, .. } => {
            let at = ctx.viewport.to_canvas(at);
            ctx.particles.spawn_rain(at, ctx.config);
        }
        GestureEvent::Point { hand, at } => {
            let point = Point::new(ctx.viewport.to_canvas(at), ctx.now_ms);
            ctx.strokes.add_point(hand, point, ctx.config);
        }
        GestureEvent::StrokeEnd { hand } => {
            ctx.strokes.end_stroke(hand, ctx.config.persistent_line);
        }
    }
}

/// Spark at the outer corner of the winking eye.
pub fn emit_wink(eye: Eye, face: &FaceLandmarks, ctx: &mut EmitContext<'_>) {
    let at = ctx.viewport.to_canvas(face.eye(eye).outer);
    ctx.particles.spawn_wink(at, ctx.config);
}
