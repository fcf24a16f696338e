//! The 2D drawing seam between the core and a frontend.
//!
//! A frontend supplies two stacked layers: an effects layer that is cleared
//! and repainted every tick, and an ink layer that only ever accumulates until
//! an erase. Both implement [`RenderSurface`].

use crate::config::{Color, SparkShape, StrokeStyle};
use crate::constants::STAR_SPIKES;
use crate::particles::Particle;
use crate::trail::{InkSegment, PathCommand, TrailQueue};
use glam::Vec2;
use smallvec::SmallVec;
use std::f32::consts::{FRAC_PI_2, PI};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Circle {
        center: Vec2,
        radius: f32,
    },
    Star {
        center: Vec2,
        spikes: usize,
        outer: f32,
        inner: f32,
    },
    /// `top` is the upper edge on the centre line; the point sits `size` below it.
    Heart {
        top: Vec2,
        size: f32,
    },
    Rect {
        origin: Vec2,
        size: Vec2,
    },
}

impl Shape {
    /// Alternating outer/inner vertices, starting straight up.
    pub fn star_vertices(
        center: Vec2,
        spikes: usize,
        outer: f32,
        inner: f32,
    ) -> SmallVec<[Vec2; 12]> {
        let step = PI / spikes as f32;
        let mut rot = 3.0 * FRAC_PI_2;
        let mut out = SmallVec::with_capacity(spikes * 2);
        for _ in 0..spikes {
            out.push(center + Vec2::new(rot.cos(), rot.sin()) * outer);
            rot += step;
            out.push(center + Vec2::new(rot.cos(), rot.sin()) * inner);
            rot += step;
        }
        out
    }
}

pub trait RenderSurface {
    fn clear(&mut self);
    fn stroke_path(&mut self, path: &[PathCommand], style: &StrokeStyle);
    fn fill_shape(&mut self, shape: &Shape, color: Color, alpha: f32);
}

pub fn particle_shape(p: &Particle) -> Shape {
    match p.shape {
        SparkShape::Star => Shape::Star {
            center: p.position,
            spikes: STAR_SPIKES,
            outer: p.size * 2.0,
            inner: p.size,
        },
        SparkShape::Heart => Shape::Heart {
            top: p.position - Vec2::new(0.0, p.size),
            size: p.size * 3.0,
        },
        SparkShape::Spray => Shape::Rect {
            origin: p.position,
            size: Vec2::splat(p.size),
        },
        SparkShape::Circle => Shape::Circle {
            center: p.position,
            radius: p.size,
        },
    }
}

pub fn render_particles<S: RenderSurface + ?Sized>(surface: &mut S, particles: &[Particle]) {
    for p in particles {
        surface.fill_shape(&particle_shape(p), p.color, p.alpha());
    }
}

pub fn render_trail<S: RenderSurface + ?Sized>(
    surface: &mut S,
    trail: &TrailQueue,
    style: &StrokeStyle,
) {
    let path = trail.smoothed_path();
    if !path.is_empty() {
        surface.stroke_path(&path, style);
    }
}

pub fn draw_segment<S: RenderSurface + ?Sized>(surface: &mut S, segment: &InkSegment) {
    surface.stroke_path(&segment.path(), &segment.style);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear,
    Stroke {
        path: Vec<PathCommand>,
        style: StrokeStyle,
    },
    Fill {
        shape: Shape,
        color: Color,
        alpha: f32,
    },
}

/// Surface that records what it was asked to draw. Used by the headless
/// driver and by tests.
#[derive(Clone, Debug, Default)]
pub struct CommandLog {
    pub commands: Vec<DrawCommand>,
}

impl CommandLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strokes(&self) -> impl Iterator<Item = &DrawCommand> + '_ {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Stroke { .. }))
    }

    pub fn fills(&self) -> impl Iterator<Item = &DrawCommand> + '_ {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Fill { .. }))
    }

    pub fn clears(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Clear))
            .count()
    }

    pub fn reset(&mut self) {
        self.commands.clear();
    }
}

impl RenderSurface for CommandLog {
    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn stroke_path(&mut self, path: &[PathCommand], style: &StrokeStyle) {
        self.commands.push(DrawCommand::Stroke {
            path: path.to_vec(),
            style: *style,
        });
    }

    fn fill_shape(&mut self, shape: &Shape, color: Color, alpha: f32) {
        self.commands.push(DrawCommand::Fill {
            shape: *shape,
            color,
            alpha,
        });
    }
}
