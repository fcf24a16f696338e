use fx_core::surface::{RenderSurface, Shape};
use fx_core::{Color, PathCommand, StrokeStyle, Viewport};
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A 2D canvas layer.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self { canvas, ctx })
    }

    pub fn canvas(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }

    /// Backing-store size in pixels.
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.canvas.width() as f32, self.canvas.height() as f32)
    }

    fn trace_star(&self, center: glam::Vec2, spikes: usize, outer: f32, inner: f32) {
        let ctx = &self.ctx;
        let verts = Shape::star_vertices(center, spikes, outer, inner);
        ctx.begin_path();
        for (i, v) in verts.iter().enumerate() {
            if i == 0 {
                ctx.move_to(v.x as f64, v.y as f64);
            } else {
                ctx.line_to(v.x as f64, v.y as f64);
            }
        }
        ctx.close_path();
    }

    fn trace_heart(&self, top: glam::Vec2, size: f32) {
        let ctx = &self.ctx;
        let (x, y, s) = (top.x as f64, top.y as f64, size as f64);
        let dip = s * 0.3;
        let mid = y + (s + dip) / 2.0;
        let half = s / 2.0;
        ctx.begin_path();
        ctx.move_to(x, y + dip);
        ctx.bezier_curve_to(x, y, x - half, y, x - half, y + dip);
        ctx.bezier_curve_to(x - half, mid, x, mid, x, y + s);
        ctx.bezier_curve_to(x, mid, x + half, mid, x + half, y + dip);
        ctx.bezier_curve_to(x + half, y, x, y, x, y + dip);
        ctx.close_path();
    }
}

impl RenderSurface for CanvasSurface {
    fn clear(&mut self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }

    fn stroke_path(&mut self, path: &[PathCommand], style: &StrokeStyle) {
        let ctx = &self.ctx;
        let color = style.color.to_css();
        ctx.save();
        ctx.set_line_cap("round");
        ctx.set_line_join("round");
        ctx.set_line_width(style.width as f64);
        ctx.set_stroke_style_str(&color);
        match style.glow {
            Some(blur) => {
                ctx.set_shadow_blur(blur as f64);
                ctx.set_shadow_color(&color);
            }
            None => ctx.set_shadow_blur(0.0),
        }
        ctx.begin_path();
        for cmd in path {
            match *cmd {
                PathCommand::MoveTo(p) => ctx.move_to(p.x as f64, p.y as f64),
                PathCommand::QuadTo { ctrl, to } => {
                    ctx.quadratic_curve_to(ctrl.x as f64, ctrl.y as f64, to.x as f64, to.y as f64)
                }
                PathCommand::LineTo(p) => ctx.line_to(p.x as f64, p.y as f64),
            }
        }
        ctx.stroke();
        ctx.restore();
    }

    fn fill_shape(&mut self, shape: &Shape, color: Color, alpha: f32) {
        self.ctx.save();
        self.ctx.set_global_alpha(alpha as f64);
        self.ctx.set_fill_style_str(&color.to_css());
        match *shape {
            Shape::Circle { center, radius } => {
                self.ctx.begin_path();
                _ = self
                    .ctx
                    .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
                self.ctx.fill();
            }
            Shape::Star {
                center,
                spikes,
                outer,
                inner,
            } => {
                self.trace_star(center, spikes, outer, inner);
                self.ctx.fill();
            }
            Shape::Heart { top, size } => {
                self.trace_heart(top, size);
                self.ctx.fill();
            }
            Shape::Rect { origin, size } => {
                self.ctx.fill_rect(
                    origin.x as f64,
                    origin.y as f64,
                    size.x as f64,
                    size.y as f64,
                );
            }
        }
        self.ctx.restore();
    }
}
