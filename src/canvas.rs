use crate::core::{Glow, Rgba, Surface};
use crate::dom;
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// [`Surface`] backed by a canvas 2D context. Drawing happens in CSS pixels;
/// the context transform maps them onto the device-pixel backing store.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    size: Vec2,
}

impl CanvasSurface {
    /// Fails when the canvas cannot provide a 2D context; callers treat that
    /// as "this backdrop does not run".
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("getContext failed: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("canvas has no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self {
            canvas,
            ctx,
            size: Vec2::ZERO,
        })
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn resize(&mut self, size: Vec2) {
        let dpr = dom::device_pixel_ratio();
        // assigning width/height resets the context, transform included
        dom::sync_canvas_backing_size(&self.canvas, size, dpr);
        _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
        self.size = size;
    }

    fn clear(&mut self) {
        self.ctx
            .clear_rect(0.0, 0.0, self.size.x as f64, self.size.y as f64);
    }

    fn fill_background(&mut self, color: Rgba) {
        self.ctx.set_fill_style_str(&color.css());
        self.ctx
            .fill_rect(0.0, 0.0, self.size.x as f64, self.size.y as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba, glow: Option<Glow>) {
        let ctx = &self.ctx;
        ctx.begin_path();
        _ = ctx.arc(
            center.x as f64,
            center.y as f64,
            radius.max(0.0) as f64,
            0.0,
            TAU,
        );
        if let Some(g) = glow {
            ctx.set_shadow_color(&g.color.css());
            ctx.set_shadow_blur(g.blur as f64);
        }
        ctx.set_fill_style_str(&color.css());
        ctx.fill();
        if glow.is_some() {
            ctx.set_shadow_blur(0.0);
        }
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        let ctx = &self.ctx;
        ctx.begin_path();
        ctx.move_to(from.x as f64, from.y as f64);
        ctx.line_to(to.x as f64, to.y as f64);
        ctx.set_stroke_style_str(&color.css());
        ctx.set_line_width(width as f64);
        ctx.stroke();
    }

    fn stroke_fading_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        let ctx = &self.ctx;
        let gradient =
            ctx.create_linear_gradient(from.x as f64, from.y as f64, to.x as f64, to.y as f64);
        _ = gradient.add_color_stop(0.0, &color.css());
        _ = gradient.add_color_stop(1.0, &color.with_alpha(0.0).css());
        ctx.begin_path();
        ctx.move_to(from.x as f64, from.y as f64);
        ctx.line_to(to.x as f64, to.y as f64);
        ctx.set_stroke_style_canvas_gradient(&gradient);
        ctx.set_line_width(width as f64);
        ctx.stroke();
    }
}
