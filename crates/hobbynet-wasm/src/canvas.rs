//! Canvas rendering for the hobby network engine.
//!
//! Replays a [`Scene`] onto an HTML canvas 2D context.

use std::f64::consts::TAU;

use hobbynet_render_2d::{CirclePrimitive, LinePrimitive, RectPrimitive, RenderCommand, Scene, TextPrimitive};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Canvas renderer for network scenes.
#[wasm_bindgen]
pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

#[wasm_bindgen]
impl CanvasRenderer {
    /// Create a new canvas renderer from a canvas element.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement) -> Result<CanvasRenderer, JsError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|_| JsError::new("Failed to get 2d context"))?
            .ok_or_else(|| JsError::new("Canvas 2d context not available"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsError::new("Failed to cast to CanvasRenderingContext2d"))?;

        Ok(CanvasRenderer { canvas, ctx })
    }

    /// Backing store width in canvas pixels.
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f64 {
        self.canvas.width() as f64
    }

    /// Backing store height in canvas pixels.
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f64 {
        self.canvas.height() as f64
    }

    /// Displayed width in CSS pixels.
    #[wasm_bindgen(getter, js_name = cssWidth)]
    pub fn css_width(&self) -> f64 {
        self.canvas.client_width() as f64
    }

    /// Displayed height in CSS pixels.
    #[wasm_bindgen(getter, js_name = cssHeight)]
    pub fn css_height(&self) -> f64 {
        self.canvas.client_height() as f64
    }
}

impl CanvasRenderer {
    /// Draw every command of `scene` in order.
    pub fn render_scene(&self, scene: &Scene) -> Result<(), JsValue> {
        for command in &scene.commands {
            match command {
                RenderCommand::Clear(color) => {
                    self.ctx.set_fill_style_str(&color.to_css());
                    self.ctx.fill_rect(0.0, 0.0, self.width(), self.height());
                }
                RenderCommand::Line(line) => self.draw_line(line),
                RenderCommand::Circle(circle) => self.draw_circle(circle)?,
                RenderCommand::Rect(rect) => self.draw_rect(rect),
                RenderCommand::Text(text) => self.draw_text(text)?,
            }
        }
        Ok(())
    }

    fn draw_line(&self, line: &LinePrimitive) {
        self.ctx.begin_path();
        self.ctx.move_to(line.from.x, line.from.y);
        self.ctx.line_to(line.to.x, line.to.y);
        self.ctx.set_stroke_style_str(&line.stroke.color.to_css());
        self.ctx.set_line_width(line.stroke.width);
        self.ctx.stroke();
    }

    fn draw_circle(&self, circle: &CirclePrimitive) -> Result<(), JsValue> {
        self.ctx.begin_path();
        self.ctx.arc(circle.center.x, circle.center.y, circle.radius, 0.0, TAU)?;
        if let Some(fill) = circle.fill {
            self.ctx.set_fill_style_str(&fill.to_css());
            self.ctx.fill();
        }
        if let Some(stroke) = circle.stroke {
            self.ctx.set_stroke_style_str(&stroke.color.to_css());
            self.ctx.set_line_width(stroke.width);
            self.ctx.stroke();
        }
        Ok(())
    }

    fn draw_rect(&self, rect: &RectPrimitive) {
        if let Some(fill) = rect.fill {
            self.ctx.set_fill_style_str(&fill.to_css());
            self.ctx.fill_rect(rect.x, rect.y, rect.width, rect.height);
        }
        if let Some(stroke) = rect.stroke {
            self.ctx.set_stroke_style_str(&stroke.color.to_css());
            self.ctx.set_line_width(stroke.width);
            self.ctx.stroke_rect(rect.x, rect.y, rect.width, rect.height);
        }
    }

    fn draw_text(&self, text: &TextPrimitive) -> Result<(), JsValue> {
        self.ctx.set_fill_style_str(&text.color.to_css());
        self.ctx.set_font(&text.font());
        self.ctx.set_text_align(text.align.as_css());
        self.ctx.set_text_baseline(text.baseline.as_css());
        self.ctx.fill_text(&text.text, text.position.x, text.position.y)
    }
}
