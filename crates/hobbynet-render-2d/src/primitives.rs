//! Draw commands for a 2D canvas.
//!
//! A [`Scene`] is a flat list of commands in paint order. It carries no
//! drawing backend; the host replays it onto whatever surface it owns.

use glam::DVec2;
use hobbynet_core::{Rgb, Rgba};

/// A render command representing something to draw.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Fill the whole canvas
    Clear(Rgb),
    /// Stroke a straight segment
    Line(LinePrimitive),
    /// Draw a circle
    Circle(CirclePrimitive),
    /// Draw an axis-aligned rectangle
    Rect(RectPrimitive),
    /// Draw text
    Text(TextPrimitive),
}

/// Stroke style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Rgba,
    pub width: f64,
}

impl Stroke {
    pub fn new(color: Rgba, width: f64) -> Self {
        Self { color, width }
    }
}

/// A line segment primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub from: DVec2,
    pub to: DVec2,
    pub stroke: Stroke,
}

impl LinePrimitive {
    pub fn new(from: DVec2, to: DVec2, stroke: Stroke) -> Self {
        Self { from, to, stroke }
    }
}

/// A circle primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CirclePrimitive {
    pub center: DVec2,
    pub radius: f64,
    pub fill: Option<Rgba>,
    pub stroke: Option<Stroke>,
}

impl CirclePrimitive {
    pub fn new(center: DVec2, radius: f64) -> Self {
        Self {
            center,
            radius,
            fill: None,
            stroke: None,
        }
    }

    pub fn with_fill(mut self, fill: Rgba) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = Some(stroke);
        self
    }
}

/// A rectangle primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Option<Rgba>,
    pub stroke: Option<Stroke>,
}

impl RectPrimitive {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill: None,
            stroke: None,
        }
    }

    pub fn with_fill(mut self, fill: Rgba) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = Some(stroke);
        self
    }
}

/// Horizontal text anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    /// Canvas `textAlign` keyword.
    pub fn as_css(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

/// Vertical text anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextBaseline {
    Top,
    Middle,
    #[default]
    Alphabetic,
}

impl TextBaseline {
    /// Canvas `textBaseline` keyword.
    pub fn as_css(&self) -> &'static str {
        match self {
            TextBaseline::Top => "top",
            TextBaseline::Middle => "middle",
            TextBaseline::Alphabetic => "alphabetic",
        }
    }
}

/// A text primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub position: DVec2,
    pub text: String,
    pub font_size: f64,
    pub font_family: String,
    pub color: Rgba,
    pub align: TextAlign,
    pub baseline: TextBaseline,
}

impl TextPrimitive {
    pub fn new(position: DVec2, text: impl Into<String>) -> Self {
        Self {
            position,
            text: text.into(),
            font_size: 12.0,
            font_family: "Arial".to_string(),
            color: Rgb::BLACK.with_alpha(1.0),
            align: TextAlign::default(),
            baseline: TextBaseline::default(),
        }
    }

    pub fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    pub fn with_color(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }

    pub fn centered(mut self) -> Self {
        self.align = TextAlign::Center;
        self.baseline = TextBaseline::Middle;
        self
    }

    pub fn with_align(mut self, align: TextAlign, baseline: TextBaseline) -> Self {
        self.align = align;
        self.baseline = baseline;
        self
    }

    /// CSS font shorthand, e.g. `12px Arial`.
    pub fn font(&self) -> String {
        format!("{}px {}", self.font_size, self.font_family)
    }
}

/// A scene containing all render commands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub commands: Vec<RenderCommand>,
    pub width: f64,
    pub height: f64,
}

impl Scene {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            commands: Vec::new(),
            width,
            height,
        }
    }

    pub fn clear(&mut self, color: Rgb) {
        self.commands.push(RenderCommand::Clear(color));
    }

    pub fn line(&mut self, line: LinePrimitive) {
        self.commands.push(RenderCommand::Line(line));
    }

    pub fn circle(&mut self, circle: CirclePrimitive) {
        self.commands.push(RenderCommand::Circle(circle));
    }

    pub fn rect(&mut self, rect: RectPrimitive) {
        self.commands.push(RenderCommand::Rect(rect));
    }

    pub fn text(&mut self, text: TextPrimitive) {
        self.commands.push(RenderCommand::Text(text));
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_records_commands_in_call_order() {
        let mut scene = Scene::new(800.0, 600.0);
        assert!(scene.is_empty());

        scene.clear(Rgb::WHITE);
        scene.line(LinePrimitive::new(
            DVec2::ZERO,
            DVec2::new(10.0, 0.0),
            Stroke::new(Rgb::BLACK.with_alpha(0.5), 1.0),
        ));
        scene.circle(CirclePrimitive::new(DVec2::new(5.0, 5.0), 3.0));
        scene.text(TextPrimitive::new(DVec2::new(5.0, 5.0), "Ada").centered());

        assert_eq!(scene.len(), 4);
        assert!(matches!(scene.commands[0], RenderCommand::Clear(_)));
        assert!(matches!(scene.commands[1], RenderCommand::Line(_)));
        assert!(matches!(scene.commands[2], RenderCommand::Circle(_)));
        assert!(matches!(scene.commands[3], RenderCommand::Text(_)));
    }

    #[test]
    fn test_font_shorthand() {
        let text = TextPrimitive::new(DVec2::ZERO, "x").with_font_size(14.0);
        assert_eq!(text.font(), "14px Arial");
    }
}
