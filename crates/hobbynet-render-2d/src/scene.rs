//! Scene building from frames.
//!
//! UI state (selection, hovered link) is passed in as an [`Interaction`]
//! value; the builder itself holds nothing between frames.

use glam::DVec2;
use hobbynet_core::{shared_attributes, EntityId, Rgb, Rgba};
use hobbynet_layout::LinkKey;

use crate::color::{depth_to_opacity, similarity_to_color, OpacityBand};
use crate::frame::{Frame, ProjectedLink, ProjectedNode};
use crate::primitives::{CirclePrimitive, LinePrimitive, RectPrimitive, Scene, Stroke, TextAlign, TextBaseline, TextPrimitive};

/// Pointer-driven highlight state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Interaction {
    /// Clicked node whose direct relations are highlighted
    pub selected: Option<EntityId>,
    /// Link under the pointer
    pub hovered: Option<LinkKey>,
}

impl Interaction {
    /// Apply a click that hit `hit` (or empty canvas).
    ///
    /// Clicking a node selects it; clicking it again, or clicking empty
    /// canvas, clears the selection.
    pub fn toggle_selection(&mut self, hit: Option<EntityId>) {
        self.selected = match hit {
            Some(id) if self.selected != Some(id) => Some(id),
            _ => None,
        };
    }

    /// Update the hovered link, returning whether it changed.
    pub fn set_hovered(&mut self, hovered: Option<LinkKey>) -> bool {
        let changed = self.hovered != hovered;
        self.hovered = hovered;
        changed
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Colors and sizes for scene building.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneStyle {
    pub background: Rgb,
    pub node_fill: Rgb,
    pub node_stroke: Rgb,
    pub label: Rgb,
    pub font_family: String,
    /// Node radius at scale 1
    pub node_radius: f64,
    pub node_stroke_width: f64,
    pub selected_stroke_width: f64,
    /// Label size at scale 1
    pub font_size: f64,
    pub min_font_size: f64,
    /// Caption size relative to the label
    pub caption_ratio: f64,
    /// Gap between a node's disc and its caption
    pub caption_gap: f64,
    /// Link width at scale 1
    pub link_width: f64,
    pub min_link_width: f64,
    /// Alpha multiplier for items unrelated to the selection
    pub dim_factor: f64,
    /// Width multiplier for emphasized links
    pub emphasis: f64,
    pub tooltip_background: Rgba,
    pub tooltip_border: Rgb,
    pub tooltip_text: Rgb,
    pub tooltip_font_size: f64,
    pub tooltip_padding: f64,
}

impl Default for SceneStyle {
    fn default() -> Self {
        Self {
            background: Rgb::new(0x11, 0x18, 0x27),
            node_fill: Rgb::new(31, 41, 55),
            node_stroke: Rgb::new(96, 165, 250),
            label: Rgb::WHITE,
            font_family: "Arial".to_string(),
            node_radius: 20.0,
            node_stroke_width: 1.0,
            selected_stroke_width: 3.0,
            font_size: 12.0,
            min_font_size: 8.0,
            caption_ratio: 0.8,
            caption_gap: 5.0,
            link_width: 2.0,
            min_link_width: 0.5,
            dim_factor: 0.5,
            emphasis: 2.0,
            tooltip_background: Rgb::new(31, 41, 55).with_alpha(0.95),
            tooltip_border: Rgb::new(96, 165, 250),
            tooltip_text: Rgb::WHITE,
            tooltip_font_size: 12.0,
            tooltip_padding: 6.0,
        }
    }
}

/// Build the draw commands for `frame`.
///
/// Paint order: background, links in extraction order, nodes back to front,
/// then the tooltip of the hovered link on top.
pub fn build_scene(frame: &Frame<'_>, interaction: &Interaction, style: &SceneStyle) -> Scene {
    let mut scene = Scene::new(frame.viewport.width(), frame.viewport.height());
    scene.clear(style.background);

    // A selection that is not in this frame highlights nothing.
    let selected = interaction.selected.filter(|&id| frame.node(id).is_some());

    let builder = SceneBuilder { frame, style, selected };
    for link in &frame.links {
        builder.build_link(&mut scene, link, interaction.hovered == Some(link.key()));
    }
    for node in &frame.nodes {
        builder.build_node(&mut scene, node);
    }
    if let Some(link) = interaction.hovered.and_then(|key| frame.link(key)) {
        builder.build_tooltip(&mut scene, link);
    }

    tracing::trace!(commands = scene.len(), "scene built");
    scene
}

struct SceneBuilder<'f, 'a> {
    frame: &'f Frame<'a>,
    style: &'f SceneStyle,
    selected: Option<EntityId>,
}

impl SceneBuilder<'_, '_> {
    fn build_link(&self, scene: &mut Scene, link: &ProjectedLink, hovered: bool) {
        let style = self.style;
        let opacity = depth_to_opacity(link.mean_depth, self.frame.radius, OpacityBand::LINK);
        let mut color = similarity_to_color(link.link.weight).with_alpha(opacity);
        let mut width = (style.link_width * link.source_scale).max(style.min_link_width);

        if let Some(id) = self.selected {
            if link.link.involves(id) {
                width *= style.emphasis;
            } else {
                color = color.fade(style.dim_factor);
            }
        }
        if hovered {
            width *= style.emphasis;
            color.alpha = OpacityBand::LINK.max;
        }

        scene.line(LinePrimitive::new(link.source, link.target, Stroke::new(color, width)));
    }

    fn build_node(&self, scene: &mut Scene, node: &ProjectedNode<'_>) {
        let style = self.style;
        let radius = style.node_radius * node.scale;
        let font_size = (style.font_size * node.scale).max(style.min_font_size);

        let mut opacity = depth_to_opacity(node.depth, self.frame.radius, OpacityBand::NODE);
        let mut stroke_width = style.node_stroke_width;
        if let Some(id) = self.selected {
            if id == node.id() {
                stroke_width = style.selected_stroke_width;
            } else if !self.frame.is_related(id, node.id()) {
                opacity *= style.dim_factor;
            }
        }

        scene.circle(
            CirclePrimitive::new(node.screen, radius)
                .with_fill(style.node_fill.with_alpha(opacity))
                .with_stroke(Stroke::new(style.node_stroke.with_alpha(opacity), stroke_width)),
        );

        let text_color = style.label.with_alpha(opacity);
        scene.text(
            TextPrimitive::new(node.screen, node.entity.name.as_str())
                .with_font_size(font_size)
                .with_font_family(style.font_family.as_str())
                .with_color(text_color)
                .centered(),
        );

        if let Some(caption) = node.entity.profile.display_value(self.frame.category) {
            if !caption.is_empty() {
                let position = node.screen + DVec2::new(0.0, radius + style.caption_gap);
                scene.text(
                    TextPrimitive::new(position, caption)
                        .with_font_size(font_size * style.caption_ratio)
                        .with_font_family(style.font_family.as_str())
                        .with_color(text_color)
                        .centered(),
                );
            }
        }
    }

    fn build_tooltip(&self, scene: &mut Scene, link: &ProjectedLink) {
        let style = self.style;
        let source = &self.frame.nodes[link.source_index];
        let target = &self.frame.nodes[link.target_index];

        let mut lines = vec![
            format!("{} × {}", source.entity.name, target.entity.name),
            format!(
                "{}: {:.0}%",
                self.frame.category.label(),
                link.link.weight * 100.0
            ),
        ];
        lines.extend(
            shared_attributes(&source.entity.profile, &target.entity.profile, self.frame.category)
                .into_iter()
                .map(|shared| format!("{}: {}", shared.field.label(), shared.value)),
        );

        let line_height = style.tooltip_font_size * 1.4;
        let width = lines
            .iter()
            .map(|line| estimate_text_width(line, style.tooltip_font_size))
            .fold(0.0, f64::max)
            + 2.0 * style.tooltip_padding;
        let height = line_height * lines.len() as f64 + 2.0 * style.tooltip_padding;

        // Anchor just below-right of the midpoint, kept inside the canvas.
        let anchor = link.midpoint() + DVec2::splat(10.0);
        let x = anchor.x.min(scene.width - width).max(0.0);
        let y = anchor.y.min(scene.height - height).max(0.0);

        scene.rect(
            RectPrimitive::new(x, y, width, height)
                .with_fill(style.tooltip_background)
                .with_stroke(Stroke::new(style.tooltip_border.with_alpha(1.0), 1.0)),
        );
        for (i, line) in lines.into_iter().enumerate() {
            let position = DVec2::new(
                x + style.tooltip_padding,
                y + style.tooltip_padding + line_height * i as f64,
            );
            scene.text(
                TextPrimitive::new(position, line)
                    .with_font_size(style.tooltip_font_size)
                    .with_font_family(style.font_family.as_str())
                    .with_color(style.tooltip_text.with_alpha(1.0))
                    .with_align(TextAlign::Left, TextBaseline::Top),
            );
        }
    }
}

/// Rough rendered width: ASCII at 0.6 em, everything else (kana, kanji) at 1 em.
fn estimate_text_width(text: &str, font_size: f64) -> f64 {
    text.chars()
        .map(|c| if c.is_ascii() { 0.6 } else { 1.0 })
        .sum::<f64>()
        * font_size
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::{build_frame, FrameOptions};
    use crate::primitives::RenderCommand;
    use hobbynet_core::{
        AttributeProfile, Category, EatingHabit, Entity, Food, Lifestyle, OutdoorIndoor, Viewport,
    };

    fn viewport() -> Viewport {
        Viewport::new(800.0, 600.0).unwrap()
    }

    fn person(id: u64, foods: &[Food]) -> Entity {
        let profile = AttributeProfile::new(Lifestyle::EarlyBird, OutdoorIndoor::Balanced, EatingHabit::Light)
            .with_foods(foods.iter().copied());
        Entity::new(id, format!("p{id}"), profile)
    }

    fn trio() -> Vec<Entity> {
        vec![
            person(1, &[Food::Ramen]),
            person(2, &[Food::Ramen, Food::Curry]),
            person(3, &[Food::Curry]),
        ]
    }

    fn lines(scene: &Scene) -> Vec<&LinePrimitive> {
        scene
            .commands
            .iter()
            .filter_map(|c| match c {
                RenderCommand::Line(line) => Some(line),
                _ => None,
            })
            .collect()
    }

    fn circles(scene: &Scene) -> Vec<&CirclePrimitive> {
        scene
            .commands
            .iter()
            .filter_map(|c| match c {
                RenderCommand::Circle(circle) => Some(circle),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_toggle_selection() {
        let mut interaction = Interaction::default();
        interaction.toggle_selection(Some(EntityId(4)));
        assert_eq!(interaction.selected, Some(EntityId(4)));
        interaction.toggle_selection(Some(EntityId(5)));
        assert_eq!(interaction.selected, Some(EntityId(5)));
        interaction.toggle_selection(Some(EntityId(5)));
        assert_eq!(interaction.selected, None);
        interaction.toggle_selection(Some(EntityId(5)));
        interaction.toggle_selection(None);
        assert_eq!(interaction.selected, None);
    }

    #[test]
    fn test_set_hovered_reports_change() {
        let mut interaction = Interaction::default();
        let key = LinkKey::new(EntityId(1), EntityId(2));
        assert!(interaction.set_hovered(Some(key)));
        assert!(!interaction.set_hovered(Some(key)));
        assert!(interaction.set_hovered(None));
    }

    #[test]
    fn test_paint_order() {
        let entities = trio();
        let frame = build_frame(&entities, Category::Foods, 0.3, viewport(), &FrameOptions::default()).unwrap();
        let scene = build_scene(&frame, &Interaction::default(), &SceneStyle::default());

        assert_eq!(scene.commands[0], RenderCommand::Clear(Rgb::new(0x11, 0x18, 0x27)));
        let first_circle = scene
            .commands
            .iter()
            .position(|c| matches!(c, RenderCommand::Circle(_)))
            .unwrap();
        let last_line = scene
            .commands
            .iter()
            .rposition(|c| matches!(c, RenderCommand::Line(_)))
            .unwrap();
        assert!(last_line < first_circle);

        assert_eq!(lines(&scene).len(), frame.links.len());
        let centers: Vec<DVec2> = circles(&scene).iter().map(|c| c.center).collect();
        let expected: Vec<DVec2> = frame.nodes.iter().map(|n| n.screen).collect();
        assert_eq!(centers, expected);
    }

    #[test]
    fn test_link_color_and_width() {
        let entities = trio();
        let frame = build_frame(&entities, Category::Foods, 0.0, viewport(), &FrameOptions::default()).unwrap();
        let scene = build_scene(&frame, &Interaction::default(), &SceneStyle::default());

        for (line, link) in lines(&scene).into_iter().zip(&frame.links) {
            assert_eq!(line.stroke.color.rgb, similarity_to_color(link.link.weight));
            assert_eq!(line.stroke.width, (2.0 * link.source_scale).max(0.5));
            let alpha = depth_to_opacity(link.mean_depth, frame.radius, OpacityBand::LINK);
            assert_eq!(line.stroke.color.alpha, alpha);
        }
    }

    #[test]
    fn test_selection_dims_unrelated() {
        let entities = trio();
        let frame = build_frame(&entities, Category::Foods, 0.0, viewport(), &FrameOptions::default()).unwrap();
        let style = SceneStyle::default();
        let plain = build_scene(&frame, &Interaction::default(), &style);
        let interaction = Interaction {
            selected: Some(EntityId(1)),
            hovered: None,
        };
        let highlighted = build_scene(&frame, &interaction, &style);

        // Links: 1-2 emphasized, 2-3 dimmed.
        for ((before, after), link) in lines(&plain).into_iter().zip(lines(&highlighted)).zip(&frame.links) {
            if link.link.involves(EntityId(1)) {
                assert_eq!(after.stroke.width, before.stroke.width * 2.0);
                assert_eq!(after.stroke.color.alpha, before.stroke.color.alpha);
            } else {
                assert_eq!(after.stroke.width, before.stroke.width);
                assert_eq!(after.stroke.color.alpha, before.stroke.color.alpha * 0.5);
            }
        }

        // Nodes: 3 is unrelated to 1 and fades; 1 gets a heavier outline.
        for ((before, after), node) in circles(&plain).into_iter().zip(circles(&highlighted)).zip(&frame.nodes) {
            let (before_fill, after_fill) = (before.fill.unwrap(), after.fill.unwrap());
            match node.id().0 {
                3 => assert_eq!(after_fill.alpha, before_fill.alpha * 0.5),
                _ => assert_eq!(after_fill.alpha, before_fill.alpha),
            }
            let width = after.stroke.unwrap().width;
            assert_eq!(width, if node.id().0 == 1 { 3.0 } else { 1.0 });
        }
    }

    #[test]
    fn test_stale_selection_is_ignored() {
        let entities = trio();
        let frame = build_frame(&entities, Category::Foods, 0.0, viewport(), &FrameOptions::default()).unwrap();
        let style = SceneStyle::default();
        let interaction = Interaction {
            selected: Some(EntityId(99)),
            hovered: None,
        };
        assert_eq!(
            build_scene(&frame, &interaction, &style),
            build_scene(&frame, &Interaction::default(), &style)
        );
    }

    #[test]
    fn test_captions_follow_category() {
        let entities = trio();
        let style = SceneStyle::default();
        let texts = |category| {
            let frame = build_frame(&entities, category, 0.0, viewport(), &FrameOptions::default()).unwrap();
            build_scene(&frame, &Interaction::default(), &style)
                .commands
                .into_iter()
                .filter_map(|c| match c {
                    RenderCommand::Text(text) => Some(text.text),
                    _ => None,
                })
                .collect::<Vec<_>>()
        };

        assert_eq!(texts(Category::All).len(), 3);
        let foods = texts(Category::Foods);
        assert_eq!(foods.len(), 6);
        assert!(foods.contains(&"ラーメン, カレー".to_string()));
        assert!(texts(Category::Lifestyle).contains(&"朝型".to_string()));
    }

    #[test]
    fn test_hover_tooltip_lists_shared_values() {
        let entities = trio();
        let frame = build_frame(&entities, Category::Foods, 0.0, viewport(), &FrameOptions::default()).unwrap();
        let interaction = Interaction {
            selected: None,
            hovered: Some(LinkKey::new(EntityId(2), EntityId(1))),
        };
        let scene = build_scene(&frame, &interaction, &SceneStyle::default());

        let rect_at = scene
            .commands
            .iter()
            .position(|c| matches!(c, RenderCommand::Rect(_)))
            .unwrap();
        let tooltip: Vec<&str> = scene.commands[rect_at..]
            .iter()
            .filter_map(|c| match c {
                RenderCommand::Text(text) => Some(text.text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(tooltip.len(), 3);
        assert!(tooltip[0].contains("p1") && tooltip[0].contains("p2"));
        assert_eq!(tooltip[1], "好きな料理: 50%");
        assert_eq!(tooltip[2], "好きな料理: ラーメン");

        let RenderCommand::Rect(rect) = &scene.commands[rect_at] else {
            unreachable!()
        };
        assert!(rect.x >= 0.0 && rect.x + rect.width <= 800.0);
        assert!(rect.y >= 0.0 && rect.y + rect.height <= 600.0);
    }

    #[test]
    fn test_no_tooltip_without_hover() {
        let entities = trio();
        let frame = build_frame(&entities, Category::Foods, 0.0, viewport(), &FrameOptions::default()).unwrap();
        let scene = build_scene(&frame, &Interaction::default(), &SceneStyle::default());
        assert!(!scene.commands.iter().any(|c| matches!(c, RenderCommand::Rect(_))));
    }

    #[test]
    fn test_text_width_estimate() {
        assert_eq!(estimate_text_width("ab", 10.0), 12.0);
        assert_eq!(estimate_text_width("和食", 10.0), 20.0);
    }
}
