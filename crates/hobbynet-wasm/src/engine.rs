//! Engine state behind the JavaScript API.
//!
//! Everything here is plain Rust so it can be exercised without a browser;
//! `NetworkEngine` only converts values at the boundary.

use glam::DVec2;
use hobbynet_core::{
    sample_roster, shared_attributes, Category, Dataset, Entity, EntityId, HobbynetError, Viewport,
};
use hobbynet_layout::{RelationCache, RotationDriver};
use hobbynet_render_2d::{
    build_frame_cached, build_scene, depth_to_opacity, similarity_to_color, Frame, FrameOptions,
    HitOptions, Interaction, OpacityBand, PointerMapping, Scene, SceneStyle,
};

use crate::types::{EngineOptionsJs, FrameJs, HitLinkJs, HitNodeJs, LinkJs, NodeJs};

/// Dataset, category, rotation and interaction state for one canvas.
#[derive(Debug, Clone)]
pub struct Engine {
    entities: Vec<Entity>,
    category: Category,
    rotation: RotationDriver,
    viewport: Viewport,
    pointer: PointerMapping,
    interaction: Interaction,
    cache: RelationCache,
    frame_options: FrameOptions,
    hit_options: HitOptions,
    style: SceneStyle,
}

impl Engine {
    /// An engine over the seeded demo roster.
    pub fn with_roster(seed: u64) -> Self {
        Self::with_entities(sample_roster(seed))
    }

    /// An engine over already validated entities.
    pub fn with_entities(entities: Vec<Entity>) -> Self {
        let viewport = Viewport::default();
        Self {
            entities,
            category: Category::default(),
            rotation: RotationDriver::default(),
            viewport,
            pointer: PointerMapping::identity(viewport.width(), viewport.height()),
            interaction: Interaction::default(),
            cache: RelationCache::new(),
            frame_options: FrameOptions::default(),
            hit_options: HitOptions::default(),
            style: SceneStyle::default(),
        }
    }

    /// Replace the dataset with a validated JSON dataset.
    ///
    /// On error the current dataset is left untouched.
    pub fn load_json(&mut self, json: &str) -> Result<usize, HobbynetError> {
        let dataset = Dataset::from_json(json)?;
        self.entities = dataset.into_entities();
        self.cache.invalidate();
        self.interaction.clear();
        tracing::debug!(entities = self.entities.len(), "dataset replaced");
        Ok(self.entities.len())
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Select a category by key (`"all"`, `"games"`, ...).
    pub fn set_category(&mut self, key: &str) -> Result<(), HobbynetError> {
        let category: Category = key.parse()?;
        if category != self.category {
            tracing::debug!(from = %self.category, to = %category, "category changed");
            self.category = category;
            self.interaction.hovered = None;
        }
        Ok(())
    }

    pub fn rotation(&self) -> f64 {
        self.rotation.angle()
    }

    /// Advance the spin by one animation step.
    pub fn tick(&mut self) -> f64 {
        self.rotation.tick()
    }

    pub fn set_rotation(&mut self, angle: f64) {
        self.rotation.set_angle(angle);
    }

    /// Set the canvas size in canvas pixels.
    pub fn resize(&mut self, width: f64, height: f64) -> Result<(), HobbynetError> {
        self.viewport = Viewport::new(width, height)?;
        self.pointer.canvas_width = width;
        self.pointer.canvas_height = height;
        Ok(())
    }

    /// Set the CSS box size the canvas is displayed at.
    pub fn set_display_size(&mut self, css_width: f64, css_height: f64) {
        self.pointer.css_width = css_width;
        self.pointer.css_height = css_height;
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    pub fn apply_options(&mut self, options: &EngineOptionsJs) {
        options.apply(&mut self.frame_options, &mut self.hit_options, &mut self.rotation);
    }

    /// Build the current frame.
    pub fn frame(&mut self) -> Result<Frame<'_>, HobbynetError> {
        let frame = build_frame_cached(
            &mut self.cache,
            &self.entities,
            self.category,
            self.rotation.angle(),
            self.viewport,
            &self.frame_options,
        )?;
        Ok(frame)
    }

    /// The current frame as plain data.
    pub fn snapshot(&mut self) -> Result<FrameJs, HobbynetError> {
        let category = self.category;
        let frame = self.frame()?;
        let radius = frame.radius;

        let nodes = frame
            .nodes
            .iter()
            .map(|node| NodeJs {
                id: node.id().0,
                name: node.entity.name.clone(),
                x: node.screen.x,
                y: node.screen.y,
                scale: node.scale,
                depth: node.depth,
                rank: node.rank,
                opacity: depth_to_opacity(node.depth, radius, OpacityBand::NODE),
                caption: node.entity.profile.display_value(category),
            })
            .collect();

        let links = frame
            .links
            .iter()
            .map(|link| LinkJs {
                source: link.link.source.0,
                target: link.link.target.0,
                weight: link.link.weight,
                x1: link.source.x,
                y1: link.source.y,
                x2: link.target.x,
                y2: link.target.y,
                color: similarity_to_color(link.link.weight).to_css(),
                opacity: depth_to_opacity(link.mean_depth, radius, OpacityBand::LINK),
            })
            .collect();

        Ok(FrameJs {
            category: category.key().to_string(),
            rotation: frame.rotation,
            width: frame.viewport.width(),
            height: frame.viewport.height(),
            radius,
            nodes,
            links,
        })
    }

    /// Node under a canvas-pixel point.
    pub fn hit_node(&mut self, x: f64, y: f64) -> Result<Option<HitNodeJs>, HobbynetError> {
        let base_radius = self.hit_options.node_radius;
        let frame = self.frame()?;
        Ok(frame.hit_node(DVec2::new(x, y), base_radius).map(|node| HitNodeJs {
            id: node.id().0,
            name: node.entity.name.clone(),
            x: node.screen.x,
            y: node.screen.y,
            radius: base_radius * node.scale,
        }))
    }

    /// Link under a canvas-pixel point, with the values its ends share.
    pub fn hit_link(&mut self, x: f64, y: f64) -> Result<Option<HitLinkJs>, HobbynetError> {
        let threshold = self.hit_options.link_threshold;
        let frame = self.frame()?;
        let Some(link) = frame.hit_link(DVec2::new(x, y), threshold) else {
            return Ok(None);
        };

        let source = frame.nodes[link.source_index].entity;
        let target = frame.nodes[link.target_index].entity;
        Ok(Some(HitLinkJs {
            source: source.id.0,
            target: target.id.0,
            source_name: source.name.clone(),
            target_name: target.name.clone(),
            weight: link.link.weight,
            shared: shared_attributes(&source.profile, &target.profile, frame.category)
                .into_iter()
                .map(Into::into)
                .collect(),
        }))
    }

    /// Track the pointer (element-local CSS pixels). Returns whether the
    /// hovered link changed.
    pub fn pointer_move(&mut self, css_x: f64, css_y: f64) -> Result<bool, HobbynetError> {
        let point = self.pointer.to_canvas(DVec2::new(css_x, css_y));
        let threshold = self.hit_options.link_threshold;
        let hovered = self.frame()?.hit_link(point, threshold).map(|link| link.key());
        Ok(self.interaction.set_hovered(hovered))
    }

    /// Pointer left the canvas.
    pub fn pointer_leave(&mut self) -> bool {
        self.interaction.set_hovered(None)
    }

    /// Click at element-local CSS pixels. Returns the selection afterwards.
    pub fn click(&mut self, css_x: f64, css_y: f64) -> Result<Option<EntityId>, HobbynetError> {
        let point = self.pointer.to_canvas(DVec2::new(css_x, css_y));
        let base_radius = self.hit_options.node_radius;
        let hit = self.frame()?.hit_node(point, base_radius).map(|node| node.id());
        self.interaction.toggle_selection(hit);
        Ok(self.interaction.selected)
    }

    /// Draw commands for the current frame and interaction.
    pub fn scene(&mut self) -> Result<Scene, HobbynetError> {
        let interaction = self.interaction;
        let mut style = self.style.clone();
        style.node_radius = self.hit_options.node_radius;
        let frame = self.frame()?;
        Ok(build_scene(&frame, &interaction, &style))
    }
}
