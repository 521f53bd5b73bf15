//! One-pass frame snapshots: layout, links and projection.

use std::collections::HashMap;

use glam::DVec2;
use hobbynet_core::{Category, Entity, EntityId, ProjectionError, Viewport};
use hobbynet_layout::{
    compute_layout, compute_layout_with_matrix, extract_links, extract_links_with_matrix,
    LayoutOptions, Link, LinkKey, PositionedEntity, RelationCache,
};
use hobbynet_render_3d::PerspectiveCamera;

use crate::hit;

/// Everything that parameterizes a frame besides its inputs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameOptions {
    pub layout: LayoutOptions,
    pub camera: PerspectiveCamera,
}

/// A node on the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedNode<'a> {
    pub entity: &'a Entity,
    /// Canvas position
    pub screen: DVec2,
    /// Perspective scale
    pub scale: f64,
    /// Post-rotation z
    pub depth: f64,
    /// Centrality rank
    pub rank: usize,
}

impl ProjectedNode<'_> {
    pub fn id(&self) -> EntityId {
        self.entity.id
    }
}

/// A link with both endpoints on the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedLink {
    pub link: Link,
    /// Index of the source node in [`Frame::nodes`]
    pub source_index: usize,
    /// Index of the target node in [`Frame::nodes`]
    pub target_index: usize,
    pub source: DVec2,
    pub target: DVec2,
    pub source_scale: f64,
    pub target_scale: f64,
    /// Mean of the endpoint depths
    pub mean_depth: f64,
}

impl ProjectedLink {
    pub fn key(&self) -> LinkKey {
        self.link.key()
    }

    /// Segment midpoint on the canvas.
    pub fn midpoint(&self) -> DVec2 {
        (self.source + self.target) / 2.0
    }
}

/// An immutable snapshot of one rendered frame.
///
/// `nodes` are in paint order (back to front), `links` in extraction order.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame<'a> {
    pub category: Category,
    pub rotation: f64,
    pub viewport: Viewport,
    /// Sphere radius, also the depth range used for opacity
    pub radius: f64,
    pub nodes: Vec<ProjectedNode<'a>>,
    pub links: Vec<ProjectedLink>,
    index: HashMap<EntityId, usize>,
}

/// Lay out, link and project `entities` for one frame.
pub fn build_frame<'a>(
    entities: &'a [Entity],
    category: Category,
    rotation: f64,
    viewport: Viewport,
    options: &FrameOptions,
) -> Result<Frame<'a>, ProjectionError> {
    let positioned = compute_layout(entities, category, rotation, viewport, &options.layout);
    let links = extract_links(&positioned, category);
    assemble(category, rotation, viewport, options, &positioned, links)
}

/// [`build_frame`] with the relation matrix taken from `cache`.
///
/// Produces exactly the same frame; only the pairwise similarity work is
/// shared between frames of the same category.
pub fn build_frame_cached<'a>(
    cache: &mut RelationCache,
    entities: &'a [Entity],
    category: Category,
    rotation: f64,
    viewport: Viewport,
    options: &FrameOptions,
) -> Result<Frame<'a>, ProjectionError> {
    let matrix = cache.get_or_build(entities, category);
    let positioned = compute_layout_with_matrix(entities, matrix, rotation, viewport, &options.layout);
    let links = extract_links_with_matrix(&positioned, matrix);
    assemble(category, rotation, viewport, options, &positioned, links)
}

fn assemble<'a>(
    category: Category,
    rotation: f64,
    viewport: Viewport,
    options: &FrameOptions,
    positioned: &[PositionedEntity<'a>],
    links: Vec<Link>,
) -> Result<Frame<'a>, ProjectionError> {
    let nodes = positioned
        .iter()
        .map(|p| -> Result<ProjectedNode<'a>, ProjectionError> {
            let projected = options.camera.project(p.position, viewport)?;
            Ok(ProjectedNode {
                entity: p.entity,
                screen: projected.screen,
                scale: projected.scale,
                depth: p.depth,
                rank: p.rank,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let index: HashMap<EntityId, usize> = nodes
        .iter()
        .enumerate()
        .map(|(i, node)| (node.id(), i))
        .collect();

    // Every endpoint was extracted from `positioned`, so both lookups succeed.
    let links: Vec<ProjectedLink> = links
        .into_iter()
        .filter_map(|link| {
            let source_index = *index.get(&link.source)?;
            let target_index = *index.get(&link.target)?;
            let (s, t) = (&nodes[source_index], &nodes[target_index]);
            Some(ProjectedLink {
                link,
                source_index,
                target_index,
                source: s.screen,
                target: t.screen,
                source_scale: s.scale,
                target_scale: t.scale,
                mean_depth: (s.depth + t.depth) / 2.0,
            })
        })
        .collect();

    tracing::debug!(nodes = nodes.len(), links = links.len(), %category, "frame assembled");

    Ok(Frame {
        category,
        rotation,
        viewport,
        radius: options.layout.radius(viewport),
        nodes,
        links,
        index,
    })
}

impl<'a> Frame<'a> {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The node for `id`, if it is in this frame.
    pub fn node(&self, id: EntityId) -> Option<&ProjectedNode<'a>> {
        self.index.get(&id).map(|&i| &self.nodes[i])
    }

    /// The link between the two entities of `key`, in either direction.
    pub fn link(&self, key: LinkKey) -> Option<&ProjectedLink> {
        self.links.iter().find(|l| l.key() == key)
    }

    /// Frontmost node under `point` (canvas pixels).
    pub fn hit_node(&self, point: DVec2, base_radius: f64) -> Option<&ProjectedNode<'a>> {
        hit::hit_node(point, &self.nodes, base_radius)
    }

    /// First link within `threshold` pixels of `point` (canvas pixels).
    pub fn hit_link(&self, point: DVec2, threshold: f64) -> Option<&ProjectedLink> {
        hit::hit_link(point, &self.links, threshold)
    }

    /// Links touching `id`: its direct relations under the frame's category.
    pub fn relations_of(&self, id: EntityId) -> impl Iterator<Item = &ProjectedLink> + '_ {
        self.links.iter().filter(move |l| l.link.involves(id))
    }

    /// Whether `other` is `id` itself or directly linked to it.
    pub fn is_related(&self, id: EntityId, other: EntityId) -> bool {
        id == other || self.links.iter().any(|l| l.link.connects(id, other))
    }
}
