//! Geometric queries in canvas pixel space.
//!
//! Both queries are total: a miss is `None`, never an error. Points must
//! already be in canvas pixels; see [`PointerMapping`] for converting
//! element-local CSS coordinates.

use glam::DVec2;

use crate::frame::{ProjectedLink, ProjectedNode};

/// Hit-test tolerances.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitOptions {
    /// Node disc radius at scale 1, in pixels
    pub node_radius: f64,
    /// Maximum pointer distance from a link segment, in pixels
    pub link_threshold: f64,
}

impl Default for HitOptions {
    fn default() -> Self {
        Self {
            node_radius: 20.0,
            link_threshold: 5.0,
        }
    }
}

/// Whether `point` lies in the closed disc of `radius` around `center`.
///
/// Compares squared distances, so no square root is taken.
#[inline]
pub fn point_in_disc(point: DVec2, center: DVec2, radius: f64) -> bool {
    point.distance_squared(center) <= radius * radius
}

/// Distance from `point` to the segment `a`–`b`.
///
/// The point is projected onto the segment's line and the parameter clamped
/// to [0, 1]. A zero-length segment degenerates to the distance to `a`.
pub fn point_segment_distance(point: DVec2, a: DVec2, b: DVec2) -> f64 {
    let ab = b - a;
    let length_squared = ab.length_squared();
    if length_squared == 0.0 {
        return point.distance(a);
    }
    let t = ((point - a).dot(ab) / length_squared).clamp(0.0, 1.0);
    point.distance(a + ab * t)
}

/// The frontmost node whose projected disc contains `point`.
///
/// `nodes` must be in paint order (back to front). Nodes are tested from the
/// last painted backwards, so where discs overlap the one drawn on top wins.
/// The disc radius is `base_radius × scale`.
pub fn hit_node<'n, 'a>(
    point: DVec2,
    nodes: &'n [ProjectedNode<'a>],
    base_radius: f64,
) -> Option<&'n ProjectedNode<'a>> {
    nodes
        .iter()
        .rev()
        .find(|node| point_in_disc(point, node.screen, base_radius * node.scale))
}

/// The first link, in extraction order, whose segment lies within
/// `threshold` pixels of `point`.
pub fn hit_link(point: DVec2, links: &[ProjectedLink], threshold: f64) -> Option<&ProjectedLink> {
    links
        .iter()
        .find(|link| point_segment_distance(point, link.source, link.target) <= threshold)
}

/// Maps element-local CSS pixels to canvas pixels.
///
/// A canvas whose backing store differs from its CSS box (device pixel ratio,
/// responsive styling) needs this before any hit test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerMapping {
    pub css_width: f64,
    pub css_height: f64,
    pub canvas_width: f64,
    pub canvas_height: f64,
}

impl PointerMapping {
    pub fn new(css_width: f64, css_height: f64, canvas_width: f64, canvas_height: f64) -> Self {
        Self {
            css_width,
            css_height,
            canvas_width,
            canvas_height,
        }
    }

    /// A mapping where CSS and canvas pixels coincide.
    pub fn identity(width: f64, height: f64) -> Self {
        Self::new(width, height, width, height)
    }

    /// Horizontal and vertical canvas pixels per CSS pixel.
    pub fn ratio(&self) -> DVec2 {
        let axis = |canvas: f64, css: f64| if css > 0.0 { canvas / css } else { 1.0 };
        DVec2::new(
            axis(self.canvas_width, self.css_width),
            axis(self.canvas_height, self.css_height),
        )
    }

    /// Convert an element-local pointer position to canvas pixels.
    pub fn to_canvas(&self, css: DVec2) -> DVec2 {
        css * self.ratio()
    }
}
