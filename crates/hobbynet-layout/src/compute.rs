//! Centrality-ordered placement on a golden-angle sphere.

use std::cmp::Ordering;
use std::f64::consts::PI;

use glam::DVec3;
use hobbynet_core::{Category, Entity, Viewport};

use crate::matrix::RelationMatrix;
use crate::positioned::PositionedEntity;

/// The golden ratio φ = (1 + √5) / 2.
pub const GOLDEN_RATIO: f64 = 1.618_033_988_749_895;

/// Options for layout computation.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutOptions {
    /// Sphere radius as a fraction of the shorter canvas side
    pub radius_factor: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self { radius_factor: 0.4 }
    }
}

impl LayoutOptions {
    /// Sphere radius for a canvas.
    pub fn radius(&self, viewport: Viewport) -> f64 {
        self.radius_factor * viewport.min_side()
    }
}

/// Lay out `entities` for one frame.
///
/// The result is sorted back-to-front: depth descending, ties in input order.
pub fn compute_layout<'a>(
    entities: &'a [Entity],
    category: Category,
    rotation: f64,
    viewport: Viewport,
    options: &LayoutOptions,
) -> Vec<PositionedEntity<'a>> {
    if entities.is_empty() {
        return Vec::new();
    }
    let matrix = RelationMatrix::build(entities, category);
    compute_layout_with_matrix(entities, &matrix, rotation, viewport, options)
}

/// Lay out `entities` using a prebuilt relation matrix.
///
/// `matrix` must have been built from `entities`; debug builds check this
/// and panic on a mismatch. [`RelationCache::get_or_build`] always returns
/// a matching matrix.
///
/// [`RelationCache::get_or_build`]: crate::matrix::RelationCache::get_or_build
pub fn compute_layout_with_matrix<'a>(
    entities: &'a [Entity],
    matrix: &RelationMatrix,
    rotation: f64,
    viewport: Viewport,
    options: &LayoutOptions,
) -> Vec<PositionedEntity<'a>> {
    debug_assert!(
        matrix.matches(entities, matrix.category()),
        "relation matrix does not belong to this entity list"
    );
    if entities.is_empty() {
        return Vec::new();
    }

    let order = rank_by_centrality(&matrix.centrality());
    let radius = options.radius(viewport);
    let count = entities.len();

    let mut positioned: Vec<PositionedEntity<'a>> = order
        .iter()
        .enumerate()
        .map(|(rank, &input_index)| {
            let base = sphere_point(rank, count, radius);
            let position = rotate_y(base, rotation);
            PositionedEntity {
                entity: &entities[input_index],
                position,
                base,
                depth: position.z,
                rank,
                input_index,
            }
        })
        .collect();

    positioned.sort_by(paint_order);

    tracing::debug!(
        entities = count,
        category = %matrix.category(),
        rotation,
        radius,
        "layout pass"
    );
    positioned
}

/// Back to front: larger depth first, ties broken by input order.
fn paint_order(a: &PositionedEntity<'_>, b: &PositionedEntity<'_>) -> Ordering {
    b.depth
        .partial_cmp(&a.depth)
        .unwrap_or(Ordering::Equal)
        .then(a.input_index.cmp(&b.input_index))
}

/// Input indices ordered by centrality, highest first.
///
/// The sort is stable, so equal centralities keep their input order.
pub fn rank_by_centrality(centrality: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..centrality.len()).collect();
    order.sort_by(|&a, &b| {
        centrality[b]
            .partial_cmp(&centrality[a])
            .unwrap_or(Ordering::Equal)
    });
    order
}

/// Object-space position for centrality rank `rank` out of `count` entities.
///
/// Rank 0 is the origin. Every other rank lies on the sphere of `radius`,
/// spread by the golden angle in azimuth and evenly in `cos(polar)`.
pub fn sphere_point(rank: usize, count: usize, radius: f64) -> DVec3 {
    if rank == 0 {
        return DVec3::ZERO;
    }

    let i = rank as f64;
    let theta = 2.0 * PI * i / GOLDEN_RATIO;
    let polar = (1.0 - 2.0 * (i + 0.5) / count as f64).acos();

    DVec3::new(
        radius * polar.sin() * theta.cos(),
        radius * polar.sin() * theta.sin(),
        radius * polar.cos(),
    )
}

/// Rotate about the Y axis: `x' = x·cos − z·sin`, `z' = x·sin + z·cos`.
pub fn rotate_y(point: DVec3, angle: f64) -> DVec3 {
    let (sin, cos) = angle.sin_cos();
    DVec3::new(
        point.x * cos - point.z * sin,
        point.y,
        point.x * sin + point.z * cos,
    )
}
