//! Spatial layout for the hobby network.
//!
//! This crate turns an entity list and a selected category into positioned,
//! depth-sorted entities and a sparse link list.
//!
//! # Architecture
//!
//! 1. **Relation matrix**: pairwise similarity for the category, reduced to
//!    per-entity centrality (row sums)
//! 2. **Placement**: the most central entity sits at the origin, the rest
//!    follow on a golden-angle sphere in centrality order
//! 3. **Rotation**: a rigid rotation about the Y axis, then a back-to-front
//!    depth sort
//! 4. **Links**: every pair with a positive similarity
//!
//! Every pass is a pure function of its inputs; nothing is carried between
//! frames except an optional [`RelationCache`], which rotation never invalidates.
//!
//! # Example
//!
//! ```ignore
//! use hobbynet_layout::{compute_layout, extract_links, LayoutOptions};
//!
//! let nodes = compute_layout(&entities, Category::All, angle, viewport, &LayoutOptions::default());
//! let links = extract_links(&nodes, Category::All);
//! ```

mod compute;
mod links;
mod matrix;
mod positioned;
mod rotation;

pub use compute::{
    compute_layout, compute_layout_with_matrix, rank_by_centrality, rotate_y, sphere_point,
    LayoutOptions, GOLDEN_RATIO,
};
pub use links::{extract_links, extract_links_with_matrix, Link, LinkKey};
pub use matrix::{RelationCache, RelationMatrix};
pub use positioned::PositionedEntity;
pub use rotation::RotationDriver;
