//! Perspective projection for the hobby network engine.
//!
//! This crate provides:
//! - A fixed-parameter perspective camera mapping object space to canvas pixels
//! - The inverse mapping from a canvas point at a known depth back to object space
//! - Guarding against the projection singularity at `z = -view_distance`

mod camera;

pub use camera::{project, PerspectiveCamera, ProjectedPoint};
