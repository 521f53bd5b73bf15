//! 2D side of the hobby network engine.
//!
//! This crate assembles per-frame snapshots and everything that works on
//! them in canvas space:
//! - [`build_frame`]: layout, link extraction and projection in one pure pass
//! - hit-testing of pointer positions against projected nodes and links
//! - the similarity color ramp and depth-based opacity
//! - draw-command scenes for an external renderer

pub mod color;
pub mod frame;
pub mod hit;
pub mod primitives;
pub mod scene;

pub use color::{depth_to_opacity, hsl_to_rgb, similarity_to_color, similarity_to_hue, OpacityBand};
pub use frame::{build_frame, build_frame_cached, Frame, FrameOptions, ProjectedLink, ProjectedNode};
pub use hit::{hit_link, hit_node, point_in_disc, point_segment_distance, HitOptions, PointerMapping};
pub use primitives::*;
pub use scene::{build_scene, Interaction, SceneStyle};
