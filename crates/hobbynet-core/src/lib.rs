//! Core types, attribute profiles, and the similarity model for the hobby
//! network engine.
//!
//! This crate provides the foundational types used across all other hobbynet crates:
//! - Entities and their attribute profiles
//! - The closed set of attribute categories
//! - The pairwise similarity model
//! - Dataset loading and validation
//! - Error types

pub mod category;
pub mod errors;
pub mod profile;
pub mod roster;
pub mod similarity;
pub mod types;

#[cfg(feature = "serde")]
pub mod dataset;

pub use category::*;
pub use errors::*;
pub use profile::*;
pub use roster::sample_roster;
pub use similarity::*;
pub use types::*;

#[cfg(feature = "serde")]
pub use dataset::Dataset;
