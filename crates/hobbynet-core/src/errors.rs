//! Error types for the hobby network engine.

use thiserror::Error;

use crate::types::EntityId;

/// Top-level error type for the engine.
#[derive(Debug, Error)]
pub enum HobbynetError {
    #[error(transparent)]
    Category(#[from] CategoryError),

    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error(transparent)]
    Viewport(#[from] ViewportError),

    #[error(transparent)]
    Projection(#[from] ProjectionError),
}

/// Errors when naming a category.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CategoryError {
    #[error("Unknown category: {name}")]
    Unknown { name: String },
}

/// Errors while loading or validating a dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[cfg(feature = "serde")]
    #[error("Invalid dataset JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Entity {entity:?}: unrecognized value {value:?} for field {field}")]
    UnknownValue {
        entity: EntityId,
        field: &'static str,
        value: String,
    },

    #[error("Entity {entity:?}: value {value:?} listed more than once in field {field}")]
    DuplicateTag {
        entity: EntityId,
        field: &'static str,
        value: String,
    },

    #[error("Duplicate entity id {0:?}")]
    DuplicateId(EntityId),

    #[error("Entity {0:?} has an empty display name")]
    EmptyName(EntityId),
}

/// Errors for canvas geometry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ViewportError {
    #[error("Invalid canvas size {width}x{height}: both sides must be finite and positive")]
    InvalidSize { width: f64, height: f64 },
}

/// Errors from the perspective projector.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProjectionError {
    #[error("Point at z = {z} is at or behind the camera plane (z must exceed {limit})")]
    Singular { z: f64, limit: f64 },

    #[error("Cannot project non-finite point ({x}, {y}, {z})")]
    NonFinite { x: f64, y: f64, z: f64 },
}
