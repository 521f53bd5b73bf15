//! Entities annotated with their place in the 3D scene.

use glam::DVec3;
use hobbynet_core::{Entity, EntityId};

/// An entity placed in object space for one layout pass.
///
/// This is a disposable view over a borrowed [`Entity`]; it is rebuilt on
/// every pass and never stored across category or rotation changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionedEntity<'a> {
    /// The underlying entity
    pub entity: &'a Entity,
    /// Position after rotation
    pub position: DVec3,
    /// Position on the sphere before rotation
    pub base: DVec3,
    /// Post-rotation z, the paint-order key
    pub depth: f64,
    /// Centrality rank (0 = most central)
    pub rank: usize,
    /// Index in the input entity list
    pub input_index: usize,
}

impl PositionedEntity<'_> {
    pub fn id(&self) -> EntityId {
        self.entity.id
    }
}
