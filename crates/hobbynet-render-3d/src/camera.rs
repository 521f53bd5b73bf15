//! The perspective camera.

use glam::{DVec2, DVec3};
use hobbynet_core::{ProjectionError, Viewport};

/// A canvas-space point with its perspective scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedPoint {
    /// Position in canvas pixels
    pub screen: DVec2,
    /// Perspective foreshortening factor `F / (V + z)`
    pub scale: f64,
}

/// Perspective camera looking down +z at the scene origin.
///
/// `scale = focal_length / (view_distance + z)`; points are scaled about the
/// origin and then moved to the canvas center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveCamera {
    /// Field-of-view depth constant F
    pub focal_length: f64,
    /// Camera-to-scene distance V
    pub view_distance: f64,
}

impl Default for PerspectiveCamera {
    fn default() -> Self {
        Self {
            focal_length: 1000.0,
            view_distance: 1000.0,
        }
    }
}

impl PerspectiveCamera {
    /// Smallest `view_distance + z` accepted before a point counts as singular.
    pub const MIN_DENOMINATOR: f64 = 1e-6;

    /// Create a camera.
    pub fn new(focal_length: f64, view_distance: f64) -> Self {
        Self {
            focal_length,
            view_distance,
        }
    }

    /// The lowest z that can still be projected.
    pub fn near_limit(&self) -> f64 {
        Self::MIN_DENOMINATOR - self.view_distance
    }

    /// Perspective scale at depth `z`.
    pub fn scale_at(&self, z: f64) -> Result<f64, ProjectionError> {
        let denominator = self.view_distance + z;
        if !z.is_finite() {
            return Err(ProjectionError::NonFinite { x: 0.0, y: 0.0, z });
        }
        if denominator < Self::MIN_DENOMINATOR {
            tracing::warn!(z, "refusing to project point at or behind the camera plane");
            return Err(ProjectionError::Singular {
                z,
                limit: self.near_limit(),
            });
        }
        Ok(self.focal_length / denominator)
    }

    /// Project an object-space point onto the canvas.
    pub fn project(&self, point: DVec3, viewport: Viewport) -> Result<ProjectedPoint, ProjectionError> {
        if !point.is_finite() {
            return Err(ProjectionError::NonFinite {
                x: point.x,
                y: point.y,
                z: point.z,
            });
        }
        let scale = self.scale_at(point.z)?;
        let (cx, cy) = viewport.center();
        Ok(ProjectedPoint {
            screen: DVec2::new(point.x * scale + cx, point.y * scale + cy),
            scale,
        })
    }

    /// Map a canvas point back to object space, given its depth.
    pub fn unproject(&self, screen: DVec2, z: f64, viewport: Viewport) -> Result<DVec3, ProjectionError> {
        let scale = self.scale_at(z)?;
        let (cx, cy) = viewport.center();
        Ok(DVec3::new((screen.x - cx) / scale, (screen.y - cy) / scale, z))
    }
}

/// Project with the default camera (F = V = 1000).
pub fn project(point: DVec3, viewport: Viewport) -> Result<ProjectedPoint, ProjectionError> {
    PerspectiveCamera::default().project(point, viewport)
}
