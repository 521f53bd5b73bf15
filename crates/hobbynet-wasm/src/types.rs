//! JavaScript-facing data transfer types.

use serde::{Deserialize, Serialize};

use hobbynet_core::{Category, SharedAttribute};
use hobbynet_layout::RotationDriver;
use hobbynet_render_2d::{FrameOptions, HitOptions};

/// A selectable category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryJs {
    pub key: String,
    pub label: String,
}

impl From<Category> for CategoryJs {
    fn from(category: Category) -> Self {
        Self {
            key: category.key().to_string(),
            label: category.label().to_string(),
        }
    }
}

/// A projected node for JavaScript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeJs {
    pub id: u64,
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub depth: f64,
    pub rank: usize,
    pub opacity: f64,
    /// Attribute caption for the current category, if any
    pub caption: Option<String>,
}

/// A projected link for JavaScript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkJs {
    pub source: u64,
    pub target: u64,
    pub weight: f64,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    /// CSS `rgb(...)` color
    pub color: String,
    pub opacity: f64,
}

/// One frame snapshot for JavaScript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameJs {
    pub category: String,
    pub rotation: f64,
    pub width: f64,
    pub height: f64,
    pub radius: f64,
    /// Back-to-front paint order
    pub nodes: Vec<NodeJs>,
    pub links: Vec<LinkJs>,
}

/// Node hit-test result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HitNodeJs {
    pub id: u64,
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

/// A value shared by both ends of a link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedAttributeJs {
    pub field: String,
    pub label: String,
    pub value: String,
}

impl From<SharedAttribute> for SharedAttributeJs {
    fn from(shared: SharedAttribute) -> Self {
        Self {
            field: shared.field.key().to_string(),
            label: shared.field.label().to_string(),
            value: shared.value,
        }
    }
}

/// Link hit-test result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HitLinkJs {
    pub source: u64,
    pub target: u64,
    pub source_name: String,
    pub target_name: String,
    pub weight: f64,
    pub shared: Vec<SharedAttributeJs>,
}

/// Engine options from JavaScript. Omitted fields keep their current value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineOptionsJs {
    #[serde(default)]
    pub radius_factor: Option<f64>,
    #[serde(default)]
    pub focal_length: Option<f64>,
    #[serde(default)]
    pub view_distance: Option<f64>,
    #[serde(default)]
    pub node_radius: Option<f64>,
    #[serde(default)]
    pub link_threshold: Option<f64>,
    #[serde(default)]
    pub rotation_step: Option<f64>,
}

impl EngineOptionsJs {
    pub fn apply(&self, frame: &mut FrameOptions, hit: &mut HitOptions, rotation: &mut RotationDriver) {
        if let Some(factor) = self.radius_factor {
            frame.layout.radius_factor = factor;
        }
        if let Some(focal) = self.focal_length {
            frame.camera.focal_length = focal;
        }
        if let Some(distance) = self.view_distance {
            frame.camera.view_distance = distance;
        }
        if let Some(radius) = self.node_radius {
            hit.node_radius = radius;
        }
        if let Some(threshold) = self.link_threshold {
            hit.link_threshold = threshold;
        }
        if let Some(step) = self.rotation_step {
            rotation.set_step(step);
        }
    }
}
