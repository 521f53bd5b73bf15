//! Core value types shared by every stage of the pipeline.

use std::fmt;

use crate::errors::ViewportError;
use crate::profile::AttributeProfile;

/// Stable identifier of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EntityId(pub u64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One profiled person in the network.
///
/// Entities are owned by the dataset. The engine only ever borrows them, so
/// `id`, `name` and `profile` are never changed by a layout pass.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Entity {
    pub id: EntityId,
    pub name: String,
    pub profile: AttributeProfile,
}

impl Entity {
    /// Create an entity.
    pub fn new(id: u64, name: impl Into<String>, profile: AttributeProfile) -> Self {
        Self {
            id: EntityId(id),
            name: name.into(),
            profile,
        }
    }
}

/// Canvas dimensions in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Viewport {
    width: f64,
    height: f64,
}

impl Viewport {
    /// Create a viewport; both sides must be finite and positive.
    pub fn new(width: f64, height: f64) -> Result<Self, ViewportError> {
        if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
            Ok(Self { width, height })
        } else {
            Err(ViewportError::InvalidSize { width, height })
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// The shorter side.
    pub fn min_side(&self) -> f64 {
        self.width.min(self.height)
    }

    /// Canvas center `(width / 2, height / 2)`.
    pub fn center(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }
}

impl Default for Viewport {
    /// The 800x600 canvas of the demo page.
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

/// An opaque 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Attach an alpha value.
    pub fn with_alpha(self, alpha: f64) -> Rgba {
        Rgba { rgb: self, alpha }
    }

    /// CSS `rgb(r, g, b)` notation.
    pub fn to_css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const BLACK: Self = Self::new(0, 0, 0);
}

/// An RGB color with a floating point alpha in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba {
    pub rgb: Rgb,
    pub alpha: f64,
}

impl Rgba {
    /// CSS `rgba(r, g, b, a)` notation.
    pub fn to_css(&self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.rgb.r, self.rgb.g, self.rgb.b, self.alpha
        )
    }

    /// Scale the alpha by `factor`.
    pub fn fade(self, factor: f64) -> Self {
        Self {
            rgb: self.rgb,
            alpha: self.alpha * factor,
        }
    }
}
