//! Similarity color ramp and depth-based opacity.

use hobbynet_core::Rgb;

/// Hue for a similarity score: 0° (red) at 1, 270° (violet) at 0.
pub fn similarity_to_hue(score: f64) -> f64 {
    ((1.0 - score) * 270.0).clamp(0.0, 270.0)
}

/// Link color for a similarity score, at full saturation and 50% lightness.
pub fn similarity_to_color(score: f64) -> Rgb {
    hsl_to_rgb(similarity_to_hue(score), 1.0, 0.5)
}

/// Standard HSL to RGB conversion.
///
/// `hue` is in degrees (wrapped into [0, 360)), `saturation` and `lightness`
/// in [0, 1]. Channels are rounded half up.
pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> Rgb {
    let hue = hue.rem_euclid(360.0);
    let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let x = c * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());
    let m = lightness - c / 2.0;

    let (r, g, b) = match hue {
        h if h < 60.0 => (c, x, 0.0),
        h if h < 120.0 => (x, c, 0.0),
        h if h < 180.0 => (0.0, c, x),
        h if h < 240.0 => (0.0, x, c),
        h if h < 300.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Rgb::new(channel(r + m), channel(g + m), channel(b + m))
}

#[inline]
fn channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Opacity limits so nothing becomes fully invisible or fully opaque.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpacityBand {
    pub min: f64,
    pub max: f64,
}

impl OpacityBand {
    /// Links: 0.1 to 0.8.
    pub const LINK: Self = Self { min: 0.1, max: 0.8 };
    /// Nodes: 0.3 to 1.0.
    pub const NODE: Self = Self { min: 0.3, max: 1.0 };

    /// Clamp `value` into the band.
    pub fn clamp(&self, value: f64) -> f64 {
        value.min(self.max).max(self.min)
    }
}

/// Map depth to opacity: nearest (`z = -max_z`) is most opaque, farthest
/// (`z = max_z`) least, linear in between, clamped to `band`.
///
/// A non-positive `max_z` has no depth range and yields `band.max`.
pub fn depth_to_opacity(z: f64, max_z: f64, band: OpacityBand) -> f64 {
    if !(max_z > 0.0) {
        return band.max;
    }
    band.clamp(1.0 - (z + max_z) / (2.0 * max_z))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_similarity_is_red() {
        assert_eq!(similarity_to_hue(1.0), 0.0);
        assert_eq!(similarity_to_color(1.0), Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_no_similarity_is_violet() {
        assert_eq!(similarity_to_hue(0.0), 270.0);
        assert_eq!(similarity_to_color(0.0), Rgb::new(128, 0, 255));
    }

    #[test]
    fn test_intermediate_scores() {
        // hue 135: green sector, x = 0.25
        assert_eq!(similarity_to_color(0.5), Rgb::new(0, 255, 64));
        // hue 67.5: yellow-green sector, x = 0.875
        assert_eq!(similarity_to_color(0.75), Rgb::new(223, 255, 0));
    }

    #[test]
    fn test_hue_is_clamped() {
        assert_eq!(similarity_to_hue(1.5), 0.0);
        assert_eq!(similarity_to_hue(-0.5), 270.0);
    }

    #[test]
    fn test_hsl_primaries() {
        assert_eq!(hsl_to_rgb(120.0, 1.0, 0.5), Rgb::new(0, 255, 0));
        assert_eq!(hsl_to_rgb(240.0, 1.0, 0.5), Rgb::new(0, 0, 255));
        assert_eq!(hsl_to_rgb(0.0, 0.0, 1.0), Rgb::WHITE);
        assert_eq!(hsl_to_rgb(330.0, 1.0, 0.5), Rgb::new(255, 0, 128));
    }

    #[test]
    fn test_depth_to_opacity_bands() {
        let max_z = 240.0;
        assert_eq!(depth_to_opacity(-max_z, max_z, OpacityBand::LINK), 0.8);
        assert_eq!(depth_to_opacity(-max_z, max_z, OpacityBand::NODE), 1.0);
        assert_eq!(depth_to_opacity(max_z, max_z, OpacityBand::LINK), 0.1);
        assert_eq!(depth_to_opacity(max_z, max_z, OpacityBand::NODE), 0.3);
        assert_eq!(depth_to_opacity(0.0, max_z, OpacityBand::NODE), 0.5);
        assert_eq!(depth_to_opacity(-10_000.0, max_z, OpacityBand::NODE), 1.0);
    }

    #[test]
    fn test_depth_to_opacity_without_range() {
        assert_eq!(depth_to_opacity(3.0, 0.0, OpacityBand::LINK), 0.8);
        assert_eq!(depth_to_opacity(3.0, f64::NAN, OpacityBand::NODE), 1.0);
    }
}
