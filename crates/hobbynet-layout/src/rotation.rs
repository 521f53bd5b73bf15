//! Rotation angle driver for the continuous spin animation.

use std::f64::consts::TAU;

/// Advances the scene rotation by a fixed step per animation tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationDriver {
    angle: f64,
    step: f64,
}

impl RotationDriver {
    /// Radians advanced per tick.
    pub const DEFAULT_STEP: f64 = 0.002;

    /// Create a driver at angle 0.
    pub fn new(step: f64) -> Self {
        Self { angle: 0.0, step }
    }

    /// Current angle in `[0, 2π)`.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Jump to an angle, wrapped into `[0, 2π)`.
    pub fn set_angle(&mut self, angle: f64) {
        self.angle = wrap(angle);
    }

    pub fn set_step(&mut self, step: f64) {
        self.step = step;
    }

    /// Advance one tick and return the new angle.
    pub fn tick(&mut self) -> f64 {
        self.angle = wrap(self.angle + self.step);
        self.angle
    }
}

impl Default for RotationDriver {
    fn default() -> Self {
        Self::new(Self::DEFAULT_STEP)
    }
}

fn wrap(angle: f64) -> f64 {
    if !angle.is_finite() {
        return 0.0;
    }
    // rem_euclid rounds tiny negative angles up to exactly TAU
    let wrapped = angle.rem_euclid(TAU);
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_advances_by_step() {
        let mut driver = RotationDriver::default();
        assert_eq!(driver.tick(), 0.002);
        assert_eq!(driver.tick(), 0.004);
    }

    #[test]
    fn test_angle_wraps() {
        let mut driver = RotationDriver::new(1.0);
        for _ in 0..10 {
            driver.tick();
            assert!((0.0..TAU).contains(&driver.angle()));
        }
        assert!((driver.angle() - (10.0 - TAU)).abs() < 1e-12);
    }

    #[test]
    fn test_set_angle_wraps_negative_values() {
        let mut driver = RotationDriver::default();
        driver.set_angle(-0.5);
        assert!((driver.angle() - (TAU - 0.5)).abs() < 1e-12);
        driver.set_angle(f64::NAN);
        assert_eq!(driver.angle(), 0.0);
    }

    #[test]
    fn test_tiny_negative_angle_stays_below_full_turn() {
        let mut driver = RotationDriver::default();
        driver.set_angle(-1e-20);
        assert!((0.0..TAU).contains(&driver.angle()));
        assert_eq!(driver.angle(), 0.0);

        driver.set_angle(-TAU);
        assert!((0.0..TAU).contains(&driver.angle()));
    }
}
