//! Geometry engine: domain values to dial angles, dial angles to points.
//!
//! Everything here is pure. The dial's winding convention is 0 radians at
//! the top of the chart, positive clockwise; [`radian_to_cartesian`] is the
//! only place that convention meets the standard math one.

use std::f64::consts::FRAC_PI_2;
use std::ops::{Add, Sub};

use glam::{DVec2, dvec2};

/// An angle in the dial's winding convention: 0 = top, positive clockwise.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Radians(pub f64);

impl Radians {
    /// Raw value in radians.
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    /// Degrees, for SVG `rotate(...)` transforms.
    #[inline]
    pub fn to_degrees(self) -> f64 {
        self.0.to_degrees()
    }
}

impl From<f64> for Radians {
    fn from(val: f64) -> Radians {
        Radians(val)
    }
}

impl Add for Radians {
    type Output = Radians;
    fn add(self, rhs: Radians) -> Radians {
        Radians(self.0 + rhs.0)
    }
}

impl Sub for Radians {
    type Output = Radians;
    fn sub(self, rhs: Radians) -> Radians {
        Radians(self.0 - rhs.0)
    }
}

/// Linear map from domain values onto the angular sweep.
///
/// The scaling factor `(max_angle - min_angle) / (max - min)` is computed
/// once at construction. `max == min` is a precondition violation: the
/// factor goes non-finite and every derived angle degenerates with it,
/// without panicking.
#[derive(Clone, Copy, Debug)]
pub struct AngularScale {
    min: f64,
    min_angle: Radians,
    factor: f64,
}

impl AngularScale {
    pub fn new(min: f64, max: f64, min_angle: Radians, max_angle: Radians) -> Self {
        Self {
            min,
            min_angle,
            factor: (max_angle - min_angle).raw() / (max - min),
        }
    }

    /// Angle for a domain value. Values outside `[min, max]` extrapolate
    /// past the configured sweep; nothing clamps.
    #[inline]
    pub fn angle_of(&self, x: f64) -> Radians {
        Radians((x - self.min) * self.factor) + self.min_angle
    }

    /// The constant ratio converting a domain delta into an angle delta.
    #[inline]
    pub fn factor(&self) -> f64 {
        self.factor
    }
}

/// Convert a dial angle plus radius to chart-local coordinates (origin at
/// the chart center, y pointing down). The -π/2 shift aligns the dial's
/// "0 = straight up" with the math convention "0 = along +x".
pub fn radian_to_cartesian(theta: Radians, r: f64) -> DVec2 {
    let t = theta.raw() - FRAC_PI_2;
    dvec2(t.cos() * r, t.sin() * r)
}

/// Tick positions over a closed interval: `min, min + step, ...` up to and
/// including the first value at or past `max`. Same arithmetic as
/// d3-array's `range(min, max + step, step)`, so a step that does not
/// divide the range overshoots `max` rather than dropping it.
pub fn tick_values(min: f64, max: f64, step: f64) -> Vec<f64> {
    let count = ((max + step - min) / step).ceil().max(0.0) as usize;
    (0..count).map(|i| min + i as f64 * step).collect()
}
