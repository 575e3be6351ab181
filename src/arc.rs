//! Annular sector path generation.
//!
//! One generator with fixed radii gets stamped out for every colored
//! section and the background sweep. Angles use the dial convention
//! (0 = top, clockwise), which maps directly onto SVG's clockwise sweep
//! flag in y-down coordinates.

use std::f64::consts::{PI, TAU};
use std::fmt::Write;

use crate::geom::{Radians, radian_to_cartesian};
use crate::svg::fmt_num;

/// Arc generator with a fixed inner/outer radius pair.
#[derive(Debug, Clone, Copy)]
pub struct Annulus {
    pub inner_radius: f64,
    pub outer_radius: f64,
}

impl Annulus {
    pub fn new(inner_radius: f64, outer_radius: f64) -> Self {
        Self {
            inner_radius,
            outer_radius,
        }
    }

    /// Path data for the sector between `start` and `end`. An `end`
    /// before `start` sweeps counterclockwise, so the short way is
    /// always taken. A sweep of a full turn or more closes into a ring;
    /// an inner radius of zero degenerates into a pie wedge through the
    /// origin.
    pub fn sector_path(&self, start: Radians, end: Radians) -> String {
        let sweep = (end - start).raw();
        if sweep.abs() >= TAU - 1e-12 {
            return self.ring_path();
        }

        let large = if sweep.abs() > PI { 1 } else { 0 };
        let clockwise = if sweep < 0.0 { 0 } else { 1 };
        let ro = self.outer_radius;
        let ri = self.inner_radius;
        let outer_start = radian_to_cartesian(start, ro);
        let outer_end = radian_to_cartesian(end, ro);

        let mut d = String::new();
        let _ = write!(
            d,
            "M{},{}A{},{},0,{},{},{},{}",
            fmt_num(outer_start.x),
            fmt_num(outer_start.y),
            fmt_num(ro),
            fmt_num(ro),
            large,
            clockwise,
            fmt_num(outer_end.x),
            fmt_num(outer_end.y),
        );
        if ri > 0.0 {
            let inner_end = radian_to_cartesian(end, ri);
            let inner_start = radian_to_cartesian(start, ri);
            let _ = write!(
                d,
                "L{},{}A{},{},0,{},{},{},{}",
                fmt_num(inner_end.x),
                fmt_num(inner_end.y),
                fmt_num(ri),
                fmt_num(ri),
                large,
                1 - clockwise,
                fmt_num(inner_start.x),
                fmt_num(inner_start.y),
            );
        } else {
            d.push_str("L0,0");
        }
        d.push('Z');
        d
    }

    /// Full ring: two clockwise half-circles on the outer edge, two
    /// counterclockwise ones on the inner edge so the nonzero fill rule
    /// leaves a hole.
    fn ring_path(&self) -> String {
        let ro = fmt_num(self.outer_radius);
        let mut d = format!("M0,-{ro}A{ro},{ro},0,1,1,0,{ro}A{ro},{ro},0,1,1,0,-{ro}");
        if self.inner_radius > 0.0 {
            let ri = fmt_num(self.inner_radius);
            let _ = write!(
                d,
                "M0,-{ri}A{ri},{ri},0,1,0,0,{ri}A{ri},{ri},0,1,0,0,-{ri}"
            );
        }
        d.push('Z');
        d
    }
}
