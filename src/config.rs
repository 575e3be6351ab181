//! Gauge configuration, fully resolved at build time.

use std::f64::consts::PI;
use std::str::FromStr;

use bon::Builder;
use thiserror::Error;

use crate::geom::Radians;

/// A colored arc covering a sub-range of the domain.
///
/// Sections may overlap or leave gaps; they render in array order, later
/// sections over earlier ones and over the background arc.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub color: String,
    pub min: f64,
    pub max: f64,
}

impl Section {
    pub fn new(color: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            color: color.into(),
            min,
            max,
        }
    }
}

/// Which way tick marks extend from the tick radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TickDirection {
    #[default]
    In,
    Out,
}

/// Error returned when parsing a [`TickDirection`] from its wire spelling.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown tick direction `{0}`, expected `in` or `out`")]
pub struct ParseTickDirectionError(String);

impl FromStr for TickDirection {
    type Err = ParseTickDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in" => Ok(TickDirection::In),
            "out" => Ok(TickDirection::Out),
            other => Err(ParseTickDirectionError(other.to_string())),
        }
    }
}

/// Fully-resolved gauge configuration.
///
/// Build one with [`GaugeConfig::builder`]; every omitted field is
/// defaulted at `build()` time. Defaults that depend on other fields read
/// the *resolved* value, so overriding `width` moves every radius derived
/// from it. Field declaration order is resolution order: `width`,
/// `tick_label_font_size` and `inner_radius` resolve first, everything
/// else after (`tick_label_radius` reads both stages). Reordering these
/// fields changes computed defaults.
///
/// `min < max` and `min_angle < max_angle` are documented preconditions,
/// not runtime checks; violating them produces geometrically degenerate
/// output rather than an error.
#[derive(Debug, Clone, Builder)]
pub struct GaugeConfig {
    /// Minimum value of the gauge.
    pub min: f64,
    /// Maximum value of the gauge.
    pub max: f64,

    /// Width of the chart in pixels; the height always equals it.
    #[builder(default = 200.0)]
    pub width: f64,
    /// Font size of the tick labels.
    #[builder(default = 16.0)]
    pub tick_label_font_size: f64,
    /// Inner radius of the gauge.
    #[builder(default = 0.7 * width / 2.0)]
    pub inner_radius: f64,

    /// Minimum angle (rad) on the gauge, 0 = top, positive clockwise.
    #[builder(into, default = Radians(-PI * 3.0 / 4.0))]
    pub min_angle: Radians,
    /// Maximum angle (rad) on the gauge, 0 = top, positive clockwise.
    #[builder(into, default = Radians(PI * 3.0 / 4.0))]
    pub max_angle: Radians,
    /// Outer radius of the gauge.
    #[builder(default = width / 2.0)]
    pub outer_radius: f64,
    /// Radius the needle tip points at (length of the needle).
    #[builder(default = 0.9 * width / 2.0)]
    pub needle_radius: f64,
    /// Radius where the tick marks are anchored.
    #[builder(default = width / 2.0)]
    pub tick_radius: f64,
    /// Radius where tick labels are centered.
    #[builder(default = inner_radius - tick_label_font_size)]
    pub tick_label_radius: f64,
    /// Font size of the value label.
    #[builder(default = 16.0)]
    pub value_label_font_size: f64,

    /// Colored sections indicating sub-ranges, drawn in order.
    #[builder(default)]
    pub sections: Vec<Section>,
    /// Color of a background arc spanning the whole sweep; no arc when
    /// unset.
    #[builder(into)]
    pub background_section_color: Option<String>,

    /// Value between minor ticks; the minor tier is skipped when unset
    /// or zero.
    pub minor_tick_step: Option<f64>,
    /// Value between major ticks; the major tier is skipped when unset
    /// or zero.
    pub major_tick_step: Option<f64>,
    /// Height of a major tick mark.
    #[builder(default = 10.0)]
    pub major_tick_height: f64,
    /// Height of a minor tick mark.
    #[builder(default = 5.0)]
    pub minor_tick_height: f64,
    /// Stroke width of a major tick mark.
    #[builder(default = 3.0)]
    pub major_tick_width: f64,
    /// Stroke width of a minor tick mark.
    #[builder(default = 1.0)]
    pub minor_tick_width: f64,
    /// Direction tick marks extend from the tick radius.
    #[builder(default)]
    pub tick_direction: TickDirection,
    /// Color of the tick marks.
    #[builder(into, default = "#000".to_string())]
    pub tick_color: String,
    /// Color of the needle.
    #[builder(into, default = "#000".to_string())]
    pub needle_color: String,
    /// Color of the needle pin (center circle).
    #[builder(into, default = "#000".to_string())]
    pub needle_pin_color: String,

    /// Label every major tick instead of just the two endpoints.
    #[builder(default = false)]
    pub display_major_tick_labels: bool,
    /// Show the numeric value label below the center.
    #[builder(default = true)]
    pub display_value: bool,
}
