//! Circular gauge/dial charts rendered to SVG.
//!
//! A [`GaugeChart`] maps a numeric range onto an angular sweep and draws
//! colored sections, tick marks, labels and a needle as a single SVG
//! element tree. After the initial render, [`GaugeChart::update`]
//! repositions the needle and rewrites the value label without rebuilding
//! anything else, so feeding the chart a stream of readings is cheap.
//!
//! ```
//! use svgauge::{GaugeChart, GaugeConfig, Section};
//!
//! let config = GaugeConfig::builder()
//!     .min(0.0)
//!     .max(100.0)
//!     .sections(vec![Section::new("#0f0", 0.0, 40.0)])
//!     .major_tick_step(10.0)
//!     .build();
//!
//! let mut gauge = GaugeChart::new(50.0, config);
//! gauge.update(75.0);
//! let markup = gauge.to_string();
//! assert!(markup.starts_with("<svg"));
//! ```
//!
//! Configuration invariants (`min < max`, `min_angle < max_angle`, sane
//! radii) are documented preconditions, never validated: a degenerate
//! config draws degenerate geometry instead of failing.

pub mod arc;
pub mod config;
pub mod geom;
pub mod log;
pub mod svg;

mod gauge;

pub use config::{GaugeConfig, ParseTickDirectionError, Section, TickDirection};
pub use gauge::GaugeChart;
