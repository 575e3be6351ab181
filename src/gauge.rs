//! The gauge renderer.
//!
//! Construction builds every static element (background, sections, ticks,
//! labels, needle, pin) in one pass over the configuration; afterwards
//! [`GaugeChart::update`] recomputes a single angle and rewrites exactly
//! two nodes, the needle transform and the value label text.

use std::fmt;

use crate::arc::Annulus;
use crate::config::{GaugeConfig, TickDirection};
use crate::geom::{AngularScale, radian_to_cartesian, tick_values};
use crate::svg::{Circle, Group, Line, Path, Svg, SvgNode, Text, fmt_num, fmt_num_hi};

/// A rendered gauge chart owning its SVG element tree.
///
/// The tree is built once and exposed through [`node`](GaugeChart::node)
/// (or serialized via `Display`) for the host to mount; it is never shared
/// between charts and nothing else mutates it.
pub struct GaugeChart {
    svg: Svg,
    scale: AngularScale,
    /// Index of the needle group in `svg.children`.
    needle_slot: usize,
    /// Index of the value label, present only when `display_value` was set.
    value_label_slot: Option<usize>,
}

impl GaugeChart {
    /// Build the chart for an initial `value`.
    ///
    /// `0.0` is a real reading, distinct from absence: only `None` (or a
    /// NaN, which behaves like absence) falls back to the domain midpoint.
    /// Never fails for finite numeric configuration; degenerate configs
    /// (`max == min`, inverted radii) produce degenerate geometry, not
    /// errors.
    pub fn new(value: impl Into<Option<f64>>, config: GaugeConfig) -> Self {
        let scale = AngularScale::new(config.min, config.max, config.min_angle, config.max_angle);
        let arc = Annulus::new(config.inner_radius, config.outer_radius);
        let width = config.width;
        let height = width;

        let mut svg = Svg {
            font_family: Some("sans-serif".to_string()),
            font_size: Some(12.0),
            view_box: Some(format!(
                "{} {} {} {}",
                fmt_num(-width / 2.0),
                fmt_num(-height / 2.0),
                fmt_num(width),
                fmt_num(height)
            )),
            width: Some(width),
            children: Vec::new(),
        };

        // background section
        if let Some(color) = &config.background_section_color {
            svg.children.push(SvgNode::Group(Group {
                children: vec![SvgNode::Path(Path {
                    fill: Some(color.clone()),
                    d: Some(arc.sector_path(config.min_angle, config.max_angle)),
                })],
                ..Group::default()
            }));
        }

        // color sections
        let mut sections = Group::default();
        for section in &config.sections {
            sections.children.push(SvgNode::Path(Path {
                fill: Some(section.color.clone()),
                d: Some(arc.sector_path(scale.angle_of(section.min), scale.angle_of(section.max))),
            }));
        }
        svg.children.push(SvgNode::Group(sections));

        // One `<g rotate translate><line/></g>` per tick: rotating first
        // lets the line keep a fixed local orientation along the radius.
        let tick_layer = |step: f64, height: f64, stroke_width: f64| -> Group {
            let (flip, sign) = match config.tick_direction {
                TickDirection::In => (0.0, "-"),
                TickDirection::Out => (180.0, ""),
            };
            let mut layer = Group::default();
            for x in tick_values(config.min, config.max, step) {
                let degrees = scale.angle_of(x).to_degrees();
                layer.children.push(SvgNode::Group(Group {
                    transform: Some(format!(
                        "rotate({}) translate(0,{}{})",
                        fmt_num_hi(flip + degrees),
                        sign,
                        fmt_num(config.tick_radius)
                    )),
                    children: vec![SvgNode::Line(Line {
                        y2: Some(height),
                        stroke: Some(config.tick_color.clone()),
                        stroke_width: Some(stroke_width),
                        ..Line::default()
                    })],
                    ..Group::default()
                }));
            }
            layer
        };

        // A zero step would never advance, so it skips the tier just
        // like an absent one.
        let minor_step = config.minor_tick_step.filter(|s| *s != 0.0);
        let major_step = config.major_tick_step.filter(|s| *s != 0.0);

        // add minor ticks
        if let Some(step) = minor_step {
            let layer = tick_layer(step, config.minor_tick_height, config.minor_tick_width);
            svg.children.push(SvgNode::Group(layer));
        }

        // add major ticks
        if let Some(step) = major_step {
            let layer = tick_layer(step, config.major_tick_height, config.major_tick_width);
            svg.children.push(SvgNode::Group(layer));
        }

        // add tick labels
        let label_values = match major_step {
            Some(step) if config.display_major_tick_labels => {
                tick_values(config.min, config.max, step)
            }
            _ => vec![config.min, config.max],
        };
        let mut labels = Group::default();
        for v in label_values {
            let p = radian_to_cartesian(scale.angle_of(v), config.tick_label_radius);
            labels.children.push(SvgNode::Text(Text {
                transform: Some(format!("translate({},{})", fmt_num(p.x), fmt_num(p.y))),
                alignment_baseline: Some("middle".to_string()),
                text_anchor: Some("middle".to_string()),
                font_size: Some(format!("{}px", fmt_num(config.tick_label_font_size))),
                content: fmt_value(v),
                ..Text::default()
            }));
        }
        svg.children.push(SvgNode::Group(labels));

        let value = value
            .into()
            .filter(|v| !v.is_nan())
            .unwrap_or((config.min + config.max) / 2.0);

        // add value label
        let mut value_label_slot = None;
        if config.display_value {
            value_label_slot = Some(svg.children.len());
            svg.children.push(SvgNode::Text(Text {
                id: Some("value-label".to_string()),
                transform: Some(format!("translate(0,{})", fmt_num(config.inner_radius))),
                text_anchor: Some("middle".to_string()),
                font_size: Some(fmt_num(config.value_label_font_size)),
                content: fmt_value(value),
                ..Text::default()
            }));
        }

        // add needle: a kite pointing from the center to the needle
        // radius, grouped so one rotation transform moves the whole
        // shape. The transition style is a cosmetic smoothing hint for
        // hosts that animate attribute changes.
        let needle_slot = svg.children.len();
        svg.children.push(SvgNode::Group(Group {
            id: Some("needle".to_string()),
            style: Some("transition-duration:0.3s;".to_string()),
            children: vec![SvgNode::Path(Path {
                fill: Some(config.needle_color.clone()),
                d: Some(format!("M-4,0h8l-3,-{}h-2Z", fmt_num(config.needle_radius))),
            })],
            ..Group::default()
        }));

        // needle pin, always on top
        svg.children.push(SvgNode::Circle(Circle {
            r: Some(7.5),
            fill: Some(config.needle_pin_color.clone()),
            ..Circle::default()
        }));

        crate::log::debug!(
            width,
            min = config.min,
            max = config.max,
            nodes = svg.children.len(),
            "built gauge tree"
        );

        let mut chart = Self {
            svg,
            scale,
            needle_slot,
            value_label_slot,
        };
        chart.point_needle(value);
        chart
    }

    /// Reposition the needle and refresh the value label for a new
    /// reading.
    ///
    /// The needle angle is the only geometry recomputed; no other element
    /// moves or is rebuilt, and calling twice with the same value leaves
    /// the tree in the same observable state. Out-of-domain values
    /// extrapolate past the configured sweep.
    pub fn update(&mut self, value: f64) {
        self.point_needle(value);
        if let Some(slot) = self.value_label_slot {
            if let SvgNode::Text(label) = &mut self.svg.children[slot] {
                label.content = fmt_value(value);
            }
        }
    }

    /// The root of the element tree, for the host to mount. Always the
    /// same root identity.
    pub fn node(&self) -> &Svg {
        &self.svg
    }

    fn point_needle(&mut self, value: f64) {
        let degrees = self.scale.angle_of(value).to_degrees();
        crate::log::debug!(value, degrees, "pointing needle");
        if let SvgNode::Group(needle) = &mut self.svg.children[self.needle_slot] {
            needle.transform = Some(format!("rotate({})", fmt_num_hi(degrees)));
        }
    }
}

impl fmt::Display for GaugeChart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.svg.fmt(f)
    }
}

/// Default numeric-to-text rendering for labels: integral values print
/// without a fractional part.
fn fmt_value(v: f64) -> String {
    v.to_string()
}
