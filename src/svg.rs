//! Typed SVG element tree and XML serialization.
//!
//! The chart owns one of these trees for its whole lifetime and rewrites
//! individual nodes in place on every new reading, so this is a small
//! retained DOM rather than a write-once emitter. Unset attributes are
//! simply not serialized.

use std::fmt;

/// SVG namespace URI.
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Root `<svg>` element.
#[derive(Debug, Clone, Default)]
pub struct Svg {
    pub font_family: Option<String>,
    pub font_size: Option<f64>,
    pub view_box: Option<String>,
    pub width: Option<f64>,
    pub children: Vec<SvgNode>,
}

/// Any SVG node the gauge emits.
#[derive(Debug, Clone)]
pub enum SvgNode {
    Group(Group),
    Path(Path),
    Line(Line),
    Circle(Circle),
    Text(Text),
}

/// `<g>` element.
#[derive(Debug, Clone, Default)]
pub struct Group {
    pub id: Option<String>,
    pub style: Option<String>,
    pub transform: Option<String>,
    pub children: Vec<SvgNode>,
}

/// `<path>` element.
#[derive(Debug, Clone, Default)]
pub struct Path {
    pub fill: Option<String>,
    pub d: Option<String>,
}

/// `<line>` element.
#[derive(Debug, Clone, Default)]
pub struct Line {
    pub x1: Option<f64>,
    pub y1: Option<f64>,
    pub x2: Option<f64>,
    pub y2: Option<f64>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
}

/// `<circle>` element.
#[derive(Debug, Clone, Default)]
pub struct Circle {
    pub cx: Option<f64>,
    pub cy: Option<f64>,
    pub r: Option<f64>,
    pub fill: Option<String>,
}

/// `<text>` element. `font_size` is a string so both the bare and the
/// `px`-suffixed spellings can be carried.
#[derive(Debug, Clone, Default)]
pub struct Text {
    pub id: Option<String>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub transform: Option<String>,
    pub alignment_baseline: Option<String>,
    pub text_anchor: Option<String>,
    pub font_size: Option<String>,
    pub content: String,
}

/// Escape a string for use in XML text content or attribute values.
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn str_attr(f: &mut fmt::Formatter<'_>, name: &str, value: Option<&str>) -> fmt::Result {
    if let Some(v) = value {
        write!(f, " {}=\"{}\"", name, escape_xml(v))?;
    }
    Ok(())
}

fn num_attr(f: &mut fmt::Formatter<'_>, name: &str, value: Option<f64>) -> fmt::Result {
    if let Some(v) = value {
        write!(f, " {}=\"{}\"", name, fmt_num(v))?;
    }
    Ok(())
}

impl fmt::Display for Svg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<svg xmlns=\"{}\"", SVG_NS)?;
        str_attr(f, "font-family", self.font_family.as_deref())?;
        num_attr(f, "font-size", self.font_size)?;
        str_attr(f, "viewBox", self.view_box.as_deref())?;
        num_attr(f, "width", self.width)?;
        f.write_str(">")?;
        for child in &self.children {
            write!(f, "{child}")?;
        }
        f.write_str("</svg>")
    }
}

impl fmt::Display for SvgNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SvgNode::Group(node) => node.fmt(f),
            SvgNode::Path(node) => node.fmt(f),
            SvgNode::Line(node) => node.fmt(f),
            SvgNode::Circle(node) => node.fmt(f),
            SvgNode::Text(node) => node.fmt(f),
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<g")?;
        str_attr(f, "id", self.id.as_deref())?;
        str_attr(f, "style", self.style.as_deref())?;
        str_attr(f, "transform", self.transform.as_deref())?;
        f.write_str(">")?;
        for child in &self.children {
            write!(f, "{child}")?;
        }
        f.write_str("</g>")
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<path")?;
        str_attr(f, "fill", self.fill.as_deref())?;
        str_attr(f, "d", self.d.as_deref())?;
        f.write_str("/>")
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<line")?;
        num_attr(f, "x1", self.x1)?;
        num_attr(f, "y1", self.y1)?;
        num_attr(f, "x2", self.x2)?;
        num_attr(f, "y2", self.y2)?;
        str_attr(f, "stroke", self.stroke.as_deref())?;
        num_attr(f, "stroke-width", self.stroke_width)?;
        f.write_str("/>")
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<circle")?;
        num_attr(f, "cx", self.cx)?;
        num_attr(f, "cy", self.cy)?;
        num_attr(f, "r", self.r)?;
        str_attr(f, "fill", self.fill.as_deref())?;
        f.write_str("/>")
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<text")?;
        str_attr(f, "id", self.id.as_deref())?;
        num_attr(f, "x", self.x)?;
        num_attr(f, "y", self.y)?;
        str_attr(f, "transform", self.transform.as_deref())?;
        str_attr(f, "alignment-baseline", self.alignment_baseline.as_deref())?;
        str_attr(f, "text-anchor", self.text_anchor.as_deref())?;
        str_attr(f, "font-size", self.font_size.as_deref())?;
        write!(f, ">{}</text>", escape_xml(&self.content))
    }
}

/// Format a number matching C's %g format (6 significant figures, trailing
/// zeros trimmed). Sub-picounit noise from trig at the axes snaps to 0 so
/// coordinates like "straight up" serialize cleanly.
pub(crate) fn fmt_num(value: f64) -> String {
    fmt_num_precision(value, 6)
}

/// Format a number with high precision (10 significant figures); used for
/// rotation transforms where cumulative rounding would be visible.
pub(crate) fn fmt_num_hi(value: f64) -> String {
    fmt_num_precision(value, 10)
}

/// Format a number with specified significant figures, trailing zeros
/// trimmed.
fn fmt_num_precision(value: f64, sig_figs: i32) -> String {
    if value == 0.0 || value.abs() < 1e-12 {
        return "0".to_string();
    }

    // Round to specified significant figures
    let abs_val = value.abs();
    let magnitude = abs_val.log10().floor() as i32;
    let scale = 10_f64.powi(sig_figs - 1 - magnitude);
    let rounded = (value * scale).round() / scale;

    // Format with enough decimal places, then trim
    let decimals = (sig_figs - 1 - magnitude).max(0) as usize;
    let s = format!("{:.prec$}", rounded, prec = decimals);
    let s = s.trim_end_matches('0');
    let s = s.trim_end_matches('.');
    s.to_string()
}
