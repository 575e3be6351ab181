//! End-to-end checks over the serialized SVG output.
//!
//! These scan the markup with small string extractors rather than a full
//! XML parser; the output format is fixed by the crate itself.

use svgauge::{GaugeChart, GaugeConfig, Section, TickDirection};

const FLOAT_TOLERANCE: f64 = 1e-6;

/// Extract the value of `name="..."` from an element's raw text.
fn extract_attr(elem: &str, name: &str) -> Option<String> {
    let marker = format!("{}=\"", name);
    let start = elem.find(&marker)? + marker.len();
    let end = elem[start..].find('"')? + start;
    Some(elem[start..end].to_string())
}

/// Collect the opening tag of every element with the given name.
fn extract_elements(svg: &str, tag: &str) -> Vec<String> {
    let open = format!("<{}", tag);
    let mut found = Vec::new();
    let mut rest = svg;
    while let Some(pos) = rest.find(&open) {
        rest = &rest[pos..];
        // require a delimiter so `<text` does not match a longer tag name
        match rest.as_bytes().get(open.len()) {
            Some(b' ') | Some(b'>') | Some(b'/') => {}
            _ => {
                rest = &rest[open.len()..];
                continue;
            }
        }
        let end = rest.find('>').map(|i| i + 1).unwrap_or(rest.len());
        found.push(rest[..end].to_string());
        rest = &rest[end..];
    }
    found
}

/// The whole opening tag around the first occurrence of `marker`.
fn element_containing<'a>(svg: &'a str, marker: &str) -> &'a str {
    let pos = svg.find(marker).expect("marker present in output");
    let start = svg[..pos].rfind('<').expect("inside an element");
    let end = svg[pos..].find('>').expect("element closed") + pos + 1;
    &svg[start..end]
}

fn rotation_degrees(elem: &str) -> f64 {
    let transform = extract_attr(elem, "transform").expect("rotation transform");
    transform
        .strip_prefix("rotate(")
        .and_then(|t| t.strip_suffix(')'))
        .expect("rotate(...) transform")
        .parse()
        .expect("numeric rotation")
}

fn value_label_text(svg: &str) -> Option<String> {
    let start = svg.find("id=\"value-label\"")?;
    let rest = &svg[start..];
    let open_end = rest.find('>')? + 1;
    let close = rest.find("</text>")?;
    Some(rest[open_end..close].to_string())
}

fn section_paths(svg: &str, color: &str) -> Vec<String> {
    extract_elements(svg, "path")
        .into_iter()
        .filter(|p| extract_attr(p, "fill").as_deref() == Some(color))
        .collect()
}

fn demo_config() -> GaugeConfig {
    GaugeConfig::builder()
        .min(0.0)
        .max(100.0)
        .sections(vec![Section::new("#0f0", 0.0, 40.0)])
        .major_tick_step(10.0)
        .build()
}

#[test]
fn initial_render_positions_needle_sections_and_ticks() {
    let gauge = GaugeChart::new(50.0, demo_config());
    let svg = gauge.to_string();

    // 50 is the midpoint of the default symmetric sweep, so rotation 0.
    let needle = element_containing(&svg, "id=\"needle\"");
    assert!(rotation_degrees(needle).abs() < FLOAT_TOLERANCE);
    assert_eq!(value_label_text(&svg).as_deref(), Some("50"));

    // Exactly one colored section, spanning angle(0)..angle(40): it
    // starts on the outer edge at -135 degrees from the top, which is
    // the lower-left of the dial in y-down coordinates.
    let sections = section_paths(&svg, "#0f0");
    assert_eq!(sections.len(), 1);
    let d = extract_attr(&sections[0], "d").unwrap();
    assert!(d.starts_with("M-70.7107,70.7107A100,100"), "{d}");

    // 11 major ticks at 0,10,...,100.
    assert_eq!(extract_elements(&svg, "line").len(), 11);
}

#[test]
fn update_touches_only_the_needle_and_the_label() {
    let mut gauge = GaugeChart::new(50.0, demo_config());
    let before = gauge.to_string();

    gauge.update(75.0);
    let after = gauge.to_string();

    let needle = element_containing(&after, "id=\"needle\"");
    assert!((rotation_degrees(needle) - 67.5).abs() < FLOAT_TOLERANCE);
    assert_eq!(value_label_text(&after).as_deref(), Some("75"));

    // Static layers are byte-identical across updates.
    assert_eq!(
        extract_elements(&before, "line"),
        extract_elements(&after, "line")
    );
    assert_eq!(section_paths(&before, "#0f0"), section_paths(&after, "#0f0"));
}

#[test]
fn update_is_idempotent() {
    let mut gauge = GaugeChart::new(50.0, demo_config());
    gauge.update(33.0);
    let once = gauge.to_string();
    gauge.update(33.0);
    assert_eq!(gauge.to_string(), once);
}

#[test]
fn zero_is_a_reading_but_absence_is_the_midpoint() {
    let zero = GaugeChart::new(0.0, demo_config());
    assert_eq!(value_label_text(&zero.to_string()).as_deref(), Some("0"));

    let unset = GaugeChart::new(None::<f64>, demo_config());
    assert_eq!(value_label_text(&unset.to_string()).as_deref(), Some("50"));

    let nan = GaugeChart::new(f64::NAN, demo_config());
    assert_eq!(value_label_text(&nan.to_string()).as_deref(), Some("50"));
}

#[test]
fn out_of_domain_values_extrapolate_past_the_sweep() {
    let mut gauge = GaugeChart::new(0.0, demo_config());
    gauge.update(150.0);
    let svg = gauge.to_string();
    let needle = element_containing(&svg, "id=\"needle\"");
    assert!((rotation_degrees(needle) - 270.0).abs() < FLOAT_TOLERANCE);
}

#[test]
fn value_label_can_be_disabled() {
    let config = GaugeConfig::builder()
        .min(0.0)
        .max(100.0)
        .display_value(false)
        .build();
    let mut gauge = GaugeChart::new(50.0, config);
    assert!(!gauge.to_string().contains("value-label"));

    // updates still move the needle without creating a label
    gauge.update(80.0);
    assert!(!gauge.to_string().contains("value-label"));
}

#[test]
fn background_arc_renders_behind_sections() {
    let config = GaugeConfig::builder()
        .min(0.0)
        .max(100.0)
        .background_section_color("#eee")
        .sections(vec![Section::new("#0f0", 0.0, 40.0)])
        .build();
    let svg = GaugeChart::new(50.0, config).to_string();
    let paths = extract_elements(&svg, "path");
    assert_eq!(extract_attr(&paths[0], "fill").as_deref(), Some("#eee"));
    assert_eq!(extract_attr(&paths[1], "fill").as_deref(), Some("#0f0"));
}

#[test]
fn outward_ticks_flip_the_tick_transform() {
    let config = GaugeConfig::builder()
        .min(0.0)
        .max(100.0)
        .major_tick_step(50.0)
        .tick_direction(TickDirection::Out)
        .build();
    let svg = GaugeChart::new(50.0, config).to_string();
    // The tick at value 50 sits at dial angle 0: flipped by 180 degrees
    // and translated outward along positive y.
    assert!(svg.contains("rotate(45) translate(0,100)"));
    assert!(svg.contains("rotate(180) translate(0,100)"));
}

#[test]
fn zero_tick_step_skips_the_tier() {
    let config = GaugeConfig::builder()
        .min(0.0)
        .max(100.0)
        .major_tick_step(0.0)
        .minor_tick_step(0.0)
        .build();
    let svg = GaugeChart::new(50.0, config).to_string();
    assert!(extract_elements(&svg, "line").is_empty());
}

#[test]
fn endpoint_labels_by_default_major_labels_on_request() {
    let svg = GaugeChart::new(50.0, demo_config()).to_string();
    // min and max labels plus the value label
    assert_eq!(extract_elements(&svg, "text").len(), 3);

    let config = GaugeConfig::builder()
        .min(0.0)
        .max(100.0)
        .major_tick_step(10.0)
        .display_major_tick_labels(true)
        .build();
    let svg = GaugeChart::new(50.0, config).to_string();
    // 11 tick labels plus the value label
    assert_eq!(extract_elements(&svg, "text").len(), 12);
}
