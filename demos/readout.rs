//! Drives the incremental update path: one chart, a stream of readings.
//! Only the needle transform and the value label change between frames.

use svgauge::{GaugeChart, GaugeConfig};

fn main() {
    let config = GaugeConfig::builder()
        .min(0.0)
        .max(60.0)
        .major_tick_step(10.0)
        .display_major_tick_labels(true)
        .background_section_color("#eee")
        .build();

    // No initial reading: the needle starts at the domain midpoint.
    let mut gauge = GaugeChart::new(None::<f64>, config);

    for reading in [12.0, 48.5, 31.0] {
        gauge.update(reading);
        eprintln!("reading {reading:>5}");
    }

    println!("{gauge}");
}
