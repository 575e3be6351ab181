//! The classic three-band meter: green, yellow and red sections over a
//! 0..100 domain. Prints the SVG markup to stdout.
//!
//! Run with `--features tracing` and `RUST_LOG=debug` to watch the
//! construction and needle positioning.

use svgauge::{GaugeChart, GaugeConfig, Section};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .init();

    let config = GaugeConfig::builder()
        .min(0.0)
        .max(100.0)
        .sections(vec![
            Section::new("#0f0", 0.0, 40.0),
            Section::new("#ff0", 40.0, 70.0),
            Section::new("#f00", 70.0, 100.0),
        ])
        .major_tick_step(10.0)
        .minor_tick_step(2.0)
        .build();

    let gauge = GaugeChart::new(50.0, config);
    println!("{gauge}");
}
