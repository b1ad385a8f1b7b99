//! Example: Rendering a diagram from an in-memory matrix
//!
//! This example builds a chord diagram directly from labels and a flow
//! matrix, without parsing a document, and draws it with a custom palette.

use std::fs;

use chordal::{
    color::Color,
    diagram::{ChordDiagram, FlowMatrix},
    export::SvgCanvas,
    geometry::Size,
    render::SelfFlowPolicy,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Building diagram from a flow matrix...\n");

    let labels = vec![
        "gateway".to_string(),
        "api".to_string(),
        "worker".to_string(),
        "db".to_string(),
    ];

    // Bytes sent from row to column
    let flow = FlowMatrix::new(vec![
        vec![0.0, 48_000_000.0, 0.0, 0.0],
        vec![6_500_000.0, 0.0, 12_000_000.0, 30_000_000.0],
        vec![0.0, 2_000_000.0, 1_500_000.0, 9_000_000.0],
        vec![0.0, 41_000_000.0, 7_000_000.0, 0.0],
    ])?;

    // Warm colors for traffic leaving the gateway, cool ones otherwise
    let palette = |source: usize, target: usize| {
        if source == 0 {
            Color::from_rgba8(220, 90, 40, 160)
        } else {
            Color::from_hsla(180.0 + 40.0 * target as f32, 60.0, 40.0, 0.6)
        }
    };

    let diagram = ChordDiagram::new(labels, flow)?
        .with_palette(palette)
        .with_self_flow(SelfFlowPolicy::Loop);

    let mut canvas = SvgCanvas::new(Size::new(800.0, 800.0))
        .with_background(Color::from_rgba8(255, 255, 255, 255));
    let summary = diagram.render(&mut canvas)?;

    println!(
        "Drew {} arcs, {} labels and {} chords",
        summary.arcs, summary.labels, summary.chords
    );

    let output = "from_matrix.svg";
    fs::write(output, canvas.into_string())?;
    println!("Wrote {output}");

    Ok(())
}
