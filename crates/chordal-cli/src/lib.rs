//! CLI logic for the Chordal flow diagram tool.
//!
//! This module contains the core CLI logic: load configuration, read a JSON
//! flow document, and write the rendered chord diagram as SVG.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use chordal::{ChordalError, DiagramBuilder};

/// Run the Chordal CLI application
///
/// This function processes the input file through the Chordal pipeline
/// and writes the resulting SVG to the output file. Nothing is written
/// when any stage fails.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `ChordalError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Malformed flow documents
/// - Flow data that cannot form a chord diagram
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), ChordalError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing flow document"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Read input file
    let source = fs::read_to_string(&args.input)?;

    // Process flows using DiagramBuilder API
    let builder = DiagramBuilder::new(app_config);
    let table = builder.parse(&source)?;
    let svg = builder.render_svg(&table)?;

    // Write output file
    fs::write(&args.output, svg)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
