//! Chordal - chord diagrams of weighted directed flows.
//!
//! Nodes are laid out evenly on a circle, each owning an arc segment and a
//! pair of labels, and every positive entry of the flow matrix becomes a
//! curved chord whose width is proportional to its weight. Rendering goes
//! through the [`Canvas`](draw::Canvas) trait; [`export::SvgCanvas`] is the
//! bundled backend.

pub mod config;
pub mod diagram;
pub mod export;
pub mod layout;
pub mod palette;
pub mod render;
pub mod source;

mod error;

pub use chordal_core::{color, draw, geometry};

pub use error::{ChordalError, DiagramError};

use log::{debug, info, trace};

use chordal_core::{
    draw::{Canvas, TextAlign, TextStyle, VerticalAlign},
    geometry::Point,
};

use config::AppConfig;
use diagram::{ChordDiagram, FlowMatrix};
use export::SvgCanvas;
use source::FlowTable;

/// Font size of the diagram title, in points.
pub const TITLE_FONT_SIZE: f32 = 16.0;

/// Distance of the title's top edge from the top of the canvas, as a
/// fraction of the canvas height.
const TITLE_OFFSET: f32 = 0.03;

/// Builder for parsing and rendering chord diagrams.
///
/// This provides an API for processing flow documents through parsing,
/// validation, and rendering stages.
///
/// # Examples
///
/// ```rust
/// use chordal::{DiagramBuilder, config::AppConfig};
///
/// let source = r#"{"labels": ["a", "b"], "flow": [[0, 10], [5, 0]]}"#;
///
/// let builder = DiagramBuilder::new(AppConfig::default());
///
/// // Parse the flow document
/// let table = builder.parse(source)
///     .expect("Failed to parse");
///
/// // Render it to SVG
/// let svg = builder.render_svg(&table)
///     .expect("Failed to render");
/// assert!(svg.starts_with("<svg"));
///
/// // Or use default config
/// let builder = DiagramBuilder::default();
/// ```
#[derive(Debug, Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including canvas, style and render settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this builder renders with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse a JSON flow document into a flow table.
    ///
    /// See [`FlowTable::from_json`] for the accepted shapes.
    ///
    /// # Errors
    ///
    /// Returns [`ChordalError::Source`] if the document is malformed or of
    /// an unknown shape.
    pub fn parse(&self, source: &str) -> Result<FlowTable, ChordalError> {
        info!("Parsing flow document");

        let table = FlowTable::from_json(source)?;

        debug!(nodes = table.len(); "Flow document parsed successfully");
        trace!(table:?; "Parsed flow table");

        Ok(table)
    }

    /// Validate a flow table and turn it into a diagram using the configured
    /// palette, chord cap and self-flow policy.
    ///
    /// # Errors
    ///
    /// Returns [`ChordalError::Diagram`] if the table is empty, has a single
    /// node, is not square, or holds invalid weights, and
    /// [`ChordalError::Config`] for an unknown chord cap.
    pub fn build_diagram(&self, table: &FlowTable) -> Result<ChordDiagram, ChordalError> {
        let (labels, rows) = table.clone().into_parts();
        let flow = FlowMatrix::new(rows)?;
        let node_count = labels.len();

        let render = self.config.render();
        let chord_cap = render.chord_cap().map_err(ChordalError::Config)?;
        let diagram = ChordDiagram::new(labels, flow)?
            .with_boxed_palette(render.palette().build(node_count))
            .with_self_flow(render.self_flow())
            .with_chord_cap(chord_cap);

        debug!(
            node_count,
            palette:? = render.palette(),
            self_flow:? = render.self_flow(),
            chord_cap = chord_cap.to_svg_value();
            "Diagram validated"
        );
        Ok(diagram)
    }

    /// Render a flow table to an SVG string.
    ///
    /// The table is validated before anything is drawn. The canvas gets the
    /// configured background and title, then the diagram itself.
    ///
    /// # Errors
    ///
    /// Returns [`ChordalError::Config`] for an invalid canvas size or
    /// background color, [`ChordalError::Diagram`] for invalid input, and
    /// [`ChordalError::Canvas`] if drawing fails.
    pub fn render_svg(&self, table: &FlowTable) -> Result<String, ChordalError> {
        let size = self.config.canvas().size().map_err(ChordalError::Config)?;
        let background = self
            .config
            .style()
            .background_color()
            .map_err(ChordalError::Config)?;

        let diagram = self.build_diagram(table)?;

        info!(width = size.width(), height = size.height(); "Rendering SVG");
        let mut canvas = SvgCanvas::new(size);
        if let Some(color) = background {
            canvas = canvas.with_background(color);
        }

        if let Some(title) = self.config.style().title() {
            let style = TextStyle::new(TITLE_FONT_SIZE)
                .with_align(TextAlign::Center, VerticalAlign::Top);
            let position = Point::new(size.width() / 2.0, size.height() * TITLE_OFFSET);
            canvas.fill_text(&style, position, title)?;
        }

        let summary = diagram.render(&mut canvas)?;
        debug!(summary:?; "Diagram drawn");

        Ok(canvas.into_string())
    }
}
