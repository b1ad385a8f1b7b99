//! SVG canvas backend.
//!
//! [`SvgCanvas`] records every draw call as an SVG element, in call order,
//! and assembles them into a [`svg::Document`] on demand. Coordinates are
//! written as-is: the origin is the top-left corner and y grows downward,
//! so increasing angles turn clockwise on screen.

use std::{
    f32::consts::{PI, TAU},
    fmt,
};

use log::trace;
use svg::{self, Document, node::element as svg_element};

use chordal_core::{
    color::Color,
    draw::{Canvas, CanvasError, Path, PathSegment, StrokeDefinition, TextStyle},
    geometry::{Point, Size},
};

/// Points closer than this are treated as the same pen position.
const SAME_POINT_TOLERANCE: f32 = 1e-3;

/// A [`Canvas`] that produces an SVG document.
///
/// # Examples
///
/// ```
/// # use chordal::export::SvgCanvas;
/// # use chordal_core::{color::Color, draw::{Canvas, Path, StrokeDefinition}, geometry::{Point, Size}};
/// let mut canvas = SvgCanvas::new(Size::new(100.0, 100.0))
///     .with_background(Color::from_rgba8(255, 255, 255, 255));
///
/// let mut path = Path::new();
/// path.move_to(Point::new(10.0, 10.0));
/// path.line_to(Point::new(90.0, 90.0));
/// canvas.stroke(&path, &StrokeDefinition::default()).unwrap();
///
/// let svg = canvas.into_string();
/// assert!(svg.contains("M 10 10 L 90 90"));
/// ```
pub struct SvgCanvas {
    size: Size,
    background: Option<Color>,
    nodes: Vec<Box<dyn svg::Node>>,
}

impl SvgCanvas {
    /// Creates an empty, transparent canvas of `size` points.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            background: None,
            nodes: Vec::new(),
        }
    }

    /// Fills the whole canvas with `color` beneath everything drawn.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Returns the number of elements drawn so far.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if nothing has been drawn yet.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Assembles the drawn elements into an SVG document.
    pub fn into_document(self) -> Document {
        let width = self.size.width();
        let height = self.size.height();

        let mut doc = Document::new()
            .set("viewBox", format!("0 0 {width} {height}"))
            .set("width", width)
            .set("height", height);

        if let Some(color) = self.background {
            let background = svg_element::Rectangle::new()
                .set("x", 0)
                .set("y", 0)
                .set("width", width)
                .set("height", height)
                .set("fill", color.to_hex_rgb())
                .set("fill-opacity", color.alpha());
            doc = doc.add(background);
        }

        for node in self.nodes {
            doc = doc.add(node);
        }

        doc
    }

    /// Assembles the drawn elements and serializes them as SVG markup.
    pub fn into_string(self) -> String {
        self.into_document().to_string()
    }
}

impl fmt::Debug for SvgCanvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SvgCanvas")
            .field("size", &self.size)
            .field("background", &self.background)
            .field("nodes", &self.nodes.len())
            .finish()
    }
}

impl Canvas for SvgCanvas {
    fn size(&self) -> Size {
        self.size
    }

    fn stroke(&mut self, path: &Path, stroke: &StrokeDefinition) -> Result<(), CanvasError> {
        let data = path_data(path)?;
        trace!(data:?; "Stroking SVG path");

        let color = stroke.color();
        let element = svg_element::Path::new()
            .set("d", data)
            .set("fill", "none")
            .set("stroke", color.to_hex_rgb())
            .set("stroke-opacity", color.alpha())
            .set("stroke-width", stroke.width())
            .set("stroke-linecap", stroke.cap().to_svg_value());

        self.nodes.push(Box::new(element));
        Ok(())
    }

    fn fill_text(
        &mut self,
        style: &TextStyle,
        position: Point,
        content: &str,
    ) -> Result<(), CanvasError> {
        let color = style.color();
        let mut element = svg_element::Text::new(content)
            .set("x", position.x())
            .set("y", position.y())
            .set("text-anchor", style.align().to_svg_value())
            .set("dominant-baseline", style.vertical_align().to_svg_value())
            .set("font-family", style.font_family())
            .set("font-size", style.font_size())
            .set("fill", color.to_hex_rgb())
            .set("fill-opacity", color.alpha());

        if style.rotation() != 0.0 {
            element = element.set(
                "transform",
                format!(
                    "rotate({} {} {})",
                    style.rotation().to_degrees(),
                    position.x(),
                    position.y()
                ),
            );
        }

        self.nodes.push(Box::new(element));
        Ok(())
    }
}

/// Converts `path` into SVG path data.
///
/// Arcs become elliptical arc commands; a straight line joins the pen to an
/// arc's start when they differ, and full turns are split in two since a
/// single SVG arc cannot close on itself.
fn path_data(path: &Path) -> Result<String, CanvasError> {
    if path.is_empty() {
        return Err(CanvasError::Unsupported("empty path".to_string()));
    }

    let mut commands: Vec<String> = Vec::new();
    let mut pen: Option<Point> = None;

    for segment in path.segments() {
        match *segment {
            PathSegment::MoveTo(point) => {
                commands.push(format!("M {} {}", point.x(), point.y()));
            }
            PathSegment::LineTo(point) => {
                require_pen(pen, "line")?;
                commands.push(format!("L {} {}", point.x(), point.y()));
            }
            PathSegment::Arc {
                center,
                radius,
                start_angle,
                sweep,
            } => {
                let start = Point::on_circle(center, radius, start_angle);
                match pen {
                    None => {
                        commands.push(format!("M {} {}", start.x(), start.y()))
                    }
                    Some(current) if current.distance(start) > SAME_POINT_TOLERANCE => {
                        commands.push(format!("L {} {}", start.x(), start.y()))
                    }
                    Some(_) => {}
                }

                let pieces = if sweep.abs() >= TAU { 2 } else { 1 };
                let piece_sweep = sweep / pieces as f32;
                for piece in 1..=pieces {
                    let end =
                        Point::on_circle(center, radius, start_angle + piece_sweep * piece as f32);
                    let large_arc = u8::from(piece_sweep.abs() > PI);
                    let positive = u8::from(piece_sweep > 0.0);
                    commands.push(format!(
                        "A {radius} {radius} 0 {large_arc} {positive} {} {}",
                        end.x(),
                        end.y()
                    ));
                }
            }
            PathSegment::CubicTo {
                control1,
                control2,
                end,
            } => {
                require_pen(pen, "curve")?;
                commands.push(format!(
                    "C {} {} {} {} {} {}",
                    control1.x(),
                    control1.y(),
                    control2.x(),
                    control2.y(),
                    end.x(),
                    end.y()
                ));
            }
        }
        pen = Some(segment.end_point());
    }

    Ok(commands.join(" "))
}

fn require_pen(pen: Option<Point>, what: &str) -> Result<(), CanvasError> {
    match pen {
        Some(_) => Ok(()),
        None => Err(CanvasError::Unsupported(format!(
            "{what} segment without a starting point"
        ))),
    }
}
