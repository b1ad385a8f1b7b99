//! The chord diagram model and its render pipeline.
//!
//! A [`ChordDiagram`] is an immutable snapshot of node labels, a validated
//! [`FlowMatrix`], a [`ColorMapper`] and a [`SelfFlowPolicy`]. Rendering
//! computes the circle layout once, then:
//!
//! 1. for each node, strokes its arc and draws its identity and volume labels;
//! 2. finds the heaviest flow in the matrix;
//! 3. for each ordered pair with positive flow, draws a chord.
//!
//! Chords are drawn last so they overlay the ring and its labels.

use std::fmt;

use log::{debug, info};

use chordal_core::draw::{Canvas, StrokeCap};

use crate::{
    error::{ChordalError, DiagramError},
    layout::LayoutEngine,
    palette::{ColorMapper, IndexedPalette},
    render::{ArcRenderer, ChordRenderer, LabelPlacer, SelfFlowPolicy},
};

/// A square matrix of non-negative directed flow weights.
///
/// `get(i, j)` is the volume sent from node `i` to node `j`. The matrix is
/// not assumed symmetric.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowMatrix {
    size: usize,
    weights: Vec<f64>,
}

impl FlowMatrix {
    /// Builds a matrix from rows.
    ///
    /// # Errors
    ///
    /// Returns [`DiagramError::NotSquare`] if any row's length differs from
    /// the number of rows, and [`DiagramError::InvalidWeight`] for negative,
    /// NaN or infinite entries.
    ///
    /// # Examples
    ///
    /// ```
    /// # use chordal::diagram::FlowMatrix;
    /// let flow = FlowMatrix::new(vec![vec![0.0, 100.0], vec![25.0, 0.0]]).unwrap();
    /// assert_eq!(flow.size(), 2);
    /// assert_eq!(flow.max_weight(), 100.0);
    ///
    /// assert!(FlowMatrix::new(vec![vec![0.0, 1.0]]).is_err());
    /// ```
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, DiagramError> {
        let size = rows.len();
        let mut weights = Vec::with_capacity(size * size);

        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != size {
                return Err(DiagramError::NotSquare {
                    row,
                    len: values.len(),
                    expected: size,
                });
            }
            for (col, value) in values.into_iter().enumerate() {
                if !value.is_finite() || value < 0.0 {
                    return Err(DiagramError::InvalidWeight { row, col, value });
                }
                weights.push(value);
            }
        }

        Ok(Self { size, weights })
    }

    /// Returns `N`, the number of rows and of columns.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the flow from `source` to `target`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn get(&self, source: usize, target: usize) -> f64 {
        self.row(source)[target]
    }

    /// Returns all outgoing flows of `source`.
    ///
    /// # Panics
    ///
    /// Panics if `source` is out of range.
    pub fn row(&self, source: usize) -> &[f64] {
        let start = source * self.size;
        &self.weights[start..start + self.size]
    }

    /// Returns the total outgoing flow of `source`, self-flow included.
    pub fn row_total(&self, source: usize) -> f64 {
        self.row(source).iter().sum()
    }

    /// Returns the largest entry, or `0.0` for an all-zero or empty matrix.
    pub fn max_weight(&self) -> f64 {
        self.weights.iter().copied().fold(0.0, f64::max)
    }

    /// Iterates over every positive entry, row by row.
    pub fn positive_entries(&self) -> impl Iterator<Item = FlowEntry> + '_ {
        self.weights
            .iter()
            .enumerate()
            .filter(|(_, weight)| **weight > 0.0)
            .map(|(index, weight)| FlowEntry {
                source: index / self.size,
                target: index % self.size,
                weight: *weight,
            })
    }
}

/// One directed flow between two nodes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowEntry {
    pub source: usize,
    pub target: usize,
    pub weight: f64,
}

impl FlowEntry {
    /// Returns true when the flow leaves and enters the same node.
    pub fn is_self_flow(&self) -> bool {
        self.source == self.target
    }
}

/// Counts of what a render call drew.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderSummary {
    pub arcs: usize,
    pub labels: usize,
    pub chords: usize,
}

/// A chord diagram ready to be drawn on any [`Canvas`].
///
/// # Examples
///
/// ```
/// # use chordal::diagram::{ChordDiagram, FlowMatrix};
/// # use chordal_core::{draw::RecordingCanvas, geometry::Size};
/// let flow = FlowMatrix::new(vec![
///     vec![0.0, 100.0, 0.0],
///     vec![0.0, 0.0, 50.0],
///     vec![0.0, 0.0, 0.0],
/// ])
/// .unwrap();
/// let diagram = ChordDiagram::new(vec!["A".into(), "B".into(), "C".into()], flow).unwrap();
///
/// let mut canvas = RecordingCanvas::new(Size::new(600.0, 600.0));
/// let summary = diagram.render(&mut canvas).unwrap();
/// assert_eq!(summary.arcs, 3);
/// assert_eq!(summary.chords, 2);
/// ```
pub struct ChordDiagram {
    labels: Vec<String>,
    flow: FlowMatrix,
    palette: Box<dyn ColorMapper>,
    self_flow: SelfFlowPolicy,
    chord_cap: StrokeCap,
}

impl ChordDiagram {
    /// Creates a diagram using [`IndexedPalette`] and [`SelfFlowPolicy::Skip`].
    ///
    /// # Errors
    ///
    /// Returns [`DiagramError::LabelMismatch`] if the label count differs
    /// from the matrix size, [`DiagramError::Empty`] for zero nodes, and
    /// [`DiagramError::SingleNode`] for one node.
    pub fn new(labels: Vec<String>, flow: FlowMatrix) -> Result<Self, DiagramError> {
        if labels.len() != flow.size() {
            return Err(DiagramError::LabelMismatch {
                labels: labels.len(),
                rows: flow.size(),
            });
        }
        match flow.size() {
            0 => return Err(DiagramError::Empty),
            1 => return Err(DiagramError::SingleNode),
            _ => {}
        }

        Ok(Self {
            labels,
            flow,
            palette: Box::new(IndexedPalette),
            self_flow: SelfFlowPolicy::default(),
            chord_cap: StrokeCap::default(),
        })
    }

    /// Replaces the chord color policy.
    pub fn with_palette(mut self, palette: impl ColorMapper + 'static) -> Self {
        self.palette = Box::new(palette);
        self
    }

    /// Replaces the chord color policy with an already boxed one.
    pub fn with_boxed_palette(mut self, palette: Box<dyn ColorMapper>) -> Self {
        self.palette = palette;
        self
    }

    /// Replaces the self-flow policy.
    pub fn with_self_flow(mut self, self_flow: SelfFlowPolicy) -> Self {
        self.self_flow = self_flow;
        self
    }

    /// Replaces the chord line cap.
    pub fn with_chord_cap(mut self, cap: StrokeCap) -> Self {
        self.chord_cap = cap;
        self
    }

    /// Returns the node labels in circle order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Returns the flow matrix.
    pub fn flow(&self) -> &FlowMatrix {
        &self.flow
    }

    /// Returns the self-flow policy.
    pub fn self_flow(&self) -> SelfFlowPolicy {
        self.self_flow
    }

    /// Returns the chord line cap.
    pub fn chord_cap(&self) -> StrokeCap {
        self.chord_cap
    }

    /// Draws the diagram onto `canvas`.
    ///
    /// The canvas is never cleared: rendering twice onto the same surface
    /// draws the diagram again on top.
    ///
    /// # Errors
    ///
    /// Returns [`ChordalError::Diagram`] if the layout cannot be computed,
    /// before anything is drawn, and [`ChordalError::Canvas`] with the
    /// backend's error if a draw call fails.
    pub fn render<C: Canvas + ?Sized>(&self, canvas: &mut C) -> Result<RenderSummary, ChordalError> {
        let node_count = self.labels.len();
        info!(node_count; "Rendering chord diagram");

        let layout = LayoutEngine::new(node_count, canvas.size())?;
        let arc_renderer = ArcRenderer::default();
        let label_placer = LabelPlacer::default();
        let chord_renderer = ChordRenderer::new(self.self_flow).with_cap(self.chord_cap);

        let mut summary = RenderSummary::default();

        for (index, label) in self.labels.iter().enumerate() {
            arc_renderer.draw(canvas, &layout.arc(index))?;
            summary.arcs += 1;

            label_placer.draw_identity(canvas, &layout, index, label)?;
            label_placer.draw_volume(canvas, &layout, index, self.flow.row_total(index))?;
            summary.labels += 2;
        }
        debug!(arcs = summary.arcs, labels = summary.labels; "Ring drawn");

        let max_weight = self.flow.max_weight();
        debug!(max_weight; "Normalizing chord widths");

        for entry in self.flow.positive_entries() {
            let color = self.palette.color(entry.source, entry.target);
            if chord_renderer.draw(canvas, &layout, entry, max_weight, color)? {
                summary.chords += 1;
            }
        }

        info!(chords = summary.chords; "Chord diagram rendered");
        Ok(summary)
    }
}

impl fmt::Debug for ChordDiagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChordDiagram")
            .field("labels", &self.labels)
            .field("flow", &self.flow)
            .field("self_flow", &self.self_flow)
            .field("chord_cap", &self.chord_cap)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use chordal_core::{
        color::Color,
        draw::{CanvasError, DrawOp, Path, RecordingCanvas, StrokeDefinition, TextStyle},
        geometry::{Point, Size},
    };

    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    fn canvas() -> RecordingCanvas {
        RecordingCanvas::new(Size::new(800.0, 800.0))
    }

    fn scenario_a() -> ChordDiagram {
        let flow = FlowMatrix::new(vec![
            vec![0.0, 100.0, 0.0],
            vec![0.0, 0.0, 50.0],
            vec![0.0, 0.0, 0.0],
        ])
        .unwrap();
        ChordDiagram::new(labels(&["A", "B", "C"]), flow).unwrap()
    }

    #[test]
    fn test_flow_matrix_rejects_ragged_rows() {
        let err = FlowMatrix::new(vec![vec![0.0, 1.0], vec![0.0]]).unwrap_err();
        assert_eq!(
            err,
            DiagramError::NotSquare {
                row: 1,
                len: 1,
                expected: 2
            }
        );
    }

    #[test]
    fn test_flow_matrix_rejects_invalid_weights() {
        let err = FlowMatrix::new(vec![vec![0.0, -1.0], vec![0.0, 0.0]]).unwrap_err();
        assert!(matches!(
            err,
            DiagramError::InvalidWeight { row: 0, col: 1, .. }
        ));

        let err = FlowMatrix::new(vec![vec![0.0, 0.0], vec![f64::NAN, 0.0]]).unwrap_err();
        assert!(matches!(
            err,
            DiagramError::InvalidWeight { row: 1, col: 0, .. }
        ));

        assert!(FlowMatrix::new(vec![vec![f64::INFINITY, 0.0], vec![0.0, 0.0]]).is_err());
    }

    #[test]
    fn test_flow_matrix_accessors() {
        let flow = FlowMatrix::new(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(flow.get(1, 0), 3.0);
        assert_eq!(flow.row(0), &[1.0, 2.0]);
        assert_eq!(flow.row_total(1), 7.0);
        assert_eq!(flow.max_weight(), 4.0);

        let entries: Vec<_> = flow
            .positive_entries()
            .map(|entry| (entry.source, entry.target, entry.weight))
            .collect();
        assert_eq!(
            entries,
            vec![(0, 0, 1.0), (0, 1, 2.0), (1, 0, 3.0), (1, 1, 4.0)]
        );
        assert!(flow.positive_entries().next().unwrap().is_self_flow());
    }

    #[test]
    fn test_flow_matrix_all_zero_max_is_zero() {
        let flow = FlowMatrix::new(vec![vec![0.0; 3]; 3]).unwrap();
        assert_eq!(flow.max_weight(), 0.0);
        assert_eq!(flow.positive_entries().count(), 0);
    }

    #[test]
    fn test_diagram_rejects_label_mismatch() {
        let flow = FlowMatrix::new(vec![vec![0.0; 2]; 2]).unwrap();
        let err = ChordDiagram::new(labels(&["A"]), flow).unwrap_err();
        assert_eq!(err, DiagramError::LabelMismatch { labels: 1, rows: 2 });
    }

    #[test]
    fn test_diagram_rejects_empty() {
        let flow = FlowMatrix::new(Vec::new()).unwrap();
        let err = ChordDiagram::new(Vec::new(), flow).unwrap_err();
        assert_eq!(err, DiagramError::Empty);
    }

    #[test]
    fn test_diagram_rejects_single_node() {
        let flow = FlowMatrix::new(vec![vec![10.0]]).unwrap();
        let err = ChordDiagram::new(labels(&["solo"]), flow).unwrap_err();
        assert_eq!(err, DiagramError::SingleNode);
    }

    #[test]
    fn test_scenario_a_chord_widths() {
        let diagram = scenario_a();
        let mut canvas = canvas();
        let summary = diagram.render(&mut canvas).unwrap();

        assert_eq!(
            summary,
            RenderSummary {
                arcs: 3,
                labels: 6,
                chords: 2
            }
        );

        let layout = LayoutEngine::new(3, canvas.size()).unwrap();
        let chords: Vec<_> = canvas.strokes().skip(3).collect();
        assert_eq!(chords.len(), 2);

        assert_eq!(chords[0].0, &layout.chord(0, 1).to_path());
        assert_eq!(chords[0].1.width(), 3.0);
        assert_eq!(chords[1].0, &layout.chord(1, 2).to_path());
        assert_eq!(chords[1].1.width(), 1.5);
    }

    #[test]
    fn test_scenario_b_all_zero_matrix() {
        let flow = FlowMatrix::new(vec![vec![0.0; 2]; 2]).unwrap();
        let diagram = ChordDiagram::new(labels(&["x", "y"]), flow).unwrap();
        let mut canvas = canvas();

        let summary = diagram.render(&mut canvas).unwrap();

        assert_eq!(summary.arcs, 2);
        assert_eq!(summary.labels, 4);
        assert_eq!(summary.chords, 0);
        assert_eq!(canvas.strokes().count(), 2);
        // Each label is filled twice: backplate, then foreground.
        assert_eq!(canvas.texts().count(), 8);
        assert!(canvas.strokes().all(|(_, stroke)| stroke.width().is_finite()));
    }

    #[test]
    fn test_scenario_c_volume_label() {
        let flow = FlowMatrix::new(vec![vec![0.0, 12_911_000.0], vec![0.0, 0.0]]).unwrap();
        let diagram = ChordDiagram::new(labels(&["src", "dst"]), flow).unwrap();
        let mut canvas = canvas();
        diagram.render(&mut canvas).unwrap();

        let contents: Vec<_> = canvas.texts().map(|(_, _, content)| content).collect();
        assert_eq!(
            contents,
            vec![
                "src", "src", "12.3 MB", "12.3 MB", "dst", "dst", "0.0 MB", "0.0 MB"
            ]
        );
    }

    #[test]
    fn test_arcs_and_labels_precede_chords() {
        let diagram = scenario_a();
        let mut canvas = canvas();
        diagram.render(&mut canvas).unwrap();

        let ops = canvas.ops();
        // Per node: arc, identity backplate + text, volume backplate + text.
        for node in 0..3 {
            let base = node * 5;
            assert!(matches!(ops[base], DrawOp::Stroke { .. }));
            for offset in 1..5 {
                assert!(matches!(ops[base + offset], DrawOp::FillText { .. }));
            }
        }
        assert!(
            ops[15..]
                .iter()
                .all(|op| matches!(op, DrawOp::Stroke { .. }))
        );
        assert_eq!(ops.len(), 17);
    }

    #[test]
    fn test_render_is_deterministic() {
        let mut first = canvas();
        let mut second = canvas();
        scenario_a().render(&mut first).unwrap();
        scenario_a().render(&mut second).unwrap();
        assert_eq!(first.ops(), second.ops());
    }

    #[test]
    fn test_second_render_draws_on_top() {
        let diagram = scenario_a();
        let mut canvas = canvas();
        diagram.render(&mut canvas).unwrap();
        diagram.render(&mut canvas).unwrap();
        assert_eq!(canvas.ops().len(), 34);
    }

    #[test]
    fn test_directed_pairs_are_independent() {
        let flow = FlowMatrix::new(vec![vec![0.0, 10.0], vec![40.0, 0.0]]).unwrap();
        let diagram = ChordDiagram::new(labels(&["a", "b"]), flow).unwrap();
        let mut canvas = canvas();
        diagram.render(&mut canvas).unwrap();

        let widths: Vec<_> = canvas
            .strokes()
            .skip(2)
            .map(|(_, stroke)| stroke.width())
            .collect();
        assert_eq!(widths, vec![0.75, 3.0]);
    }

    #[test]
    fn test_custom_palette_and_alpha_boost() {
        let diagram = scenario_a().with_palette(|i: usize, j: usize| {
            Color::from_rgba8(i as u8 * 10, j as u8 * 10, 0, 50)
        });
        let mut canvas = canvas();
        diagram.render(&mut canvas).unwrap();

        let (_, stroke) = canvas.strokes().nth(3).unwrap();
        let rgba = stroke.color().to_rgba8();
        assert_eq!((rgba.r, rgba.g, rgba.b, rgba.a), (0, 10, 0, 150));
    }

    #[test]
    fn test_self_flow_policies() {
        let flow = FlowMatrix::new(vec![vec![20.0, 10.0], vec![0.0, 0.0]]).unwrap();

        let skip = ChordDiagram::new(labels(&["a", "b"]), flow.clone()).unwrap();
        let mut canvas_skip = canvas();
        assert_eq!(skip.render(&mut canvas_skip).unwrap().chords, 1);
        // The self-flow is still the heaviest entry, so a→b is drawn at half width.
        let (_, stroke) = canvas_skip.strokes().nth(2).unwrap();
        assert_eq!(stroke.width(), 1.5);

        let looped = ChordDiagram::new(labels(&["a", "b"]), flow)
            .unwrap()
            .with_self_flow(SelfFlowPolicy::Loop);
        let mut canvas_loop = canvas();
        assert_eq!(looped.render(&mut canvas_loop).unwrap().chords, 2);
    }

    struct FailingCanvas;

    impl Canvas for FailingCanvas {
        fn size(&self) -> Size {
            Size::new(100.0, 100.0)
        }

        fn stroke(&mut self, _path: &Path, _stroke: &StrokeDefinition) -> Result<(), CanvasError> {
            Err(CanvasError::Unsupported("stroke".to_string()))
        }

        fn fill_text(
            &mut self,
            _style: &TextStyle,
            _position: Point,
            _content: &str,
        ) -> Result<(), CanvasError> {
            Ok(())
        }
    }

    #[test]
    fn test_canvas_errors_propagate() {
        let err = scenario_a().render(&mut FailingCanvas).unwrap_err();
        assert!(matches!(
            err,
            ChordalError::Canvas(CanvasError::Unsupported(op)) if op == "stroke"
        ));
    }
}
