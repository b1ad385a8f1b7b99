//! Renderers for the three kinds of marks on a chord diagram.
//!
//! Each renderer draws one mark at a time against any [`Canvas`] and holds
//! only presentation constants, never diagram data. The orchestration order
//! (arcs and labels first, chords on top) lives in
//! [`ChordDiagram::render`](crate::diagram::ChordDiagram::render).
//!
//! [`Canvas`]: chordal_core::draw::Canvas

mod arc;
mod chord;
mod label;

pub use arc::ArcRenderer;
pub use chord::{
    ALPHA_BOOST, ChordRenderer, MAX_CHORD_WIDTH, SelfFlowPolicy, boost_alpha, stroke_width,
};
pub use label::{
    IDENTITY_RADIUS_SCALE, LABEL_FONT_SIZE, LabelPlacement, LabelPlacer, VOLUME_RADIUS_SCALE,
    format_megabytes, upright_rotation,
};
