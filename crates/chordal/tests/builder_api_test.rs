//! Integration tests for the DiagramBuilder API
//!
//! These tests verify that the public API works end to end, from a JSON
//! document to SVG markup.

use chordal::{
    ChordalError, DiagramBuilder, DiagramError,
    config::{AppConfig, CanvasConfig, RenderConfig, StyleConfig},
    palette::PaletteKind,
    render::SelfFlowPolicy,
};

const MATRIX: &str = r#"{
    "labels": ["10.0.0.1", "10.0.0.2", "10.0.0.3"],
    "flow": [[0, 100, 0], [0, 0, 50], [0, 0, 0]]
}"#;

fn config(style: StyleConfig, render: RenderConfig) -> AppConfig {
    AppConfig::new(CanvasConfig::new(600.0, 600.0), style, render)
}

#[test]
fn test_builder_api_exists() {
    let _builder = DiagramBuilder::default();
}

#[test]
fn test_render_simple_diagram() {
    let builder = DiagramBuilder::default();
    let table = builder.parse(MATRIX).expect("Failed to parse flow document");
    let result = builder.render_svg(&table);

    match result {
        Ok(svg) => {
            assert!(svg.contains("<svg"), "Output should contain SVG tag");
            assert!(svg.contains("</svg>"), "Output should be complete SVG");
            assert!(svg.contains(r#"width="1728""#), "Default canvas is 24in");
            assert!(svg.contains("Network Traffic Flow Between IPs"));
            assert!(svg.contains("10.0.0.2"));
            assert!(svg.contains("0.0 MB"));
        }
        Err(err) => panic!("Failed to render: {err:?}"),
    }
}

#[test]
fn test_rendered_element_counts() {
    let builder = DiagramBuilder::new(config(StyleConfig::default(), RenderConfig::default()));
    let table = builder.parse(MATRIX).unwrap();
    let svg = builder.render_svg(&table).unwrap();

    // Three arcs and two chords.
    assert_eq!(svg.matches("<path").count(), 5);
    // Title plus two labels per node, each drawn over a backplate.
    assert_eq!(svg.matches("<text").count(), 1 + 3 * 2 * 2);
}

#[test]
fn test_style_configuration() {
    let style = StyleConfig::new(Some("#fafafa".to_string()), Some(String::new()));
    let builder = DiagramBuilder::new(config(style, RenderConfig::default()));
    let svg = builder.render_svg(&builder.parse(MATRIX).unwrap()).unwrap();

    assert!(svg.contains(r##"fill="#fafafa""##));
    assert!(!svg.contains("Network Traffic Flow Between IPs"));
}

#[test]
fn test_invalid_background_is_a_config_error() {
    let style = StyleConfig::new(Some("no-such-color".to_string()), None);
    let builder = DiagramBuilder::new(config(style, RenderConfig::default()));
    let table = builder.parse(MATRIX).unwrap();

    let err = builder.render_svg(&table).unwrap_err();
    assert!(matches!(err, ChordalError::Config(_)));
}

#[test]
fn test_invalid_canvas_is_a_config_error() {
    let config = AppConfig::new(
        CanvasConfig::new(0.0, 100.0),
        StyleConfig::default(),
        RenderConfig::default(),
    );
    let builder = DiagramBuilder::new(config);
    let table = builder.parse(MATRIX).unwrap();

    assert!(matches!(
        builder.render_svg(&table),
        Err(ChordalError::Config(_))
    ));
}

#[test]
fn test_render_config_is_applied() {
    let source = r#"{"labels": ["a", "b"], "flow": [[7, 3], [0, 0]]}"#;

    let skip = DiagramBuilder::new(config(StyleConfig::default(), RenderConfig::default()));
    let looped = DiagramBuilder::new(config(
        StyleConfig::default(),
        RenderConfig::new(PaletteKind::Spectrum, SelfFlowPolicy::Loop),
    ));

    let table = skip.parse(source).unwrap();
    let skip_svg = skip.render_svg(&table).unwrap();
    let loop_svg = looped.render_svg(&table).unwrap();

    assert_eq!(skip_svg.matches("<path").count(), 3);
    assert_eq!(loop_svg.matches("<path").count(), 4);
}

#[test]
fn test_chord_cap_is_applied() {
    let builder = DiagramBuilder::new(config(
        StyleConfig::default(),
        RenderConfig::default().with_chord_cap("round"),
    ));
    let svg = builder.render_svg(&builder.parse(MATRIX).unwrap()).unwrap();

    // Arcs keep butt caps; only the two chords are rounded.
    assert_eq!(svg.matches(r#"stroke-linecap="round""#).count(), 2);
    assert_eq!(svg.matches(r#"stroke-linecap="butt""#).count(), 3);
}

#[test]
fn test_invalid_chord_cap_is_a_config_error() {
    let builder = DiagramBuilder::new(config(
        StyleConfig::default(),
        RenderConfig::default().with_chord_cap("pointy"),
    ));
    let table = builder.parse(MATRIX).unwrap();

    assert!(matches!(
        builder.build_diagram(&table),
        Err(ChordalError::Config(_))
    ));
    assert!(matches!(
        builder.render_svg(&table),
        Err(ChordalError::Config(_))
    ));
}

#[test]
fn test_single_node_is_rejected() {
    let builder = DiagramBuilder::default();
    let table = builder
        .parse(r#"[{"source": "a", "destination": "a", "bytes": 1}]"#)
        .unwrap();

    let err = builder.render_svg(&table).unwrap_err();
    assert!(matches!(
        err,
        ChordalError::Diagram(DiagramError::SingleNode)
    ));
}

#[test]
fn test_empty_input_is_rejected() {
    let builder = DiagramBuilder::default();
    let table = builder.parse("[]").unwrap();

    assert!(matches!(
        builder.render_svg(&table),
        Err(ChordalError::Diagram(DiagramError::Empty))
    ));
}

#[test]
fn test_ragged_matrix_is_rejected() {
    let builder = DiagramBuilder::default();
    let table = builder
        .parse(r#"{"labels": ["a", "b"], "flow": [[0, 1], [1]]}"#)
        .unwrap();

    assert!(matches!(
        builder.render_svg(&table),
        Err(ChordalError::Diagram(DiagramError::NotSquare { row: 1, .. }))
    ));
}

#[test]
fn test_parse_invalid_document_returns_error() {
    let builder = DiagramBuilder::default();
    let result = builder.parse("this is not json");
    assert!(matches!(result, Err(ChordalError::Source(_))));
}

#[test]
fn test_builder_reusability() {
    let builder = DiagramBuilder::default();

    let first = builder.parse(MATRIX).expect("Failed to parse first document");
    let second = builder
        .parse(r#"[{"source.ip": "x", "destination.ip": "y", "network.bytes": 2048}]"#)
        .expect("Failed to parse second document");

    let svg1 = builder.render_svg(&first).expect("Failed to render first");
    let svg2 = builder.render_svg(&second).expect("Failed to render second");

    assert!(svg1.contains("<svg"), "First SVG should be valid");
    assert!(svg2.contains("<svg"), "Second SVG should be valid");
    assert_eq!(svg1, builder.render_svg(&first).unwrap(), "Rendering is deterministic");
}
