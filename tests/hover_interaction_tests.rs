use approx::assert_relative_eq;
use streamgraph_rs::ChartError;
use streamgraph_rs::api::{StreamgraphConfig, StreamgraphEngine, TooltipConfig};
use streamgraph_rs::core::{Rgba, Series, StreamgraphData, Viewport};
use streamgraph_rs::interaction::HoverState;
use streamgraph_rs::render::{CanvasLayerKind, Color, NullRenderer};

fn engine_with(config: StreamgraphConfig) -> StreamgraphEngine<NullRenderer> {
    let data = StreamgraphData::new(
        ["Mon", "Tue", "Wed"].map(str::to_owned).to_vec(),
        vec![Series::new("alpha", vec![4.0, 4.0, 4.0]).with_tooltip_data("weekly")],
    );
    StreamgraphEngine::new(NullRenderer::default(), config, data).expect("engine init")
}

fn default_engine() -> StreamgraphEngine<NullRenderer> {
    engine_with(StreamgraphConfig::new(Viewport::new(400, 300)))
}

#[test]
fn hovering_a_layer_redraws_with_highlight() {
    let mut engine = default_engine();

    let outcome = engine.pointer_move(100.0, 150.0).expect("pointer move");
    assert!(outcome.redrawn);
    assert_eq!(
        outcome.hover,
        HoverState {
            layer_index: Some(0),
            column_index: Some(0),
        }
    );
    assert!(engine.layers()[0].hover);
    assert_eq!(engine.renderer().frames_rendered, 2);

    let frame = engine.renderer().last_frame.as_ref().expect("frame");
    let path = &frame.layer(CanvasLayerKind::Series).expect("series").paths[0];
    let hover_fill: Color = Rgba::new(202, 202, 202, 0.9).into();
    assert_eq!(path.fill, Some(hover_fill));
}

#[test]
fn tooltip_payload_is_built_on_hover_change() {
    let mut engine = default_engine();
    let outcome = engine.pointer_move(100.0, 150.0).expect("pointer move");
    let tooltip = outcome.tooltip.expect("tooltip on hover");

    assert_relative_eq!(tooltip.x, 50.0);
    assert_relative_eq!(tooltip.y, 150.0);
    assert_eq!(tooltip.text, "x:Mon y:4");
    assert_eq!(tooltip.title.as_deref(), Some("alpha"));
    assert_eq!(tooltip.color, Rgba::new(202, 202, 202, 0.9));
    assert_eq!(tooltip.fields["sum"], "12");
    assert_eq!(tooltip.fields["tooltipData"], "weekly");
    assert_eq!(tooltip.style, TooltipConfig::default());
}

#[test]
fn repeated_hover_on_same_cell_is_quiet() {
    let mut engine = default_engine();
    let _ = engine.pointer_move(100.0, 150.0).expect("first move");
    let outcome = engine.pointer_move(120.0, 160.0).expect("second move");
    assert!(!outcome.redrawn);
    assert!(outcome.tooltip.is_none());
    assert_eq!(engine.renderer().frames_rendered, 2);

    let outcome = engine.pointer_move(250.0, 160.0).expect("next column");
    assert!(outcome.redrawn);
    assert_eq!(outcome.hover.column_index, Some(1));
}

#[test]
fn leaving_the_layer_clears_hover() {
    let mut engine = default_engine();
    let _ = engine.pointer_move(100.0, 150.0).expect("enter");

    let outcome = engine.pointer_move(100.0, 20.0).expect("above the band");
    assert!(outcome.redrawn);
    assert!(!outcome.hover.is_active());
    assert!(!engine.layers()[0].hover);

    let _ = engine.pointer_move(100.0, 150.0).expect("re-enter");
    assert!(engine.pointer_leave().expect("leave"));
    assert!(!engine.pointer_leave().expect("second leave"));
    assert_eq!(engine.hover_state(), HoverState::default());
}

#[test]
fn last_column_and_left_padding_never_hit() {
    let mut engine = default_engine();
    let outcome = engine.pointer_move(385.0, 150.0).expect("last column");
    assert!(!outcome.hover.is_active());
    let outcome = engine.pointer_move(20.0, 150.0).expect("left padding");
    assert!(!outcome.hover.is_active());
    assert_eq!(engine.renderer().frames_rendered, 1);
}

#[test]
fn hover_requires_tooltips_and_highlight() {
    let config = StreamgraphConfig::new(Viewport::new(400, 300)).with_color_highlight(false, 0.92);
    let mut engine = engine_with(config);
    let outcome = engine.pointer_move(100.0, 150.0).expect("pointer move");
    assert!(!outcome.redrawn);
    assert!(!outcome.hover.is_active());

    let mut config = StreamgraphConfig::new(Viewport::new(400, 300));
    config.tooltip.enabled = false;
    let mut engine = engine_with(config);
    assert!(!engine.pointer_move(100.0, 150.0).expect("pointer move").redrawn);
}

#[test]
fn non_finite_pointer_is_rejected() {
    let mut engine = default_engine();
    let err = engine.pointer_move(f64::NAN, 10.0).expect_err("nan x");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn data_update_resets_hover() {
    let mut engine = default_engine();
    let _ = engine.pointer_move(100.0, 150.0).expect("enter");
    let data = engine.data().clone();
    engine.set_data(data).expect("set data");
    assert_eq!(engine.hover_state(), HoverState::default());
    assert!(!engine.layers()[0].hover);
}
