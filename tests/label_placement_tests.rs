use approx::assert_relative_eq;
use streamgraph_rs::api::{StreamgraphConfig, StreamgraphEngine};
use streamgraph_rs::core::{
    HeuristicTextMeasurer, LabelFont, LabelOptions, LabelPlacementMethod, LabelStrategy, Series,
    StreamgraphData, Viewport, adjust_x_to_fit, place_label,
};
use streamgraph_rs::render::{CanvasLayerKind, NullRenderer, TextHAlign, TextVAlign};

fn engine(method: LabelPlacementMethod, label: &str) -> StreamgraphEngine<NullRenderer> {
    let config = StreamgraphConfig::new(Viewport::new(400, 300)).with_label_placement_method(method);
    let data = StreamgraphData::new(
        ["Mon", "Tue", "Wed"].map(str::to_owned).to_vec(),
        vec![Series::new(label, vec![4.0, 4.0, 4.0])],
    );
    StreamgraphEngine::new(NullRenderer::default(), config, data).expect("engine init")
}

fn options(method: LabelPlacementMethod, font: &LabelFont) -> LabelOptions<'_> {
    LabelOptions {
        method,
        fixed_size: None,
        minimum_size: 12.0,
        font,
        canvas_width: 400.0,
    }
}

#[test]
fn max_height_centers_on_widest_column() {
    let engine = engine(LabelPlacementMethod::MaxHeight, "alpha");
    let font = LabelFont::default();
    let placement = place_label(
        &engine.layers()[0],
        engine.scale(),
        &HeuristicTextMeasurer,
        options(LabelPlacementMethod::MaxHeight, &font),
    )
    .expect("placement");

    assert_eq!(placement.strategy, LabelStrategy::MaxHeight);
    // Ties on width resolve to the last column, 380px; the label is pulled
    // back one text width to stay clear of the right edge.
    assert_relative_eq!(placement.position.x, 172.0, epsilon = 1e-6);
    assert_relative_eq!(placement.position.y, 140.0, epsilon = 1e-6);
    assert_relative_eq!(placement.font_size, 69.333_333_333, epsilon = 1e-6);
}

#[test]
fn max_height_label_is_centered_in_frame() {
    let mut engine = engine(LabelPlacementMethod::MaxHeight, "alpha");
    let frame = engine.build_render_frame();
    let text = &frame.layer(CanvasLayerKind::Labels).expect("labels").texts[0];
    assert_eq!(text.h_align, TextHAlign::Center);
    assert_eq!(text.v_align, TextVAlign::Middle);
}

#[test]
fn ideal_then_max_height_falls_back() {
    // Too long to fit across the band at any size.
    let title = "a title that cannot possibly fit inside this band";
    let engine = engine(LabelPlacementMethod::IdealThenMaxHeight, title);
    let font = LabelFont::default();
    let layer = &engine.layers()[0];

    assert!(
        place_label(
            layer,
            engine.scale(),
            &HeuristicTextMeasurer,
            options(LabelPlacementMethod::Ideal, &font),
        )
        .is_none()
    );
    let placement = place_label(
        layer,
        engine.scale(),
        &HeuristicTextMeasurer,
        options(LabelPlacementMethod::IdealThenMaxHeight, &font),
    )
    .expect("fallback placement");
    assert_eq!(placement.strategy, LabelStrategy::MaxHeight);
}

#[test]
fn fixed_size_overrides_fitted_size() {
    let engine = engine(LabelPlacementMethod::Ideal, "alpha");
    let font = LabelFont::default();
    let placement = place_label(
        &engine.layers()[0],
        engine.scale(),
        &HeuristicTextMeasurer,
        LabelOptions {
            fixed_size: Some(18.0),
            ..options(LabelPlacementMethod::Ideal, &font)
        },
    )
    .expect("placement");
    assert_eq!(placement.font_size, 18.0);
    assert_eq!(placement.strategy, LabelStrategy::Ideal);
}

#[test]
fn minimum_size_suppresses_small_labels() {
    let engine = engine(LabelPlacementMethod::MaxHeight, "alpha");
    let font = LabelFont::default();
    let placement = place_label(
        &engine.layers()[0],
        engine.scale(),
        &HeuristicTextMeasurer,
        LabelOptions {
            minimum_size: 100.0,
            ..options(LabelPlacementMethod::MaxHeight, &font)
        },
    );
    assert!(placement.is_none());
}

#[test]
fn untitled_layers_get_no_label() {
    let mut engine = engine(LabelPlacementMethod::Ideal, "");
    let frame = engine.build_render_frame();
    assert!(frame.layer(CanvasLayerKind::Labels).expect("labels").texts.is_empty());
}

#[test]
fn shifting_left_stops_once_text_fits() {
    assert_eq!(adjust_x_to_fit(380.0, 208.0, 390.0), 172.0);
    assert_eq!(adjust_x_to_fit(100.0, 50.0, 390.0), 100.0);
    assert_eq!(adjust_x_to_fit(100.0, 0.0, 50.0), 100.0);
}
