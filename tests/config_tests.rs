use streamgraph_rs::ChartError;
use streamgraph_rs::api::{StreamgraphConfig, StreamgraphEngine, StrokeStyle};
use streamgraph_rs::core::{
    ColorAssignmentMethod, ColorInterpolation, LabelPlacementMethod, Rgba, ScaleOverride,
    Series, StreamgraphData, Viewport,
};
use streamgraph_rs::render::NullRenderer;

fn data() -> StreamgraphData {
    StreamgraphData::new(
        ["a", "b"].map(str::to_owned).to_vec(),
        vec![Series::new("s", vec![1.0, 2.0])],
    )
}

#[test]
fn defaults_match_documented_values() {
    let config = StreamgraphConfig::new(Viewport::new(640, 480));
    assert!(config.curve);
    assert_eq!(config.curve_tension, 0.1);
    assert_eq!(config.stroke, StrokeStyle::default());
    assert_eq!(config.stroke.width, 2.0);
    assert_eq!(config.colors.len(), 2);
    assert_eq!(config.color_highlight_multiplier, 0.92);
    assert_eq!(config.color_interpolation, ColorInterpolation::Gradient);
    assert_eq!(
        config.color_assignment_method,
        ColorAssignmentMethod::StackingOrder
    );
    assert_eq!(config.labels.placement_method, LabelPlacementMethod::Ideal);
    assert_eq!(config.labels.minimum_size, 12.0);
    assert_eq!(config.scale.divisions, 6);
    assert!(config.hover_enabled());
    config.validate().expect("defaults are valid");
}

#[test]
fn json_round_trip_preserves_config() {
    let config = StreamgraphConfig::new(Viewport::new(640, 480))
        .with_colors(
            vec![Rgba::opaque(255, 0, 0), Rgba::new(0, 0, 255, 0.5)],
            ColorInterpolation::Cycle,
        )
        .with_color_assignment_method(ColorAssignmentMethod::MaxHeight)
        .with_scale_override(ScaleOverride {
            steps: 4,
            step_width: 2.5,
            start_value: -5.0,
        });
    let json = config.to_json_pretty().expect("serialize");
    assert!(json.contains("\"rgba(255,0,0,1)\""));
    assert!(json.contains("\"maxHeight\""));

    let parsed = StreamgraphConfig::from_json_str(&json).expect("parse");
    assert_eq!(parsed, config);
}

#[test]
fn sparse_json_takes_defaults_and_css_colors() {
    let parsed = StreamgraphConfig::from_json_str(
        r##"{
            "viewport": { "width": 300, "height": 200 },
            "colors": ["#f00", "steelblue", "hsl(120, 100%, 25%)"],
            "background_color": "transparent",
            "labels": { "placement_method": "idealThenMaxHeight" }
        }"##,
    )
    .expect("parse");

    assert_eq!(
        parsed.colors,
        vec![
            Rgba::opaque(255, 0, 0),
            Rgba::opaque(70, 130, 180),
            Rgba::opaque(0, 128, 0),
        ]
    );
    assert_eq!(parsed.background_color, Rgba::new(0, 0, 0, 0.0));
    assert_eq!(
        parsed.labels.placement_method,
        LabelPlacementMethod::IdealThenMaxHeight
    );
    assert_eq!(parsed.labels.minimum_size, 12.0);
    assert!(parsed.curve);
}

#[test]
fn invalid_color_fails_at_load_time() {
    let err = StreamgraphConfig::from_json_str(
        r#"{ "viewport": { "width": 300, "height": 200 }, "colors": ["notacolor"] }"#,
    )
    .expect_err("bad color");
    assert!(matches!(err, ChartError::InvalidData(message) if message.contains("notacolor")));
}

#[test]
fn validation_rejects_bad_settings() {
    let viewport = Viewport::new(640, 480);

    let empty_scheme =
        StreamgraphConfig::new(viewport).with_colors(Vec::new(), ColorInterpolation::Gradient);
    assert!(matches!(
        empty_scheme.validate(),
        Err(ChartError::InvalidConfig(_))
    ));

    let negative_stroke = StreamgraphConfig::new(viewport).with_stroke(StrokeStyle {
        width: -1.0,
        ..StrokeStyle::default()
    });
    assert!(matches!(
        negative_stroke.validate(),
        Err(ChartError::InvalidConfig(_))
    ));

    let mut zero_divisions = StreamgraphConfig::new(viewport);
    zero_divisions.scale.divisions = 0;
    assert!(zero_divisions.validate().is_err());

    let mut bad_fixed_size = StreamgraphConfig::new(viewport);
    bad_fixed_size.labels.fixed_size = Some(0.0);
    assert!(bad_fixed_size.validate().is_err());

    let mut negative_minimum = StreamgraphConfig::new(viewport);
    negative_minimum.labels.minimum_size = -1.0;
    assert!(negative_minimum.validate().is_err());

    let nan_multiplier = StreamgraphConfig::new(viewport).with_color_highlight(true, f64::NAN);
    assert!(nan_multiplier.validate().is_err());

    let zero_viewport = StreamgraphConfig::new(Viewport::new(0, 480));
    assert!(matches!(
        zero_viewport.validate(),
        Err(ChartError::InvalidViewport { width: 0, height: 480 })
    ));
}

#[test]
fn engine_refuses_invalid_config() {
    let config = StreamgraphConfig::new(Viewport::new(640, 480))
        .with_colors(Vec::new(), ColorInterpolation::Cycle);
    let result = StreamgraphEngine::new(NullRenderer::default(), config, data());
    assert!(matches!(result, Err(ChartError::InvalidConfig(_))));
}

#[test]
fn scale_override_sets_value_range() {
    let config =
        StreamgraphConfig::new(Viewport::new(640, 480)).with_scale_override(ScaleOverride {
            steps: 4,
            step_width: 2.5,
            start_value: -5.0,
        });
    let engine = StreamgraphEngine::new(NullRenderer::default(), config, data()).expect("engine");
    let range = engine.scale().range();
    assert_eq!(range.min, 5.0);
    assert_eq!(range.max, -5.0);
    assert_eq!(range.steps, 4);
}
