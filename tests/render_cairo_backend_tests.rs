#![cfg(feature = "cairo-backend")]

use cairo::{Context, Format, ImageSurface};
use streamgraph_rs::ChartError;
use streamgraph_rs::api::{StreamgraphConfig, StreamgraphEngine};
use streamgraph_rs::core::{LabelFont, Series, StreamgraphData, TextMeasurer, Viewport};
use streamgraph_rs::render::CairoRenderer;

fn data() -> StreamgraphData {
    StreamgraphData::new(
        ["Mon", "Tue", "Wed"].map(str::to_owned).to_vec(),
        vec![
            Series::new("alpha", vec![4.0, 6.0, 4.0]),
            Series::new("beta", vec![2.0, 1.0, 3.0]),
        ],
    )
}

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn cairo_renderer_renders_silhouettes_and_scale() {
    let renderer = CairoRenderer::new(900, 500).expect("renderer");
    let config = StreamgraphConfig::new(Viewport::new(900, 500));
    let engine = StreamgraphEngine::new(renderer, config, data()).expect("engine init");

    let renderer = engine.into_renderer();
    let stats = renderer.last_stats();
    assert_eq!(stats.rects_drawn, 1);
    assert_eq!(stats.paths_drawn, 2);
    assert_eq!(stats.lines_drawn, 10);
    assert!(stats.texts_drawn >= 10);
}

#[test]
fn cairo_renderer_can_draw_on_external_context() {
    let renderer = CairoRenderer::new(600, 320).expect("renderer");
    let config = StreamgraphConfig::new(Viewport::new(600, 320));
    let mut engine = StreamgraphEngine::new(renderer, config, data()).expect("engine init");

    let surface = ImageSurface::create(Format::ARgb32, 600, 320).expect("surface");
    let context = Context::new(&surface).expect("context");
    engine
        .render_on_cairo_context(&context)
        .expect("render on context");

    let renderer = engine.into_renderer();
    assert_eq!(renderer.last_stats().paths_drawn, 2);
}

#[test]
fn pango_measures_wider_text_as_wider() {
    let renderer = CairoRenderer::new(200, 100).expect("renderer");
    let font = LabelFont::default();
    let short = renderer.measure_text_width("ab", 16.0, &font);
    let long = renderer.measure_text_width("abcdefgh", 16.0, &font);
    assert!(short > 0.0);
    assert!(long > short);
}
