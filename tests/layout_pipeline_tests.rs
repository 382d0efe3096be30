use approx::assert_relative_eq;
use streamgraph_rs::ChartError;
use streamgraph_rs::core::{
    ColorAssignment, ColorAssignmentMethod, ColorInterpolation, Rgba, Series, compute_layout,
    datasets_same_length, validate_datasets,
};
use streamgraph_rs::error::ConfigurationError;

const SCHEME: [Rgba; 2] = [Rgba::new(220, 220, 220, 0.9), Rgba::new(151, 187, 205, 0.9)];

fn gradient() -> ColorAssignment<'static> {
    ColorAssignment {
        scheme: &SCHEME,
        interpolation: ColorInterpolation::Gradient,
        method: ColorAssignmentMethod::StackingOrder,
        highlight_multiplier: 0.92,
    }
}

fn crossing_pair() -> Vec<Series> {
    vec![
        Series::new("rising", vec![1.0, 2.0, 3.0]),
        Series::new("falling", vec![3.0, 2.0, 1.0]),
    ]
}

#[test]
fn crossing_pair_end_to_end() {
    let layout = compute_layout(&crossing_pair(), gradient()).expect("layout");

    assert_eq!(layout.columns, 3);
    for (actual, expected) in layout.baseline.iter().zip([1.5, 2.0, 2.5]) {
        assert_relative_eq!(*actual, expected);
    }

    let first = &layout.layers[0];
    assert_relative_eq!(first.data[0].y1, layout.baseline[0]);
    assert_relative_eq!(first.data[0].y0, 0.5);
    let second = &layout.layers[1];
    assert_relative_eq!(second.data[0].y1, 0.5);
    assert_relative_eq!(second.data[0].y0, -2.5);

    assert_eq!(first.color, SCHEME[0]);
    assert_eq!(second.color, SCHEME[1]);
    assert_ne!(first.color, second.color);
    assert_eq!(first.hover_color, Rgba::new(202, 202, 202, 0.9));
}

#[test]
fn layout_is_idempotent() {
    let datasets = vec![
        Series::new("a", vec![0.0, 4.0, 2.5, 7.0]),
        Series::new("b", vec![1.0, 0.5, 3.0, 2.0]),
        Series::new("c", vec![6.0, 2.0, 0.0, 1.0]),
        Series::new("d", vec![2.0, 2.0, 2.0, 2.0]),
        Series::new("e", vec![0.0, 0.0, 9.0, 1.0]),
    ];
    let first = compute_layout(&datasets, gradient()).expect("first layout");
    let second = compute_layout(&datasets, gradient()).expect("second layout");
    assert_eq!(first, second);

    let order: Vec<usize> = first.layers.iter().map(|layer| layer.series_index).collect();
    assert_eq!(order, vec![0, 2, 4, 1, 3]);
}

#[test]
fn configuration_errors_abort_layout() {
    let err = compute_layout(&[], gradient()).expect_err("empty datasets");
    assert!(matches!(
        err,
        ChartError::Configuration(ConfigurationError::EmptyDatasets)
    ));

    let mut missing = Series::new("missing", vec![1.0]);
    missing.data = None;
    let err = compute_layout(&[Series::new("ok", vec![1.0]), missing], gradient())
        .expect_err("missing data");
    assert!(matches!(
        err,
        ChartError::Configuration(ConfigurationError::MissingSeriesData { series: 1 })
    ));

    let err = compute_layout(
        &[Series::new("a", vec![1.0, 2.0]), Series::new("b", vec![1.0])],
        gradient(),
    )
    .expect_err("mismatched lengths");
    assert!(matches!(
        err,
        ChartError::Configuration(ConfigurationError::MismatchedSeriesLengths)
    ));
}

#[test]
fn length_check_reports_instead_of_failing() {
    let datasets = vec![Series::new("a", vec![1.0, 2.0]), Series::new("b", vec![1.0])];
    assert_eq!(datasets_same_length(&datasets), Ok(false));
    assert_eq!(datasets_same_length(&crossing_pair()), Ok(true));
    assert_eq!(validate_datasets(&crossing_pair()), Ok(3));

    let empty = vec![Series::new("a", vec![1.0]), Series::new("b", Vec::new())];
    assert_eq!(
        datasets_same_length(&empty),
        Err(ConfigurationError::EmptySeriesData { series: 1 })
    );
}

#[test]
fn all_zero_layer_starts_at_last_column() {
    let datasets = vec![
        Series::new("zero", vec![0.0, 0.0, 0.0]),
        Series::new("one", vec![1.0, 1.0, 1.0]),
    ];
    let layout = compute_layout(&datasets, gradient()).expect("layout");
    let zero = layout
        .layers
        .iter()
        .find(|layer| layer.series_index == 0)
        .expect("zero layer");
    assert_eq!(zero.onset, 2);
    assert_eq!(zero.sum, 0.0);
}

#[test]
fn explicit_series_colors_win_over_scheme() {
    let datasets = vec![
        Series::new("a", vec![1.0, 1.0])
            .with_fill_color(Rgba::opaque(10, 20, 30))
            .with_highlight_color(Rgba::opaque(1, 2, 3)),
        Series::new("b", vec![1.0, 1.0]).with_fill_color(Rgba::opaque(100, 100, 100)),
    ];
    let layout = compute_layout(&datasets, gradient()).expect("layout");
    assert_eq!(layout.layers[0].color, Rgba::opaque(10, 20, 30));
    assert_eq!(layout.layers[0].hover_color, Rgba::opaque(1, 2, 3));
    assert_eq!(layout.layers[1].hover_color, Rgba::opaque(92, 92, 92));
}
