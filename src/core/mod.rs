pub mod baseline;
pub mod color;
mod color_names;
pub mod curve;
pub mod dataset;
pub mod label;
pub mod layer;
pub mod layout;
pub mod measure;
pub mod ordering;
pub mod palette;
pub mod scale;
pub mod types;

pub use baseline::{StackedExtent, apply_baseline, minimized_wiggle_baseline, stacked_extent};
pub use color::Rgba;
pub use curve::{
    BoundaryPoint, ControlPoints, CurvePoint, Edge, PixelPoint, add_control_points,
    control_point_scaler, decorate_beziers, normalize_tension,
};
pub use dataset::{datasets_same_length, validate_datasets};
pub use hit_test::{
    HitPolygon, HitResult, column_index_at, hit_test_layers, layer_hit_polygon, point_in_polygon,
    point_within_layer,
};
pub use label::{
    LabelOptions, LabelPlacement, LabelPlacementMethod, LabelStrategy, adjust_x_to_fit,
    ideal_label_placement, max_height_label_placement, place_label,
};
pub use layer::{Layer, LayerDatum, build_layers, compute_layer_stats};
pub use layout::{StreamLayout, compute_layout};
pub use measure::{HeuristicTextMeasurer, LabelFont, TextMeasurer};
pub use ordering::reorder_layers_outward;
pub use palette::{
    ColorAssignment, ColorAssignmentMethod, ColorInterpolation, assign_colors,
    layers_in_color_order, scheme_color,
};
pub use scale::{ColumnScale, PlotPadding, ScaleOverride, StreamScale, ValueRange};
pub use types::{Series, StreamgraphData, Viewport};
