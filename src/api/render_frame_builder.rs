use tracing::{trace, warn};

use crate::core::{
    BoundaryPoint, ColumnScale, CurvePoint, Layer, LabelOptions, LabelStrategy, StreamScale,
    TextMeasurer, add_control_points, place_label,
};
use crate::render::{
    CanvasLayerKind, Color, LinePrimitive, PathCommand, PathPrimitive, RectPrimitive, RenderFrame,
    TextHAlign, TextPrimitive, TextVAlign,
};

use super::{ScaleConfig, StreamgraphConfig};

const Y_LABEL_GAP_PX: f64 = 8.0;
const X_LABEL_GAP_PX: f64 = 8.0;

/// Builds one draw pass: background, scale, silhouettes, then labels.
///
/// Refreshes every layer's `points` as a side effect; hit testing and label
/// fitting read them afterwards.
pub(super) fn build_stream_frame(
    layers: &mut [Layer],
    scale: &StreamScale,
    config: &StreamgraphConfig,
    x_labels: &[String],
    measurer: &impl TextMeasurer,
) -> RenderFrame {
    let viewport = scale.viewport();
    let mut frame = RenderFrame::new(viewport);

    frame.push_rect(
        CanvasLayerKind::Background,
        RectPrimitive::new(
            0.0,
            0.0,
            f64::from(viewport.width),
            f64::from(viewport.height),
            config.background_color.into(),
        ),
    );

    if config.scale.show_scale {
        push_scale(&mut frame, scale, &config.scale, x_labels);
    }

    for layer in layers.iter_mut() {
        layer.points = layer_draw_points(layer, scale);
        if config.curve {
            add_control_points(&mut layer.points, config.curve_tension);
        }
        if let Some(path) = layer_path(layer, config) {
            frame.push_path(CanvasLayerKind::Series, path);
        }
    }

    if config.labels.enabled {
        for layer in layers.iter() {
            if let Some(text) = layer_label(layer, scale, config, measurer) {
                frame.push_text(CanvasLayerKind::Labels, text);
            }
        }
    }

    trace!(
        layer_count = layers.len(),
        path_count = frame.path_count(),
        text_count = frame.text_count(),
        "streamgraph frame built"
    );
    frame
}

/// Pixel outline of a layer at every column; the bottom edge sits one pixel
/// below where `y1` maps.
fn layer_draw_points(layer: &Layer, scale: &impl ColumnScale) -> Vec<BoundaryPoint> {
    layer
        .data
        .iter()
        .enumerate()
        .map(|(column, datum)| {
            let x = scale.calculate_x(column);
            BoundaryPoint {
                top: CurvePoint::new(x, scale.calculate_y(datum.y0)),
                bottom: CurvePoint::new(x, scale.calculate_y(datum.y1) + 1.0),
            }
        })
        .collect()
}

/// Closed silhouette path starting one column before the layer's onset.
fn layer_path(layer: &Layer, config: &StreamgraphConfig) -> Option<PathPrimitive> {
    let points = &layer.points;
    let last = points.len().checked_sub(1)?;
    let draw_onset = layer.onset.saturating_sub(1).min(last);

    let start = points[draw_onset].top;
    let mut commands = vec![PathCommand::MoveTo {
        x: start.x,
        y: start.y,
    }];

    if config.curve {
        for point in &points[draw_onset + 1..] {
            commands.push(curve_command(&point.top));
        }
        let turn = points[last].bottom;
        commands.push(PathCommand::LineTo {
            x: turn.x,
            y: turn.y,
        });
        for point in points[draw_onset..last].iter().rev() {
            commands.push(curve_command(&point.bottom));
        }
    } else {
        for point in &points[draw_onset + 1..] {
            commands.push(PathCommand::LineTo {
                x: point.top.x,
                y: point.top.y,
            });
        }
        for point in points[draw_onset..].iter().rev() {
            commands.push(PathCommand::LineTo {
                x: point.bottom.x,
                y: point.bottom.y,
            });
        }
    }
    commands.push(PathCommand::Close);

    let fill = if layer.hover && config.color_highlight {
        layer.hover_color
    } else {
        layer.color
    };
    let mut path = PathPrimitive::new(commands).with_fill(fill.into());
    if config.stroke.enabled && config.stroke.width > 0.0 {
        path = path.with_stroke(config.stroke.width, config.stroke.color.into());
    }
    Some(path)
}

fn curve_command(point: &CurvePoint) -> PathCommand {
    match point.control {
        Some(control) => PathCommand::CubicTo {
            c1x: control.p1.x,
            c1y: control.p1.y,
            c2x: control.p2.x,
            c2y: control.p2.y,
            x: point.x,
            y: point.y,
        },
        None => PathCommand::LineTo {
            x: point.x,
            y: point.y,
        },
    }
}

fn layer_label(
    layer: &Layer,
    scale: &StreamScale,
    config: &StreamgraphConfig,
    measurer: &impl TextMeasurer,
) -> Option<TextPrimitive> {
    let Some(title) = layer.label.as_deref().filter(|title| !title.is_empty()) else {
        warn!(series_index = layer.series_index, "skipping label for untitled layer");
        return None;
    };

    let placement = place_label(
        layer,
        scale,
        measurer,
        LabelOptions {
            method: config.labels.placement_method,
            fixed_size: config.labels.fixed_size,
            minimum_size: config.labels.minimum_size,
            font: &config.labels.font,
            canvas_width: f64::from(scale.viewport().width),
        },
    )?;
    if !placement.font_size.is_finite() || placement.font_size <= 0.0 {
        return None;
    }

    let (h_align, v_align) = match placement.strategy {
        LabelStrategy::Ideal => (TextHAlign::Left, TextVAlign::Top),
        LabelStrategy::MaxHeight => (TextHAlign::Center, TextVAlign::Middle),
    };
    let color = layer.text_color.unwrap_or(config.labels.color);
    Some(
        TextPrimitive::new(
            title,
            placement.position.x,
            placement.position.y,
            placement.font_size,
            color.into(),
            h_align,
        )
        .with_v_align(v_align)
        .with_font(
            config.labels.font.family.clone(),
            config.labels.font.style.clone(),
        ),
    )
}

/// Y tick label text: `|round(v * 100) / 100|`, since the axis is symmetric.
fn format_scale_value(value: f64) -> String {
    let rounded = ((value * 100.0).round() / 100.0).abs();
    format!("{rounded}")
}

fn push_scale(
    frame: &mut RenderFrame,
    scale: &StreamScale,
    style: &ScaleConfig,
    x_labels: &[String],
) {
    let left = scale.plot_left();
    let right = left + scale.inner_width();
    let top = scale.start_point();
    let bottom = scale.end_point();
    let axis_color: Color = style.line_color.into();
    let grid_color: Color = style.grid_line_color.into();
    let grid_width = if style.show_grid_lines {
        style.grid_line_width
    } else {
        0.0
    };
    let text_color: Color = style.font_color.into();

    for (step, value) in scale.range().ticks().into_iter().enumerate() {
        let y = scale.calculate_y(value);
        if step == 0 {
            push_line(frame, LinePrimitive::new(left, y, right, y, style.line_width, axis_color));
        } else if style.show_horizontal_lines {
            push_line(frame, LinePrimitive::new(left, y, right, y, grid_width, grid_color));
        }
        if style.show_labels {
            let text = format_scale_value(value);
            frame.push_text(
                CanvasLayerKind::Scale,
                scale_text(text, left - Y_LABEL_GAP_PX, y, style, text_color)
                    .with_v_align(TextVAlign::Middle),
            );
        }
    }

    for column in 0..scale.columns() {
        let x = scale.calculate_x(column);
        if column == 0 {
            push_line(frame, LinePrimitive::new(x, top, x, bottom, style.line_width, axis_color));
        } else if style.show_vertical_lines {
            push_line(frame, LinePrimitive::new(x, top, x, bottom, grid_width, grid_color));
        }
        if style.show_labels {
            if let Some(label) = x_labels.get(column).filter(|label| !label.is_empty()) {
                let y = bottom + X_LABEL_GAP_PX;
                let mut text = scale_text(label.clone(), x, y, style, text_color);
                text.h_align = TextHAlign::Center;
                frame.push_text(CanvasLayerKind::Scale, text);
            }
        }
    }
}

fn scale_text(text: String, x: f64, y: f64, style: &ScaleConfig, color: Color) -> TextPrimitive {
    TextPrimitive::new(text, x, y, style.font_size, color, TextHAlign::Right)
        .with_font(style.font_family.clone(), style.font_style.clone())
}

/// Zero-width lines are configuration for "hidden" and are not emitted.
fn push_line(frame: &mut RenderFrame, line: LinePrimitive) {
    if line.stroke_width > 0.0 {
        frame.push_line(CanvasLayerKind::Scale, line);
    }
}
