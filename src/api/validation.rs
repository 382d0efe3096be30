use crate::error::{ChartError, ChartResult};

use super::{ScaleConfig, StreamgraphConfig};

pub(super) fn validate_config(config: &StreamgraphConfig) -> ChartResult<()> {
    if !config.viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: config.viewport.width,
            height: config.viewport.height,
        });
    }
    if config.colors.is_empty() {
        return Err(ChartError::InvalidConfig(
            "color scheme must contain at least one color".to_owned(),
        ));
    }
    if !config.stroke.width.is_finite() || config.stroke.width < 0.0 {
        return Err(ChartError::InvalidConfig(
            "stroke width must be finite and >= 0".to_owned(),
        ));
    }
    if !config.color_highlight_multiplier.is_finite() {
        return Err(ChartError::InvalidConfig(
            "color highlight multiplier must be finite".to_owned(),
        ));
    }
    if !config.curve_tension.is_finite() {
        return Err(ChartError::InvalidConfig(
            "curve tension must be finite".to_owned(),
        ));
    }
    validate_scale_config(&config.scale)?;

    if let Some(size) = config.labels.fixed_size {
        if !size.is_finite() || size <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "label fixed size must be finite and > 0".to_owned(),
            ));
        }
    }
    if !config.labels.minimum_size.is_finite() || config.labels.minimum_size < 0.0 {
        return Err(ChartError::InvalidConfig(
            "label minimum size must be finite and >= 0".to_owned(),
        ));
    }
    Ok(())
}

fn validate_scale_config(scale: &ScaleConfig) -> ChartResult<()> {
    if scale.divisions == 0 {
        return Err(ChartError::InvalidConfig(
            "scale divisions must be > 0".to_owned(),
        ));
    }
    let padding = scale.padding;
    if [padding.left, padding.right, padding.top, padding.bottom]
        .iter()
        .any(|side| !side.is_finite() || *side < 0.0)
    {
        return Err(ChartError::InvalidConfig(
            "scale padding must be finite and >= 0".to_owned(),
        ));
    }
    for (name, width) in [
        ("scale line width", scale.line_width),
        ("grid line width", scale.grid_line_width),
    ] {
        if !width.is_finite() || width < 0.0 {
            return Err(ChartError::InvalidConfig(format!(
                "{name} must be finite and >= 0"
            )));
        }
    }
    if !scale.font_size.is_finite() || scale.font_size <= 0.0 {
        return Err(ChartError::InvalidConfig(
            "scale font size must be finite and > 0".to_owned(),
        ));
    }
    if let Some(scale_override) = scale.scale_override {
        if scale_override.steps == 0
            || !scale_override.step_width.is_finite()
            || scale_override.step_width == 0.0
            || !scale_override.start_value.is_finite()
        {
            return Err(ChartError::InvalidConfig(
                "scale override needs steps > 0 and a finite, non-zero step width".to_owned(),
            ));
        }
    }
    Ok(())
}
