mod engine;
mod engine_config;
mod engine_init;
mod engine_snapshot;
mod interaction_coordinator;
mod lifecycle;
mod render_frame_builder;
mod tooltip;
mod validation;

pub use engine::StreamgraphEngine;
pub use engine_config::{LabelConfig, ScaleConfig, StreamgraphConfig, StrokeStyle, TooltipConfig};
pub use engine_snapshot::{EngineSnapshot, LayerSnapshot};
pub use interaction_coordinator::PointerOutcome;
pub use lifecycle::ChartLifecycle;
pub use tooltip::{
    TooltipPayload, format_number, render_tooltip_template, rounded_two_digits, tooltip_fields,
};
