//! streamgraph-rs: layout and geometry engine for streamgraph charts.
//!
//! Layers are stacked around a wiggle-minimizing baseline, ordered outward
//! from the center, colored from a scheme and smoothed into closed
//! silhouettes. Drawing goes through a backend-agnostic `RenderFrame`;
//! pointer hit testing and tooltip payloads are resolved by the engine.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartLifecycle, StreamgraphConfig, StreamgraphEngine};
pub use error::{ChartError, ChartResult};
