//! Telemetry helpers for applications embedding `streamgraph-rs`.
//!
//! Layout, draw and hover passes emit `tracing` events. This module keeps
//! subscriber setup explicit and opt-in: consumers can call
//! `init_default_tracing` or wire their own subscriber and filters.

/// Filter used when `RUST_LOG` is unset: layout/hover events from this crate
/// at `info`, everything else at `warn`.
pub const DEFAULT_FILTER: &str = "warn,streamgraph_rs=info";

/// Initializes a default `tracing` subscriber when the `telemetry` feature is enabled.
///
/// Returns `true` when initialization succeeds.
/// Returns `false` when no initialization is performed (feature disabled) or if a
/// global subscriber was already set by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER)),
            )
            .with_target(false)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
