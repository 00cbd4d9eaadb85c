//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::ObservabilityConfig;

static INIT: Once = Once::new();

/// Initialize the roster tracing/logging system.
///
/// Reads the `ROSTER_LOG` environment variable for per-target log levels,
/// e.g. `ROSTER_LOG=roster_retrieval=debug,roster_embeddings=info`.
/// Falls back to `config.log_level` if `ROSTER_LOG` is not set or is invalid.
///
/// Idempotent: only the first call installs a subscriber, and an existing
/// global subscriber is left in place.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("ROSTER_LOG")
            .or_else(|_| EnvFilter::try_new(&config.log_level))
            .unwrap_or_else(|_| EnvFilter::new("info"));

        let registry = tracing_subscriber::registry().with(filter);
        // A host application may already own the global subscriber.
        let _ = if config.json {
            registry
                .with(fmt::layer().json().with_target(true).with_thread_ids(true))
                .try_init()
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .try_init()
        };
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_harmless() {
        let config = ObservabilityConfig::default();
        init_tracing(&config);
        init_tracing(&ObservabilityConfig {
            json: true,
            ..config
        });
        tracing::info!("tracing initialized twice");
    }
}
