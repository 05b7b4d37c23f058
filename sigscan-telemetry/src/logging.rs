//! ## sigscan-telemetry::logging
//! **`tracing`-based structured logging**

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Installs a global `tracing` subscriber. `level` is used only when
/// `RUST_LOG` is unset, matching the teacher's env-first precedence.
pub fn init_logging(level: &str) {
    let filter_layer =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    let fmt_layer = fmt::layer().with_target(false);

    let _ = tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[traced_test]
    #[test]
    fn init_logging_installs_a_working_subscriber() {
        init_logging("debug");
        tracing::info!("sigscan telemetry logging initialized");
        assert!(logs_contain("sigscan telemetry logging initialized"));
    }
}
