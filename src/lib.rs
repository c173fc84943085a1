pub mod config;
pub mod knowledge;
pub mod pipeline;
pub mod roster;

pub use pipeline::analyzer::{analyze, build_analyzer, ReportAnalyzer};

use tracing_subscriber::EnvFilter;

/// Initialize tracing for a hosting application.
///
/// Respects `RUST_LOG` when set, otherwise falls back to the crate default.
/// Safe to call once at process start; the hosting UI owns the decision of
/// when (and whether) to call it.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("DocWise analysis engine v{}", config::APP_VERSION);
}
