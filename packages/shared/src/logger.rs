//! tracing-subscriber setup shared by the binaries.

use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::Writer, time::FormatTime},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::time::now_jst;

/// Prints log timestamps in JST with millisecond precision.
#[derive(Debug, Clone, Copy, Default)]
pub struct JstTimer;

impl FormatTime for JstTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", now_jst().format("%Y-%m-%dT%H:%M:%S%.3f%:z"))
    }
}

/// Build the default filter directive for a binary.
///
/// Cargo binary names may contain `-`, but tracing targets use the
/// crate's module path, so hyphens are mapped to underscores.
pub fn default_directive(name: &str, default_level: &str) -> String {
    let target = name.replace('-', "_");
    format!("{target}={default_level},tower_http={default_level}")
}

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise logs for `name` and `tower_http`
/// are emitted at `default_level`.
pub fn setup_logger(name: &str, default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(name, default_level)));

    // try_init: tests and embedding binaries may already have a subscriber
    let result = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_timer(JstTimer).with_target(true))
        .try_init();

    if result.is_err() {
        tracing::debug!("Global tracing subscriber already set, skipping");
    }
}
