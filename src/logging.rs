use tracing_subscriber::EnvFilter;

/// Filter directives for the stderr log (e.g. `debug`, `warn`).
pub const LOG_FILTER_ENV: &str = "BUFFALO_PLUGIN_TEMPLATE_LOG";

/// Initialize tracing on stderr.
///
/// Stdout carries the catalog JSON and generated sources, so logs never go
/// there. Defaults to `info` when the filter variable is unset or invalid.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    // A subscriber may already be installed (e.g. by an embedding test harness).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .try_init();
}
