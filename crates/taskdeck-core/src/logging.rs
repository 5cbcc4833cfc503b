use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global tracing subscriber for an embedding application.
///
/// Respects `RUST_LOG`; defaults to `warn` so a host UI stays quiet unless
/// diagnostics are requested. Logs go to stderr. Calling this twice is a
/// no-op (the second `try_init` fails silently).
pub fn init() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
