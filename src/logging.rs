use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable holding an `EnvFilter` directive, e.g. `md2html=debug`.
pub const LOG_ENV: &str = "MD2HTML_LOG";

const DEFAULT_DIRECTIVE: &str = "warn";

/// Install a stderr logger. Stdout is reserved for the rendered HTML.
///
/// Calling it more than once is harmless: later calls are ignored.
pub fn init() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_ansi(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init();
}

