use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// `RUST_LOG` picks the filter (default `info`); `PORTFOLIO_LOG_FORMAT=json`
/// switches to JSON lines. Everything goes to stderr.
pub fn init_tracing() {
    let log_format =
        std::env::var("PORTFOLIO_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}
