use std::io;
#[cfg(feature = "trace")]
use std::path::Path;

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "shaw_core=info,shaw_session=info,shaw_cli=info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env("SHAW_LOG").unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Log to stderr. stdout carries results only.
pub fn init_tracing(json: bool) {
    let builder = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(false)
        .with_env_filter(env_filter());
    // A second call (tests, embedding) keeps the first subscriber.
    let _ = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}

/// Debug-level JSON trace written to `<log_dir>/shaw-trace.jsonl`.
#[cfg(feature = "trace")]
pub fn init_file_tracing(log_dir: &Path) {
    let file_appender = tracing_appender::rolling::never(log_dir, "shaw-trace.jsonl");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    std::mem::forget(guard); // serve runs until stdin closes

    let _ = tracing_subscriber::fmt()
        .json()
        .with_writer(non_blocking)
        .with_target(true)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .with_env_filter(
            EnvFilter::try_from_env("SHAW_LOG")
                .unwrap_or_else(|_| EnvFilter::new("shaw_core=debug,shaw_session=debug")),
        )
        .try_init();
}
