//! Optional tracing subscriber for front ends. Compiled to no-ops unless the
//! `trace` feature is enabled.

use std::path::Path;

/// Install the global subscriber once.
///
/// With `log_dir`, conversion spans are appended as JSON lines to
/// `<log_dir>/emojify-trace.jsonl`; otherwise they go to stderr so stdout
/// stays clean for the converted sentence. The filter comes from `RUST_LOG`
/// and defaults to `emoji_core=debug`.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: Option<&Path>) {
    use std::sync::Once;

    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::EnvFilter;

    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("emoji_core=debug"));

        match log_dir {
            Some(dir) => {
                let file_appender = tracing_appender::rolling::never(dir, "emojify-trace.jsonl");
                let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
                std::mem::forget(guard); // flushed on process exit

                tracing_subscriber::fmt()
                    .json()
                    .with_writer(non_blocking)
                    .with_target(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .with_env_filter(filter)
                    .init();
            }
            None => {
                tracing_subscriber::fmt()
                    .compact()
                    .with_writer(std::io::stderr)
                    .with_span_events(FmtSpan::CLOSE)
                    .with_env_filter(filter)
                    .init();
            }
        }
    });
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: Option<&Path>) {}
