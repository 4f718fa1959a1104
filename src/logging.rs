//! Structured logging setup.
//!
//! Two sinks, both fed by the same `tracing` events: a compact console
//! renderer, and an optional JSON file that rotates daily. The file sink is
//! enabled when `LOG_FILE` is configured; writes go through a non-blocking
//! worker whose guard must be held for the life of the process.

use std::io;
use std::path::Path;

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::Config;

/// Install the global subscriber.
///
/// `RUST_LOG` overrides the configured level for the console sink; the file
/// sink always uses the configured level. Returns the appender guard when
/// file logging is active; dropping it stops the background writer, so
/// `main` keeps it alive.
pub fn init(config: &Config) -> io::Result<Option<WorkerGuard>> {
    let console_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let console_layer = fmt::layer()
        .with_target(false)
        .compact()
        .with_filter(console_filter);

    match &config.log_file {
        Some(path) => {
            let (writer, guard) = file_writer(path)?;
            let file_layer = fmt::layer()
                .json()
                .with_ansi(false)
                .with_writer(writer)
                .with_filter(EnvFilter::new(&config.log_level));

            tracing_subscriber::registry()
                .with(console_layer)
                .with(file_layer)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::registry().with(console_layer).init();
            Ok(None)
        }
    }
}

/// Build a non-blocking daily-rolling writer for `path`, creating the parent
/// directory if needed.
fn file_writer(path: &Path) -> io::Result<(NonBlocking, WorkerGuard)> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let file_name = path.file_name().unwrap_or_else(|| "docgate.log".as_ref());
    let appender = rolling::daily(dir, file_name);
    Ok(tracing_appender::non_blocking(appender))
}
