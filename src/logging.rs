use std::fs::{File, OpenOptions};
use std::path::Path;

use tracing::warn;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Initialize tracing with the specified verbosity level
///
/// `RUST_LOG` takes precedence over `verbose` (0=warn, 1=info, 2=debug, 3+=trace).
/// Logs go to stderr, or as JSON lines to `log_file` when given; keep the
/// returned guard alive until exit so buffered file output is flushed.
/// A log file that cannot be opened falls back to stderr.
pub fn init_logging(verbose: u8, log_file: Option<&Path>) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let opened = log_file.map(|path| (path, open_log_file(path)));

    match opened {
        Some((_, Ok(file))) => {
            let (writer, guard) = tracing_appender::non_blocking(file);

            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().json().with_writer(writer))
                .init();

            Some(guard)
        }
        fallback => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .without_time()
                        .with_target(false),
                )
                .init();

            if let Some((path, Err(e))) = fallback {
                warn!("Cannot open log file {:?}, logging to stderr: {}", path, e);
            }

            None
        }
    }
}

/// Open `path` for appending, creating missing parent directories
fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    OpenOptions::new().create(true).append(true).open(path)
}

fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "check_eol=warn",
        1 => "check_eol=info",
        2 => "check_eol=debug",
        _ => "check_eol=trace",
    }
}
