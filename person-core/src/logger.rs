//! Tracing initialization: the fmt layer writes the full format (level, target, span, fields)
//! to stderr, and additionally to a log file when one is configured. Stdout stays reserved for
//! command output.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::{
    fmt::format::FmtSpan, fmt::writer::MakeWriterExt, layer::SubscriberExt,
    util::SubscriberInitExt, EnvFilter, Registry,
};

use crate::error::{CoreError, Result};

/// Installs the global tracing subscriber.
///
/// Level comes from `RUST_LOG` (default `info`). When `log_file_path` is set the same output is
/// teed to stderr and the file; missing parent directories are created. Load `.env` before
/// calling this, otherwise `RUST_LOG` from the file is not seen.
pub fn init_tracing(log_file_path: Option<&str>) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = Registry::default().with(env_filter);

    let installed = match log_file_path {
        Some(path) => {
            let file = Arc::new(open_log_file(path)?);
            let fmt_layer = tracing_subscriber::fmt::layer()
                .with_writer(io::stderr.and(file))
                .with_span_events(FmtSpan::CLOSE)
                .with_target(true)
                .with_thread_ids(true)
                .with_level(true)
                .with_file(false)
                .with_line_number(false);
            registry.with(fmt_layer).try_init()
        }
        None => {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_span_events(FmtSpan::CLOSE)
                .with_target(true)
                .with_level(true);
            registry.with(fmt_layer).try_init()
        }
    };

    installed.map_err(|e| CoreError::Config(format!("Failed to set global subscriber: {}", e)))
}

fn open_log_file(path: &str) -> Result<std::fs::File> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_log_file_creates_parent_dirs() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("logs").join("people.log");

        open_log_file(path.to_str().expect("utf-8 path")).expect("Failed to open log file");

        assert!(path.exists());
    }
}
