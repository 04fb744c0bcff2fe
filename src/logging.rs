//! Logging initialization
//!
//! Builds the tracing subscriber from the loaded configuration. The TUI
//! draws on the terminal, so its logs must never reach it: in TUI mode the
//! writer is the configured file or a sink, never stderr.

use std::io::Write;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Where log output may go when no file is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// CLI mode: stderr is free for diagnostics.
    Stderr,
    /// TUI mode: the terminal belongs to the alternate screen, discard.
    Terminal,
}

/// Initialize the global subscriber. Call once at startup, after config is
/// loaded; the returned guard must live until the process exits so buffered
/// writes are flushed.
pub fn init_logging(config: &LoggingConfig, target: LogTarget) -> WorkerGuard {
    let (writer, ansi): (Box<dyn Write + Send + Sync>, bool) = match (&config.file, target) {
        (Some(path), _) if !path.is_empty() => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path);
            match file {
                Ok(file) => (Box::new(file), false),
                Err(e) => match target {
                    LogTarget::Stderr => {
                        eprintln!("Failed to open log file {}: {}, logging to stderr", path, e);
                        (Box::new(std::io::stderr()), true)
                    }
                    LogTarget::Terminal => (Box::new(std::io::sink()), false),
                },
            }
        }
        (_, LogTarget::Stderr) => (Box::new(std::io::stderr()), true),
        (_, LogTarget::Terminal) => (Box::new(std::io::sink()), false),
    };

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);
    let filter = EnvFilter::new(config.level.clone());

    let subscriber_builder = tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(ansi);

    if config.format == "json" {
        subscriber_builder.json().init();
    } else {
        subscriber_builder.init();
    }

    guard
}
