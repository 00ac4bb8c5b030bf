//! Tracing subscriber setup. Logs go to stderr so stdout only carries command output.

use std::{env, sync::OnceLock};

use tracing_appender::{
    non_blocking,
    non_blocking::NonBlocking,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{
    EnvFilter,
    fmt::{fmt, time::ChronoLocal, writer::MakeWriterExt},
};

/// Guard to ensure buffered logs are flushed on shutdown.
static LOG_GUARD: OnceLock<non_blocking::WorkerGuard> = OnceLock::new();

/// Logging related variables: `RUST_LOG`, `LOG_DIR` and `LOG_MAX_FILES`.
#[derive(Debug, Default, PartialEq)]
pub struct LogSettings {
    pub filter: Option<String>,
    pub dir: Option<String>,
    pub max_files: Option<usize>,
}

impl LogSettings {
    /// Read the process environment. Load `.env` first for its values to count.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            filter: lookup(EnvFilter::DEFAULT_ENV),
            dir: lookup("LOG_DIR"),
            max_files: lookup("LOG_MAX_FILES").and_then(|v| v.parse().ok()),
        }
    }
}

pub fn init(settings: LogSettings) {
    let env_filter = settings
        .filter
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("info"));

    let builder = fmt()
        .with_env_filter(env_filter)
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_target(false)
        .with_ansi(true)
        .with_level(true);

    let file_writer = settings
        .dir
        .and_then(|dir| init_file_writer(dir, settings.max_files));

    match file_writer {
        Some(file_writer) => {
            let stderr = std::io::stderr.with_max_level(tracing::Level::INFO);
            builder
                .with_ansi(false)
                .with_writer(stderr.and(file_writer))
                .init();
        }
        None => builder.with_writer(std::io::stderr).init(),
    }

    tracing::debug!("logger initialized");
}

fn init_file_writer(dir: String, max_files: Option<usize>) -> Option<NonBlocking> {
    let mut file_builder = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("champion-codex.log");

    if let Some(n) = max_files {
        file_builder = file_builder.max_log_files(n);
    }

    let file_appender = match file_builder.build(&dir) {
        Ok(appender) => appender,
        Err(e) => {
            eprintln!("cannot write logs to {}: {}", dir, e);
            return None;
        }
    };

    let (file_writer, guard) = non_blocking(file_appender);
    let _ = LOG_GUARD.set(guard);

    Some(file_writer)
}
