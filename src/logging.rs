// SPDX-License-Identifier: MIT
//! Tracing subscriber setup for shell hosts.
//!
//! Library code only emits `tracing` events; installing a subscriber is the
//! host's call, made once at startup before anything else runs.

use crate::config::LogConfig;

/// Install the global tracing subscriber from a [`LogConfig`].
///
/// With `log.file` set, events go to stdout and to a daily-rolling file
/// through a non-blocking writer; the returned guard must be held for the
/// process lifetime or buffered events are lost on exit. If the log
/// directory cannot be created, falls back to stdout-only with a warning —
/// never panics.
pub fn init(config: &LogConfig) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let use_json = config.format == "json";

    if let Some(path) = &config.file {
        let dir = path.parent().unwrap_or_else(|| std::path::Path::new("."));
        let filename = path
            .file_name()
            .unwrap_or_else(|| std::ffi::OsStr::new("aviary.log"));

        // Ensure the directory exists before tracing-appender tries to open it.
        if let Err(e) = std::fs::create_dir_all(dir) {
            eprintln!(
                "warn: could not create log directory '{}': {e} — falling back to stdout",
                dir.display()
            );
            init_stdout(&config.level, use_json);
            return None;
        }

        let appender = tracing_appender::rolling::daily(dir, filename);
        let (non_blocking, guard) = tracing_appender::non_blocking(appender);

        if use_json {
            tracing_subscriber::registry()
                .with(EnvFilter::new(&config.level))
                .with(fmt::layer().json())
                .with(fmt::layer().json().with_writer(non_blocking))
                .init();
        } else {
            tracing_subscriber::registry()
                .with(EnvFilter::new(&config.level))
                .with(fmt::layer().compact())
                .with(fmt::layer().with_writer(non_blocking))
                .init();
        }

        Some(guard)
    } else {
        init_stdout(&config.level, use_json);
        None
    }
}

fn init_stdout(level: &str, use_json: bool) {
    if use_json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(level)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(level)
            .compact()
            .init();
    }
}
