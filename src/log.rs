// src/log.rs
use std::fs::{self, File, OpenOptions};
use std::io;
use std::sync::Mutex;

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::consts::{LOG_FILE, STORE_DIR};

/// Where log lines go.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogTarget {
    /// Terminal front end.
    Stderr,
    /// Desktop viewer: append to `.store/debug.log`.
    File,
}

/// Install the global subscriber. `RUST_LOG` wins over `default_level`.
/// Later calls are no-ops (the first subscriber stays installed).
pub fn init(target: LogTarget, default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("planet_facts={default_level}")));

    let builder = fmt().with_env_filter(filter);

    let _ = match target {
        LogTarget::Stderr => builder
            .with_writer(io::stderr)
            .with_target(false)
            .try_init(),
        LogTarget::File => match open_log_file() {
            Ok(file) => builder
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init(),
            // No writable store dir: run silent rather than refuse to start
            Err(_) => builder.with_writer(io::sink).try_init(),
        },
    };
}

fn open_log_file() -> io::Result<File> {
    fs::create_dir_all(STORE_DIR)?;
    OpenOptions::new().create(true).append(true).open(LOG_FILE)
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::tracing::debug!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::tracing::error!($($arg)*)
    };
}
