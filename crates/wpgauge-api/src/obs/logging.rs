//! Tracing subscriber setup.
//!
//! `RUST_LOG` controls the filter (default `info`). With `log.file` set,
//! lines are appended to that file without ANSI colors.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{fmt, EnvFilter};

use wpgauge_core::error::{GaugeError, Result};

use crate::config::LogSection;

pub fn init(cfg: &LogSection) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let res = match &cfg.file {
        Some(path) => {
            if let Some(dir) = Path::new(path).parent().filter(|d| !d.as_os_str().is_empty()) {
                fs::create_dir_all(dir)
                    .map_err(|e| GaugeError::Config(format!("create log dir {}: {e}", dir.display())))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| GaugeError::Config(format!("open log file {path}: {e}")))?;
            fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => fmt().with_env_filter(filter).try_init(),
    };

    res.map_err(|e| GaugeError::Config(format!("install tracing subscriber: {e}")))
}
