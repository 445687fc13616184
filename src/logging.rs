//! `env_logger` setup for the terminal binary.
//!
//! The game owns the terminal, so log lines never go to stderr: they are written to a file
//! when one is configured and dropped otherwise.

use std::fs::{self, OpenOptions};
use std::path::Path;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

/// Filter applied when `RUST_LOG` is not set and a log file is configured.
pub const DEFAULT_FILE_FILTER: &str = "info";

/// Install the global logger.
///
/// Without a log file the default filter is `off`; an explicit `RUST_LOG` is still honoured
/// but its output is discarded because there is nowhere safe to write it.
pub fn init(log_path: Option<&Path>) -> Result<()> {
    let mut builder = match log_path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating log directory {}", parent.display()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("opening log file {}", path.display()))?;
            let mut builder = Builder::from_env(Env::default().default_filter_or(DEFAULT_FILE_FILTER));
            builder.target(Target::Pipe(Box::new(file)));
            builder
        }
        None => {
            let mut builder = Builder::from_env(Env::default().default_filter_or("off"));
            builder.target(Target::Pipe(Box::new(std::io::sink())));
            builder
        }
    };

    builder
        .format_timestamp_millis()
        .try_init()
        .context("installing logger")?;
    Ok(())
}
