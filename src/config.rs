//! Runtime configuration read from environment variables.

use std::path::PathBuf;

/// Binary configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Fixed RNG seed; `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Where the best score is kept. `None` keeps it in memory only.
    pub best_path: Option<PathBuf>,
    pub log_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: None,
            best_path: Some(default_best_path(None)),
            log_path: None,
        }
    }
}

impl AppConfig {
    /// Create from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary variable lookup.
    ///
    /// Unparseable values fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };

        let seed = non_empty("TUI2048_SEED").and_then(|s| s.parse().ok());

        let no_persist = non_empty("TUI2048_NO_PERSIST")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let best_path = if no_persist {
            None
        } else {
            Some(
                non_empty("TUI2048_BEST_PATH")
                    .map(PathBuf::from)
                    .unwrap_or_else(|| default_best_path(non_empty("HOME"))),
            )
        };

        let log_path = non_empty("TUI2048_LOG_PATH").map(PathBuf::from);

        Self {
            seed,
            best_path,
            log_path,
        }
    }
}

fn default_best_path(home: Option<String>) -> PathBuf {
    match home {
        Some(home) => PathBuf::from(home).join(".tui-2048").join("best.json"),
        None => PathBuf::from(".tui-2048-best.json"),
    }
}
