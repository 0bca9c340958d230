//! Diagnostic logging setup.
//!
//! The TUI owns the terminal, so tracing output goes to a log file.
//! Logging is off by default; when enabled, the level comes from the
//! config (env-filter syntax, e.g. `"debug"` or `"fueldash=trace"`).

use crate::config::LoggingConfig;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Install the global tracing subscriber. Failures here are reported on
/// stderr (the terminal is not yet in raw mode) and never abort startup.
pub fn init(config: &LoggingConfig) {
    if !config.enabled {
        return;
    }

    let path = expand_home(&config.file);
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", path.display(), e);
            return;
        }
    };

    let filter = EnvFilter::try_new(&config.level).unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_home() {
        let expanded = expand_home("~/logs/app.log");
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expanded, home.join("logs/app.log"));
        }
        assert_eq!(
            expand_home("/var/log/app.log"),
            PathBuf::from("/var/log/app.log")
        );
    }
}
