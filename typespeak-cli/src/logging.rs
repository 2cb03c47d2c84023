//! Log file setup
//!
//! In interactive mode the terminal belongs to the typing display, so log
//! records always go to a file.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

/// Resolved logging settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// Log file path
    pub file: PathBuf,
    /// Default filter when `RUST_LOG` is unset
    pub level: String,
    /// Disable logging entirely
    pub quiet: bool,
}

impl LogSettings {
    /// Combine the configured level with the `-v` count
    pub fn new(file: PathBuf, configured_level: &str, verbose: u8, quiet: bool) -> Self {
        let level = match verbose {
            0 => configured_level,
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        Self {
            file,
            level: level.to_string(),
            quiet,
        }
    }
}

/// Initialize `env_logger` writing to the configured file
pub fn init(settings: &LogSettings) -> Result<()> {
    if settings.quiet {
        log::set_max_level(log::LevelFilter::Off);
        return Ok(());
    }

    let file = open_log_file(&settings.file)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&settings.level))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .context("Failed to initialize logger")?;

    Ok(())
}

fn open_log_file(path: &Path) -> Result<std::fs::File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_verbosity_overrides_configured_level() {
        let file = PathBuf::from("x.log");
        assert_eq!(LogSettings::new(file.clone(), "warn", 0, false).level, "warn");
        assert_eq!(LogSettings::new(file.clone(), "warn", 1, false).level, "info");
        assert_eq!(LogSettings::new(file.clone(), "warn", 2, false).level, "debug");
        assert_eq!(LogSettings::new(file, "warn", 7, false).level, "trace");
    }

    #[test]
    fn test_open_log_file_appends() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("typespeak.log");
        std::fs::write(&path, "earlier\n").unwrap();

        open_log_file(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "earlier\n");
    }

    #[test]
    fn test_open_log_file_in_missing_directory() {
        let err = open_log_file(Path::new("/nonexistent/dir/typespeak.log")).unwrap_err();
        assert!(err.to_string().contains("Failed to open log file"));
    }
}
