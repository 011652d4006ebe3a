use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_DATABASE: &str = "kanban.db";
pub const DEFAULT_TICK_RATE_MS: u64 = 250;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Database used when none is given on the command line.
    #[serde(default)]
    pub database: Option<PathBuf>,

    #[serde(default)]
    pub tick_rate_ms: Option<u64>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/kanban/config.toml"))
        }
        #[cfg(not(target_os = "macos"))]
        {
            dirs::config_dir().map(|config| config.join("kanban").join("config.toml"))
        }
    }

    /// Loads the user config, falling back to defaults when the file is
    /// missing or unreadable.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("Could not read config {}: {}", path.display(), e);
                return Self::default();
            }
        };
        match toml::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring malformed config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// The command-line value wins over the config file.
    pub fn effective_database(&self, cli_value: Option<&Path>) -> PathBuf {
        cli_value
            .map(Path::to_path_buf)
            .or_else(|| self.database.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE))
    }

    pub fn effective_tick_rate_ms(&self) -> u64 {
        self.tick_rate_ms
            .filter(|ms| *ms > 0)
            .unwrap_or(DEFAULT_TICK_RATE_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("absent.toml"));
        assert!(config.database.is_none());
        assert_eq!(config.effective_tick_rate_ms(), DEFAULT_TICK_RATE_MS);
    }

    #[test]
    fn test_reads_database_and_tick_rate() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "database = \"/tmp/board.db\"\ntick_rate_ms = 100\n").unwrap();

        let config = AppConfig::load_from(&path);
        assert_eq!(config.database, Some(PathBuf::from("/tmp/board.db")));
        assert_eq!(config.effective_tick_rate_ms(), 100);
    }

    #[test]
    fn test_malformed_file_falls_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "database = [").unwrap();

        let config = AppConfig::load_from(&path);
        assert!(config.database.is_none());
    }

    #[test]
    fn test_database_precedence() {
        let config = AppConfig {
            database: Some(PathBuf::from("from-config.db")),
            tick_rate_ms: None,
        };
        assert_eq!(
            config.effective_database(Some(Path::new("from-cli.db"))),
            PathBuf::from("from-cli.db")
        );
        assert_eq!(
            config.effective_database(None),
            PathBuf::from("from-config.db")
        );
        assert_eq!(
            AppConfig::default().effective_database(None),
            PathBuf::from(DEFAULT_DATABASE)
        );
    }

    #[test]
    fn test_zero_tick_rate_is_ignored() {
        let config = AppConfig {
            database: None,
            tick_rate_ms: Some(0),
        };
        assert_eq!(config.effective_tick_rate_ms(), DEFAULT_TICK_RATE_MS);
    }
}
