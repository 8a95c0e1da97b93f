use std::path::Path;

use crate::ai::MAX_DIFFICULTY;
use crate::arena::ArenaConfig;
use crate::controller::GameConfig;
use crate::error::ConfigError;
use crate::game::COLS;
use crate::logging::LoggingConfig;
use crate::ui::UiConfig;

/// Where a loaded [`AppConfig`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    File,
    /// The file was missing; every value is a default.
    Defaults,
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
    pub arena: ArenaConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist. Runs before logging is set up, so the caller reports a
    /// fallback once it can.
    pub fn load_or_default(path: &Path) -> Result<(Self, ConfigSource), ConfigError> {
        if path.exists() {
            Ok((Self::load(path)?, ConfigSource::File))
        } else {
            Ok((Self::default(), ConfigSource::Defaults))
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(level) = self.game.difficulty {
            if !(1..=MAX_DIFFICULTY).contains(&level) {
                return Err(ConfigError::Validation(format!(
                    "game.difficulty must be in [1, {MAX_DIFFICULTY}]"
                )));
            }
        }
        if self.ui.start_column >= COLS {
            return Err(ConfigError::Validation(format!(
                "ui.start_column must be < {COLS}"
            )));
        }
        if self.ui.poll_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "ui.poll_interval_ms must be > 0".into(),
            ));
        }
        if tracing_subscriber::EnvFilter::try_new(&self.logging.level).is_err() {
            return Err(ConfigError::Validation(format!(
                "logging.level '{}' is not a valid filter",
                self.logging.level
            )));
        }
        if self.arena.games == 0 {
            return Err(ConfigError::Validation(
                "arena.games must be > 0".into(),
            ));
        }
        if !(1..=MAX_DIFFICULTY).contains(&self.arena.difficulty) {
            return Err(ConfigError::Validation(format!(
                "arena.difficulty must be in [1, {MAX_DIFFICULTY}]"
            )));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[game]
difficulty = 1
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.game.difficulty, Some(1));
        assert_eq!(config.game.seed, None);
        assert_eq!(config.ui.start_column, 3);
        assert_eq!(config.arena.games, 1_000);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        let default = AppConfig::default();
        assert_eq!(config.logging.level, default.logging.level);
        assert_eq!(config.ui.poll_interval_ms, default.ui.poll_interval_ms);
    }

    #[test]
    fn test_validation_rejects_unknown_difficulty() {
        let mut config = AppConfig::default();
        config.game.difficulty = Some(3);
        assert!(config.validate().is_err());
        config.game.difficulty = Some(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_start_column_off_board() {
        let mut config = AppConfig::default();
        config.ui.start_column = COLS;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_poll_interval() {
        let mut config = AppConfig::default();
        config.ui.poll_interval_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_bad_log_level() {
        let mut config = AppConfig::default();
        config.logging.level = "connect_four=loud".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_arena_games() {
        let mut config = AppConfig::default();
        config.arena.games = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let (config, source) =
            AppConfig::load_or_default(&dir.path().join("missing.toml")).unwrap();
        assert_eq!(source, ConfigSource::Defaults);
        assert_eq!(config.arena.games, 1_000);
    }

    #[test]
    fn test_load_or_default_reads_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("present.toml");
        std::fs::write(&path, "[arena]\ngames = 7\n").unwrap();
        let (config, source) = AppConfig::load_or_default(&path).unwrap();
        assert_eq!(source, ConfigSource::File);
        assert_eq!(config.arena.games, 7);
    }

    #[test]
    fn test_load_or_default_propagates_bad_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[arena\n").unwrap();
        assert!(matches!(
            AppConfig::load_or_default(&path),
            Err(ConfigError::TomlParse(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[game]
seed = 42

[arena]
games = 50
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.game.seed, Some(42));
        assert_eq!(config.arena.games, 50);
        // Others are defaults
        assert_eq!(config.arena.difficulty, 2);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[ui]\nstart_column = 9\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml().unwrap();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }
}
