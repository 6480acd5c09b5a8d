use std::path::Path;
use std::time::Duration;

use crate::error::ConfigError;
use crate::game::COLS;

/// Longest computer "thinking" pause accepted from configuration.
pub const MAX_COMPUTER_DELAY_MS: u64 = 10_000;

/// Game setup options.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// In vs-computer games the computer opens as Red.
    pub computer_first: bool,
    /// Column the drop cursor starts on and returns to after each move.
    pub default_column: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            computer_first: false,
            default_column: 3,
        }
    }
}

/// Computer player options.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ComputerConfig {
    /// Pause before the computer drops its piece.
    pub delay_ms: u64,
    /// Fixed RNG seed; OS entropy when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for ComputerConfig {
    fn default() -> Self {
        ComputerConfig {
            delay_ms: 300,
            seed: None,
        }
    }
}

impl ComputerConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// Terminal UI options.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Input poll interval; also bounds how long a computer reply waits to
    /// be drawn.
    pub tick_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig { tick_ms: 100 }
    }
}

impl UiConfig {
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub computer: ComputerConfig,
    pub ui: UiConfig,
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
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.game.default_column >= COLS {
            return Err(ConfigError::Validation(format!(
                "game.default_column must be < {COLS}"
            )));
        }
        if self.computer.delay_ms > MAX_COMPUTER_DELAY_MS {
            return Err(ConfigError::Validation(format!(
                "computer.delay_ms must be <= {MAX_COMPUTER_DELAY_MS}"
            )));
        }
        if self.ui.tick_ms == 0 {
            return Err(ConfigError::Validation("ui.tick_ms must be > 0".into()));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
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
        assert!(!config.game.computer_first);
        assert_eq!(config.game.default_column, 3);
        assert_eq!(config.computer.seed, None);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[computer]
seed = 42
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.computer.seed, Some(42));
        // Other fields should be defaults
        assert_eq!(config.computer.delay_ms, 300);
        assert_eq!(config.ui.tick_ms, 100);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        let default = AppConfig::default();
        assert_eq!(config.game.default_column, default.game.default_column);
        assert_eq!(config.computer.delay_ms, default.computer.delay_ms);
    }

    #[test]
    fn test_validation_rejects_default_column_out_of_range() {
        let mut config = AppConfig::default();
        config.game.default_column = COLS;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_long_delay() {
        let mut config = AppConfig::default();
        config.computer.delay_ms = MAX_COMPUTER_DELAY_MS + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_tick() {
        let mut config = AppConfig::default();
        config.ui.tick_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.ui.tick_ms, 100);
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
computer_first = true
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert!(config.game.computer_first);
        // Others are defaults
        assert_eq!(config.game.default_column, 3);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[ui]\ntick_ms = 0\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_load_rejects_malformed_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[game\n").unwrap();
        assert!(matches!(AppConfig::load(&path), Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }
}
