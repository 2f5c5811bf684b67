use serde::{Deserialize, Serialize};
use slides_plus_engine::{DeckConfig, Transition};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read settings file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse settings file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// User-level defaults. Every key may be left out of the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlidesSettings {
    pub default_theme: String,
    pub default_transition: Transition,
    pub default_aspect_ratio: String,
    pub show_slide_numbers: bool,
    /// Folder scanned for decks when no file is given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decks_path: Option<PathBuf>,
}

impl Default for SlidesSettings {
    fn default() -> Self {
        Self {
            default_theme: "default".to_string(),
            default_transition: Transition::Slide,
            default_aspect_ratio: "16/9".to_string(),
            show_slide_numbers: true,
            decks_path: None,
        }
    }
}

impl SlidesSettings {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut settings: SlidesSettings =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        settings.decks_path = settings
            .decks_path
            .map(|path| Self::expand_path(&path).unwrap_or(path));

        Ok(Some(settings))
    }

    /// Settings from the default location, or the defaults if there is no file.
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Self::load_from_path(Self::config_path())?.unwrap_or_default())
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to_path(Self::config_path())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/slides-plus");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// The deck baseline these settings imply: global frontmatter still wins.
    pub fn deck_baseline(&self) -> DeckConfig {
        DeckConfig {
            theme: self.default_theme.clone(),
            transition: self.default_transition,
            aspect_ratio: self.default_aspect_ratio.clone(),
            ..DeckConfig::default()
        }
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        shellexpand::full(&path_str)
            .ok()
            .map(|expanded| PathBuf::from(expanded.as_ref()))
    }
}
