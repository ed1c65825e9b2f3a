use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::VidraError;

const DEFAULT_CONFIG: &str = include_str!("../../../config/default.toml");

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub tmdb: TmdbConfig,
    #[serde(default)]
    pub playback: PlaybackConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TmdbConfig {
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackConfig {
    #[serde(default = "default_embed_base")]
    pub embed_base: String,
    #[serde(default = "default_subtitle_lang")]
    pub subtitle_lang: String,
    #[serde(default = "default_autoplay")]
    pub autoplay: bool,
}

fn default_embed_base() -> String {
    "https://vidsrc.xyz/embed/movie".to_string()
}

fn default_subtitle_lang() -> String {
    "en".to_string()
}

fn default_autoplay() -> bool {
    true
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            embed_base: default_embed_base(),
            subtitle_lang: default_subtitle_lang(),
            autoplay: default_autoplay(),
        }
    }
}

impl AppConfig {
    /// Load config: user file (if it exists) over built-in defaults.
    pub fn load() -> Result<Self, VidraError> {
        let user_path = Self::config_path();
        if user_path.exists() {
            let user_str = std::fs::read_to_string(&user_path)
                .map_err(|e| VidraError::Config(e.to_string()))?;
            toml::from_str(&user_str).map_err(|e| VidraError::Config(e.to_string()))
        } else {
            toml::from_str(DEFAULT_CONFIG).map_err(|e| VidraError::Config(e.to_string()))
        }
    }

    /// Save current config to the user config file.
    pub fn save(&self) -> Result<(), VidraError> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| VidraError::Config(e.to_string()))?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    /// The TMDB API credential: `TMDB_API_KEY` env var wins over the config file.
    pub fn tmdb_api_key(&self) -> Option<String> {
        std::env::var("TMDB_API_KEY")
            .ok()
            .filter(|k| !k.is_empty())
            .or_else(|| self.tmdb.api_key.clone().filter(|k| !k.is_empty()))
    }

    /// Path to the user config file (XDG on Linux, AppData on Windows).
    pub fn config_path() -> PathBuf {
        Self::project_dirs()
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }

    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("", "", "vidra")
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("built-in default config is valid TOML")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_parses() {
        let config = AppConfig::default();
        assert_eq!(config.playback.embed_base, "https://vidsrc.xyz/embed/movie");
        assert_eq!(config.playback.subtitle_lang, "en");
        assert!(config.playback.autoplay);
        assert!(config.tmdb.api_key.is_none());
    }

    #[test]
    fn partial_user_config_fills_in_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [tmdb]
            api_key = "abc123"
            "#,
        )
        .unwrap();
        assert_eq!(config.tmdb.api_key.as_deref(), Some("abc123"));
        assert_eq!(config.playback.subtitle_lang, "en");
        assert!(config.playback.autoplay);
    }

    #[test]
    fn roundtrip() {
        let config = AppConfig::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let deserialized: AppConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(deserialized.playback.embed_base, config.playback.embed_base);
    }
}
