use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::surface::CanvasParams;
use crate::theme::{DEFAULT_THEME, Theme};

/// Environment variable naming a JSON config file
pub const CONFIG_ENV: &str = "SKETCH_CONFIG";
/// Environment variable overriding the theme name
pub const THEME_ENV: &str = "SKETCH_THEME";

/// Startup configuration. Every field has a default, so a config file only
/// needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub title: String,
    pub canvas: CanvasParams,
    pub theme: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "eframe sketch".to_string(),
            canvas: CanvasParams::default(),
            theme: DEFAULT_THEME.to_string(),
        }
    }
}

impl AppConfig {
    /// Load from `SKETCH_CONFIG` if set, then apply `SKETCH_THEME`
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var_os(CONFIG_ENV);
        let theme = std::env::var(THEME_ENV).ok();
        Self::load_from(path.as_deref().map(Path::new), theme)
    }

    pub fn load_from(path: Option<&Path>, theme_override: Option<String>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => {
                log::info!("reading config from {}", path.display());
                Self::from_json(&std::fs::read_to_string(path)?)?
            }
            None => Self::default(),
        };
        if let Some(theme) = theme_override {
            match Theme::find(&theme) {
                Ok(_) => config.theme = theme,
                Err(err) => log::warn!("{} in {}; keeping theme {}", err, THEME_ENV, config.theme),
            }
        }
        config.validate()?;
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        Theme::find(&self.theme)?;
        let proj = &self.canvas.projection;
        if !(proj.left < proj.right && proj.bottom < proj.top) {
            return Err(ConfigError::InvalidCanvas(format!(
                "projection must satisfy left < right and bottom < top, got {:?}",
                proj
            )));
        }
        let [width, height] = self.canvas.display_size;
        if width < 0.0 || height < 0.0 {
            return Err(ConfigError::InvalidCanvas(format!(
                "display size must not be negative, got {}x{}",
                width, height
            )));
        }
        Ok(())
    }

    pub fn theme(&self) -> Result<Theme, ConfigError> {
        Ok(Theme::find(&self.theme)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = AppConfig::from_json(r#"{ "theme": "xterm-dark" }"#).unwrap();
        assert_eq!(config.theme, "xterm-dark");
        assert_eq!(config.canvas, CanvasParams::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_theme_override() {
        let config = AppConfig::load_from(None, Some("catppuccin-dark".to_string())).unwrap();
        assert_eq!(config.theme().unwrap().name(), "catppuccin-dark");
    }

    #[test]
    fn test_unknown_theme_override_keeps_file_config() {
        let path = std::env::temp_dir().join(format!("sketch-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "title": "from file", "theme": "catppuccin" }"#).unwrap();
        let config = AppConfig::load_from(Some(&path), Some("neon".to_string()));
        std::fs::remove_file(&path).unwrap();

        let config = config.unwrap();
        assert_eq!(config.title, "from file");
        assert_eq!(config.theme, "catppuccin");
    }

    #[test]
    fn test_rejects_unknown_theme_in_file() {
        let config = AppConfig::from_json(r#"{ "theme": "neon" }"#).unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::Theme(_))));
    }

    #[test]
    fn test_rejects_inverted_projection() {
        let config = AppConfig::from_json(
            r#"{ "canvas": { "projection": { "left": 5, "right": -5, "bottom": -5, "top": 5 } } }"#,
        )
        .unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::InvalidCanvas(_))));
    }

    #[test]
    fn test_bad_json() {
        assert!(matches!(
            AppConfig::from_json("{ not json"),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = AppConfig::load_from(Some(Path::new("/nonexistent/sketch.json")), None).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError(_)));
    }
}
