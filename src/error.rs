use thiserror::Error;

use crate::surface::DrawableId;

/// Errors raised by the render surface for stale or foreign handles
#[derive(Debug, Error, PartialEq)]
pub enum SurfaceError {
    #[error("Drawable {0:?} is not registered on this surface")]
    UnknownDrawable(DrawableId),
}

/// Errors raised while resolving theme or color names
#[derive(Debug, Error, PartialEq)]
pub enum ThemeError {
    #[error("Unknown theme name: {0}")]
    UnknownTheme(String),

    #[error("Unknown color name: {0}")]
    UnknownColor(String),
}

/// Errors that can occur while loading the application config
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Theme(#[from] ThemeError),

    #[error("Invalid canvas parameters: {0}")]
    InvalidCanvas(String),
}
