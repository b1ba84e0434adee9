#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod config;
pub mod draft;
pub mod error;
pub mod geometry;
pub mod history;
pub mod input;
pub mod menu;
pub mod painter;
pub mod priority;
pub mod renderer;
pub mod style;
pub mod surface;
pub mod theme;

pub use app::SketchApp;
pub use config::AppConfig;
pub use draft::{Draft, DraftCommit, DraftKey, ShapeDraft};
pub use error::{ConfigError, SurfaceError, ThemeError};
pub use geometry::{ShapeGeometry, ShapeKind, WorldRect};
pub use history::ShapeHistory;
pub use input::{InputEvent, InputHandler};
pub use menu::{MenuAction, MenuKind, MenuState};
pub use painter::{Painter, PainterKey};
pub use renderer::Renderer;
pub use style::{Style, StyleIndices, StyleSettings};
pub use surface::{CanvasParams, Drawable, DrawableId, RenderSurface};
pub use theme::Theme;
