use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::theme::Theme;

/// Appearance applied to a shape when it is drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub stroke_color: Color32,
    pub stroke_width: f32,
    pub fill_color: Option<Color32>,
    pub corner_radius: f32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            stroke_color: Theme::default().foreground(),
            stroke_width: 1.0,
            fill_color: None,
            corner_radius: 0.0,
        }
    }
}

impl Style {
    /// Corner rounding for rectangles, `None` when square
    pub fn rounding(&self) -> Option<f32> {
        (self.corner_radius > 0.0).then_some(self.corner_radius)
    }
}

/// A fixed, ordered list of options with a cursor that wraps around
#[derive(Debug, Clone, PartialEq)]
pub struct OptionCycle<T> {
    options: Vec<T>,
    index: usize,
}

impl<T> OptionCycle<T> {
    /// `options` must not be empty. An out-of-range start index falls back to
    /// the first option.
    pub fn new(options: Vec<T>, index: usize) -> Self {
        debug_assert!(!options.is_empty());
        let index = if index < options.len() { index } else { 0 };
        Self { options, index }
    }

    pub fn current(&self) -> &T {
        &self.options[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Step to the next option, wrapping to the first
    pub fn advance(&mut self) -> &T {
        self.index = (self.index + 1) % self.options.len();
        self.current()
    }
}

const PALETTE: [&str; 13] = [
    "black",
    "red",
    "green",
    "blue",
    "yellow",
    "magenta",
    "cyan",
    "bright_red",
    "bright_green",
    "bright_yellow",
    "bright_blue",
    "bright_magenta",
    "bright_cyan",
];

const STROKE_WIDTHS: [f32; 5] = [0.5, 1.0, 2.0, 3.5, 5.0];
const CORNER_RADII: [f32; 6] = [0.0, 0.1, 0.3, 0.5, 1.0, 1.5];

/// Positions in the fixed option lists. This is all that gets persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleIndices {
    pub stroke_color: usize,
    pub stroke_width: usize,
    pub fill_color: usize,
    pub corner_radius: usize,
}

impl Default for StyleIndices {
    fn default() -> Self {
        Self {
            stroke_color: 0,
            stroke_width: 1,
            fill_color: 0,
            corner_radius: 0,
        }
    }
}

/// The user's style choices, kept as positions in fixed option lists.
///
/// Color options are symbolic names resolved against the active theme.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleSettings {
    pub stroke_color: OptionCycle<String>,
    pub stroke_width: OptionCycle<f32>,
    pub fill_color: OptionCycle<Option<String>>,
    pub corner_radius: OptionCycle<f32>,
}

impl Default for StyleSettings {
    fn default() -> Self {
        Self::from_indices(StyleIndices::default())
    }
}

impl StyleSettings {
    /// Rebuild the option lists around restored positions
    pub fn from_indices(indices: StyleIndices) -> Self {
        let names = || PALETTE.iter().map(|name| name.to_string());
        Self {
            stroke_color: OptionCycle::new(names().collect(), indices.stroke_color),
            stroke_width: OptionCycle::new(STROKE_WIDTHS.to_vec(), indices.stroke_width),
            fill_color: OptionCycle::new(
                std::iter::once(None).chain(names().map(Some)).collect(),
                indices.fill_color,
            ),
            corner_radius: OptionCycle::new(CORNER_RADII.to_vec(), indices.corner_radius),
        }
    }

    pub fn indices(&self) -> StyleIndices {
        StyleIndices {
            stroke_color: self.stroke_color.index(),
            stroke_width: self.stroke_width.index(),
            fill_color: self.fill_color.index(),
            corner_radius: self.corner_radius.index(),
        }
    }

    /// Resolve the current choices into a concrete style.
    ///
    /// Names the theme does not know fall back to the foreground color (stroke)
    /// or no fill.
    pub fn resolve(&self, theme: &Theme) -> Style {
        let stroke_color = theme
            .resolve(self.stroke_color.current())
            .unwrap_or_else(|err| {
                log::warn!("{}; using foreground", err);
                theme.foreground()
            });
        let fill_color = self.fill_color.current().as_deref().and_then(|name| {
            theme
                .resolve(name)
                .map_err(|err| log::warn!("{}; drawing without fill", err))
                .ok()
        });
        Style {
            stroke_color,
            stroke_width: (*self.stroke_width.current()).max(0.0),
            fill_color,
            corner_radius: (*self.corner_radius.current()).max(0.0),
        }
    }

    pub fn stroke_color_label(&self) -> String {
        format!("Stroke color: {}", self.stroke_color.current())
    }

    pub fn stroke_width_label(&self) -> String {
        format!("Stroke width: {:.1}", self.stroke_width.current())
    }

    pub fn fill_color_label(&self) -> String {
        match self.fill_color.current() {
            Some(name) => format!("Fill: {}", name),
            None => "Fill: none".to_string(),
        }
    }

    pub fn corner_radius_label(&self) -> String {
        format!("Corner radius: {:.2}", self.corner_radius.current())
    }
}
