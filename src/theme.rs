use egui::Color32;

use crate::error::ThemeError;

/// Symbolic names of the 16 palette slots, in slot order
const COLOR_NAMES: [&str; 16] = [
    "white",
    "red",
    "green",
    "yellow",
    "blue",
    "magenta",
    "cyan",
    "black",
    "bright_black",
    "bright_red",
    "bright_green",
    "bright_yellow",
    "bright_blue",
    "bright_magenta",
    "bright_cyan",
    "bright_white",
];

const XTERM_DARK: [u32; 16] = [
    0x000000, 0xAA0000, 0x00AA00, 0xAA5500, 0x0000AA, 0xAA00AA, 0x00AAAA, 0xAAAAAA, 0x555555,
    0xFF5555, 0x55FF55, 0xFFFF55, 0x5555FF, 0xFF55FF, 0x55FFFF, 0xFFFFFF,
];

const CATPPUCCIN: [u32; 16] = [
    0xcad3f5, 0xed8796, 0xa6da95, 0xeed49f, 0x8aadf4, 0xc6a0f6, 0x8bd5ca, 0x1e1e2e, 0x363a4f,
    0xf38ba8, 0xa6e3a1, 0xf9e2af, 0x89bffa, 0xcba6f7, 0x94e2d5, 0xeff1f5,
];

const CATPPUCCIN_DARK: [u32; 16] = [
    0x1e1e2e, 0xed8796, 0xa6da95, 0xeed49f, 0x8aadf4, 0xc6a0f6, 0x8bd5ca, 0xcad3f5, 0x24273a,
    0xf38ba8, 0xa6e3a1, 0xf9e2af, 0x89bffa, 0xcba6f7, 0x94e2d5, 0xeff1f5,
];

pub const DEFAULT_THEME: &str = "catppuccin";

/// A named 16-color palette used to resolve symbolic color names
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    name: &'static str,
    palette: [u32; 16],
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: DEFAULT_THEME,
            palette: CATPPUCCIN,
        }
    }
}

impl Theme {
    /// Look up a built-in theme by name
    pub fn find(name: &str) -> Result<Self, ThemeError> {
        let (name, palette) = match name {
            "xterm-dark" => ("xterm-dark", XTERM_DARK),
            "catppuccin" => ("catppuccin", CATPPUCCIN),
            "catppuccin-dark" => ("catppuccin-dark", CATPPUCCIN_DARK),
            _ => return Err(ThemeError::UnknownTheme(name.to_string())),
        };
        Ok(Self { name, palette })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Resolve a symbolic color name against this palette.
    ///
    /// `foreground` and `background` alias `black` and `white`. Matching is
    /// case-insensitive.
    pub fn resolve(&self, color_name: &str) -> Result<Color32, ThemeError> {
        let lowered = color_name.to_ascii_lowercase();
        let name = match lowered.as_str() {
            "foreground" => "black",
            "background" => "white",
            other => other,
        };
        COLOR_NAMES
            .iter()
            .position(|candidate| *candidate == name)
            .map(|slot| hex_color(self.palette[slot]))
            .ok_or_else(|| ThemeError::UnknownColor(color_name.to_string()))
    }

    pub fn foreground(&self) -> Color32 {
        hex_color(self.palette[7])
    }

    pub fn background(&self) -> Color32 {
        hex_color(self.palette[0])
    }

    /// Color used for live previews while drafting
    pub fn preview_color(&self) -> Color32 {
        mix(self.foreground(), self.background(), 0.8)
    }
}

pub fn hex_color(hex: u32) -> Color32 {
    Color32::from_rgb(
        ((hex >> 16) & 0xFF) as u8,
        ((hex >> 8) & 0xFF) as u8,
        (hex & 0xFF) as u8,
    )
}

/// Linear blend from `a` to `b`; `t` is clamped to `[0, 1]`
pub fn mix(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let channel = |x: u8, y: u8| (x as f32 * (1.0 - t) + y as f32 * t).round() as u8;
    Color32::from_rgba_unmultiplied(
        channel(a.r(), b.r()),
        channel(a.g(), b.g()),
        channel(a.b(), b.b()),
        channel(a.a(), b.a()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_aliases() {
        let theme = Theme::find("xterm-dark").unwrap();
        assert_eq!(theme.resolve("foreground").unwrap(), theme.resolve("black").unwrap());
        assert_eq!(theme.resolve("background").unwrap(), Color32::from_rgb(0, 0, 0));
        assert_eq!(theme.resolve("Bright_Red").unwrap(), Color32::from_rgb(0xFF, 0x55, 0x55));
    }

    #[test]
    fn test_unknown_names() {
        assert!(matches!(Theme::find("solarized"), Err(ThemeError::UnknownTheme(_))));
        let theme = Theme::default();
        assert!(matches!(theme.resolve("orange"), Err(ThemeError::UnknownColor(_))));
    }

    #[test]
    fn test_mix_clamps() {
        let a = Color32::from_rgb(0, 0, 0);
        let b = Color32::from_rgb(200, 100, 50);
        assert_eq!(mix(a, b, 0.5), Color32::from_rgb(100, 50, 25));
        assert_eq!(mix(a, b, 2.0), b);
        assert_eq!(mix(a, b, -1.0), a);
    }
}
