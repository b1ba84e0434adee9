use crate::config::AppConfig;
use crate::input::InputHandler;
use crate::painter::Painter;
use crate::renderer::{Renderer, fit_canvas};
use crate::style::{StyleIndices, StyleSettings};
use crate::surface::RenderSurface;
use crate::theme::Theme;

/// Storage key for the persisted style choices. Drawings are never persisted.
pub const SETTINGS_KEY: &str = "style_indices";

const HINT: &str = "Space: menu  Enter: finish  Backspace: undo  Esc: cancel  1-5: shape";

pub struct SketchApp {
    painter: Painter,
    input: InputHandler,
    renderer: Renderer,
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let indices = cc
            .storage
            .and_then(|storage| eframe::get_value::<StyleIndices>(storage, SETTINGS_KEY))
            .unwrap_or_default();
        Self::with_settings(config, StyleSettings::from_indices(indices))
    }

    /// Build the app without an eframe context
    pub fn with_settings(config: AppConfig, settings: StyleSettings) -> Self {
        let theme = config.theme().unwrap_or_else(|err| {
            log::warn!("{}; falling back to the default theme", err);
            Theme::default()
        });
        let background = theme.resolve(&config.canvas.background).unwrap_or_else(|err| {
            log::warn!("{}; using the theme background", err);
            theme.background()
        });

        let mut painter = Painter::new(theme, settings);
        painter.attach(RenderSurface::new(config.canvas));
        Self {
            painter,
            input: InputHandler::new(),
            renderer: Renderer::new(background),
        }
    }

    pub fn painter(&self) -> &Painter {
        &self.painter
    }

    fn status_line(&self) -> String {
        format!(
            "{} | {} shape(s) | {}",
            self.painter.active_shape(),
            self.painter.history().len(),
            HINT
        )
    }
}

impl eframe::App for SketchApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, SETTINGS_KEY, &self.painter.settings().indices());
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(self.status_line());
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let available_size = ui.available_size();
            let (response, painter) = ui.allocate_painter(available_size, egui::Sense::click_and_drag());
            let projection = self
                .painter
                .surface()
                .map(|surface| surface.params().projection)
                .unwrap_or_default();
            let rect = fit_canvas(response.rect, &projection);

            self.painter.set_viewport_size(rect.size());
            for event in self.input.process_input(ctx, rect) {
                self.painter.handle_event(&event);
            }

            if let Some(surface) = self.painter.surface() {
                self.renderer.render(&painter, rect, surface);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_starts_attached() {
        let app = SketchApp::with_settings(AppConfig::default(), StyleSettings::default());
        assert!(app.painter().is_attached());
        assert!(app.status_line().starts_with("Polygon | 0 shape(s)"));
    }

    #[test]
    fn test_unknown_background_falls_back() {
        let mut config = AppConfig::default();
        config.canvas.background = "plaid".to_string();
        let app = SketchApp::with_settings(config, StyleSettings::default());
        assert_eq!(app.renderer.background(), Theme::default().background());
    }
}
