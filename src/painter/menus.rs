use crate::geometry::ShapeKind;
use crate::menu::{MenuAction, MenuItem};
use crate::style::StyleSettings;

/// Items of the main menu: shape kind and the two stroke cycles
pub(super) fn main_items(active_shape: ShapeKind, settings: &StyleSettings) -> Vec<MenuItem> {
    vec![
        MenuItem::new(format!("Shape: {}", active_shape), MenuAction::CycleShape),
        MenuItem::new(settings.stroke_color_label(), MenuAction::CycleStrokeColor),
        MenuItem::new(settings.stroke_width_label(), MenuAction::CycleStrokeWidth),
    ]
}

/// Items for the most recently committed shape.
///
/// Never empty: without a committed shape, or for a kind with nothing extra to
/// tune, a single placeholder is shown.
pub(super) fn shape_items(last: Option<ShapeKind>, settings: &StyleSettings) -> Vec<MenuItem> {
    let Some(kind) = last else {
        return vec![MenuItem::new("No committed shape", MenuAction::Noop)];
    };
    let mut items = Vec::new();
    if kind.supports_fill() {
        items.push(MenuItem::new(
            settings.fill_color_label(),
            MenuAction::CycleFillColor,
        ));
    }
    if kind.supports_corner_radius() {
        items.push(MenuItem::new(
            settings.corner_radius_label(),
            MenuAction::CycleCornerRadius,
        ));
    }
    if items.is_empty() {
        items.push(MenuItem::new("No extra options", MenuAction::Noop));
    }
    items
}
