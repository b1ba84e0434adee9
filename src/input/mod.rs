use egui::{Context, Key, PointerButton, Pos2, Rect};

use crate::geometry::ShapeKind;
use crate::painter::PainterKey;

/// Input the painter consumes, with positions relative to the canvas' top-left corner
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Mouse button was pressed inside the canvas
    PointerDown {
        position: Pos2,
        button: PointerButton,
    },
    /// Mouse button was released inside the canvas
    PointerUp {
        position: Pos2,
        button: PointerButton,
    },
    /// Pointer moved while hovering the window
    PointerMove { position: Pos2 },
    /// A bound key was pressed
    KeyDown { key: PainterKey },
}

const BUTTONS: [PointerButton; 3] = [
    PointerButton::Primary,
    PointerButton::Secondary,
    PointerButton::Middle,
];

/// Map a physical key to the painter's vocabulary
pub fn painter_key(key: Key) -> Option<PainterKey> {
    let key = match key {
        Key::Space => PainterKey::OpenMenu,
        Key::Escape => PainterKey::Cancel,
        Key::Backspace => PainterKey::Undo,
        Key::Enter => PainterKey::Confirm,
        Key::Num1 => PainterKey::SelectShape(ShapeKind::Line),
        Key::Num2 => PainterKey::SelectShape(ShapeKind::Rectangle),
        Key::Num3 => PainterKey::SelectShape(ShapeKind::Circle),
        Key::Num4 => PainterKey::SelectShape(ShapeKind::Polygon),
        Key::Num5 => PainterKey::SelectShape(ShapeKind::Polyline),
        _ => return None,
    };
    Some(key)
}

/// Turns raw egui input into [`InputEvent`]s for one canvas
#[derive(Debug, Default)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect this frame's events.
    ///
    /// Presses and releases are only reported inside `canvas_rect`; moves are
    /// reported whenever the hover position changes.
    pub fn process_input(&mut self, ctx: &Context, canvas_rect: Rect) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let to_canvas = |pos: Pos2| (pos - canvas_rect.min).to_pos2();

        ctx.input(|input| {
            let hover = input.pointer.hover_pos();
            if let Some(pos) = hover {
                if Some(pos) != self.last_pointer_pos {
                    events.push(InputEvent::PointerMove {
                        position: to_canvas(pos),
                    });
                }
            }
            self.last_pointer_pos = hover;

            if let Some(pos) = hover.filter(|pos| canvas_rect.contains(*pos)) {
                for button in BUTTONS {
                    if input.pointer.button_pressed(button) {
                        events.push(InputEvent::PointerDown {
                            position: to_canvas(pos),
                            button,
                        });
                    }
                    if input.pointer.button_released(button) {
                        events.push(InputEvent::PointerUp {
                            position: to_canvas(pos),
                            button,
                        });
                    }
                }
            }

            for event in &input.events {
                if let egui::Event::Key {
                    key,
                    pressed: true,
                    repeat: false,
                    ..
                } = event
                {
                    if let Some(key) = painter_key(*key) {
                        events.push(InputEvent::KeyDown { key });
                    }
                }
            }
        });

        events
    }
}
