//! The painter ties drafting, the shape history and the menu together.
//!
//! Input arrives in canvas pixels and is routed either to the visible menu or
//! to the active draft. Every operation is a no-op while no surface is attached.

use egui::{Color32, PointerButton, Pos2, Vec2};

use crate::draft::{Draft, DraftCommit, DraftContext, DraftKey, ShapeDraft};
use crate::geometry::ShapeKind;
use crate::history::ShapeHistory;
use crate::input::InputEvent;
use crate::menu::{MenuAction, MenuItem, MenuKind, MenuState};
use crate::priority::{MENU_PRIORITY, PreviewPriorities};
use crate::style::{Style, StyleSettings};
use crate::surface::{DrawableId, MenuColors, RenderSurface};
use crate::theme::{Theme, mix};

mod menus;

/// Keys the painter understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PainterKey {
    OpenMenu,
    Cancel,
    Undo,
    Confirm,
    SelectShape(ShapeKind),
}

pub struct Painter {
    surface: Option<RenderSurface>,
    theme: Theme,
    settings: StyleSettings,
    active_shape: ShapeKind,
    draft: Draft,
    history: ShapeHistory,
    menu: MenuState,
    menu_drawable: Option<DrawableId>,
    previews: PreviewPriorities,
    preview_color: Color32,
    menu_colors: MenuColors,
}

impl Painter {
    pub fn new(theme: Theme, settings: StyleSettings) -> Self {
        let foreground = theme.foreground();
        let background = theme.background();
        let active_shape = ShapeKind::Polygon;
        Self {
            surface: None,
            preview_color: theme.preview_color(),
            menu_colors: MenuColors {
                panel: mix(foreground, background, 0.8),
                border: foreground,
                text: foreground,
                item: background,
            },
            theme,
            settings,
            active_shape,
            draft: Draft::new(active_shape),
            history: ShapeHistory::new(),
            menu: MenuState::default(),
            menu_drawable: None,
            previews: PreviewPriorities::default(),
        }
    }

    /// Start drawing onto `surface`. A previously attached surface is released.
    pub fn attach(&mut self, surface: RenderSurface) {
        if self.surface.is_some() {
            self.detach();
        }
        log::info!("painter attached, starting with {}", self.active_shape);
        self.surface = Some(surface);
    }

    /// Stop drawing and hand the surface back.
    ///
    /// Every drawable the painter registered is removed first, and the history
    /// and menu are emptied since their handles belong to that surface.
    pub fn detach(&mut self) -> Option<RenderSurface> {
        let mut surface = self.surface.take()?;
        self.draft.reset(&mut surface);
        self.history.clear(&mut surface);
        if let Some(id) = self.menu_drawable.take() {
            if let Err(err) = surface.unregister(id) {
                log::debug!("menu overlay already gone: {}", err);
            }
        }
        self.menu.close();
        log::info!("painter detached");
        Some(surface)
    }

    pub fn is_attached(&self) -> bool {
        self.surface.is_some()
    }

    pub fn surface(&self) -> Option<&RenderSurface> {
        self.surface.as_ref()
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn settings(&self) -> &StyleSettings {
        &self.settings
    }

    pub fn active_shape(&self) -> ShapeKind {
        self.active_shape
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn history(&self) -> &ShapeHistory {
        &self.history
    }

    pub fn menu(&self) -> &MenuState {
        &self.menu
    }

    pub fn preview_color(&self) -> Color32 {
        self.preview_color
    }

    /// The style the next commit would receive
    pub fn current_style(&self) -> Style {
        self.settings.resolve(&self.theme)
    }

    /// Map canvas pixels to world coordinates, `None` while detached
    pub fn cursor_to_world(&self, pixel: Pos2) -> Option<Pos2> {
        self.surface
            .as_ref()
            .map(|surface| surface.params().pixel_to_world(pixel))
    }

    /// Keep pointer mapping in step with the on-screen canvas size
    pub fn set_viewport_size(&mut self, size: Vec2) {
        if let Some(surface) = &mut self.surface {
            if surface.params().display_size() != size {
                surface.set_display_size(size);
            }
        }
    }

    pub fn handle_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::PointerDown { position, button } => self.on_pointer_down(*button, *position),
            InputEvent::PointerMove { position } => self.on_pointer_move(*position),
            InputEvent::KeyDown { key } => self.on_key(*key),
            InputEvent::PointerUp { .. } => {}
        }
    }

    pub fn on_key(&mut self, key: PainterKey) {
        if self.surface.is_none() {
            return;
        }
        match key {
            PainterKey::OpenMenu => {
                if !self.menu.is_visible() || self.menu.kind() == MenuKind::ShapeSpecific {
                    self.open_menu(MenuKind::Main);
                }
            }
            PainterKey::Cancel => {
                if self.menu.is_visible() {
                    self.close_menu();
                } else {
                    self.reset_draft();
                }
            }
            PainterKey::Undo => {
                if let Some(surface) = &mut self.surface {
                    self.history.undo(surface);
                }
                self.refresh_menu_items();
            }
            PainterKey::Confirm => {
                let commit = self.with_draft(|draft, ctx| draft.on_key(DraftKey::Confirm, ctx));
                if let Some(commit) = commit.flatten() {
                    self.commit(commit);
                }
            }
            PainterKey::SelectShape(kind) => self.set_active_shape(kind),
        }
    }

    pub fn on_pointer_down(&mut self, button: PointerButton, pixel: Pos2) {
        let Some(point) = self.cursor_to_world(pixel) else {
            return;
        };

        if self.menu.is_visible() {
            match (button, self.menu.hit_test(point)) {
                (PointerButton::Primary, Some(action)) => {
                    self.run_action(action);
                    self.refresh_menu_items();
                }
                // A miss closes the menu and the press goes no further
                _ => self.close_menu(),
            }
            return;
        }

        match button {
            PointerButton::Primary => {
                let commit = self.with_draft(|draft, ctx| draft.on_pointer_down(button, point, ctx));
                if let Some(commit) = commit.flatten() {
                    self.commit(commit);
                }
            }
            PointerButton::Secondary => self.reset_draft(),
            _ => {}
        }
    }

    pub fn on_pointer_move(&mut self, pixel: Pos2) {
        let Some(point) = self.cursor_to_world(pixel) else {
            return;
        };
        self.with_draft(|draft, ctx| draft.on_pointer_move(point, ctx));
    }

    /// Switch the kind of shape being drafted, discarding any draft in progress
    pub fn set_active_shape(&mut self, kind: ShapeKind) {
        if let Some(surface) = &mut self.surface {
            self.draft.reset(surface);
        }
        self.active_shape = kind;
        self.draft = Draft::new(kind);
        log::debug!("active shape is now {}", kind);
        self.refresh_menu_items();
    }

    fn with_draft<R>(&mut self, f: impl FnOnce(&mut Draft, &mut DraftContext<'_>) -> R) -> Option<R> {
        let style = self.current_style();
        let Self {
            surface,
            draft,
            previews,
            preview_color,
            ..
        } = self;
        let surface = surface.as_mut()?;
        let mut ctx = DraftContext {
            surface,
            previews,
            style,
            preview_color: *preview_color,
        };
        Some(f(draft, &mut ctx))
    }

    fn reset_draft(&mut self) {
        if let Some(surface) = &mut self.surface {
            self.draft.reset(surface);
        }
    }

    fn commit(&mut self, commit: DraftCommit) {
        let Some(surface) = &mut self.surface else {
            return;
        };
        let kind = commit.kind;
        self.history.append(commit, surface);
        if kind.has_extra_options() {
            self.open_menu(MenuKind::ShapeSpecific);
        } else if self.menu.kind() == MenuKind::ShapeSpecific {
            self.close_menu();
        }
    }

    fn run_action(&mut self, action: MenuAction) {
        match action {
            MenuAction::CycleShape => {
                self.set_active_shape(self.active_shape.next());
                return;
            }
            MenuAction::CycleStrokeColor => {
                self.settings.stroke_color.advance();
            }
            MenuAction::CycleStrokeWidth => {
                self.settings.stroke_width.advance();
            }
            MenuAction::CycleFillColor => {
                self.settings.fill_color.advance();
            }
            MenuAction::CycleCornerRadius => {
                self.settings.corner_radius.advance();
            }
            MenuAction::Noop => return,
        }
        self.restyle();
    }

    /// Apply the current style to the last committed shape and the live draft
    fn restyle(&mut self) {
        let style = self.current_style();
        if let Some(surface) = &mut self.surface {
            self.history.rebuild_last(&style, surface);
        }
        self.with_draft(|draft, ctx| draft.refresh_style(ctx));
    }

    fn open_menu(&mut self, kind: MenuKind) {
        let Some(surface) = &self.surface else {
            return;
        };
        let anchor = surface.params().projection.center();
        let items = self.menu_items(kind);
        self.menu.open(kind, anchor, items);
        self.sync_menu_drawable();
    }

    fn close_menu(&mut self) {
        self.menu.close();
        self.sync_menu_drawable();
    }

    fn menu_items(&self, kind: MenuKind) -> Vec<MenuItem> {
        match kind {
            MenuKind::Main => menus::main_items(self.active_shape, &self.settings),
            MenuKind::ShapeSpecific => {
                menus::shape_items(self.history.last_shape_kind(), &self.settings)
            }
            MenuKind::None => Vec::new(),
        }
    }

    /// Rebuild the labels of a visible menu from the current state
    fn refresh_menu_items(&mut self) {
        if !self.menu.is_visible() {
            return;
        }
        let items = self.menu_items(self.menu.kind());
        self.menu.set_items(items);
        self.sync_menu_drawable();
    }

    /// Mirror the menu into the surface at the reserved menu priority
    fn sync_menu_drawable(&mut self) {
        let Some(surface) = &mut self.surface else {
            return;
        };
        match self.menu.overlay(self.menu_colors) {
            Some(overlay) => match self.menu_drawable {
                Some(id) if surface.contains(id) => {
                    if let Err(err) = surface.replace(id, overlay) {
                        log::debug!("menu overlay update failed: {}", err);
                    }
                }
                _ => {
                    self.menu_drawable = Some(surface.register(overlay, MENU_PRIORITY));
                }
            },
            None => {
                if let Some(id) = self.menu_drawable.take() {
                    if let Err(err) = surface.unregister(id) {
                        log::debug!("menu overlay already gone: {}", err);
                    }
                }
            }
        }
    }
}
