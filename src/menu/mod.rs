use egui::Pos2;

use crate::geometry::WorldRect;
use crate::surface::{Drawable, MenuColors, MenuOverlay};

/// Which menu, if any, is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuKind {
    #[default]
    None,
    Main,
    ShapeSpecific,
}

/// What clicking a menu item does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    CycleShape,
    CycleStrokeColor,
    CycleStrokeWidth,
    CycleFillColor,
    CycleCornerRadius,
    /// Placeholder items
    Noop,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub label: String,
    pub action: MenuAction,
    /// Valid only after the owning menu's last `layout()`
    pub rect: WorldRect,
}

impl MenuItem {
    pub fn new(label: impl Into<String>, action: MenuAction) -> Self {
        Self {
            label: label.into(),
            action,
            rect: WorldRect::default(),
        }
    }
}

/// A vertical stack of clickable items centered on an anchor point.
///
/// Every mutation of the item list re-runs the layout, so hit rectangles always
/// match the items being tested.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuState {
    kind: MenuKind,
    visible: bool,
    anchor: Pos2,
    width: f32,
    item_height: f32,
    padding: f32,
    items: Vec<MenuItem>,
}

impl Default for MenuState {
    fn default() -> Self {
        Self {
            kind: MenuKind::None,
            visible: false,
            anchor: Pos2::ZERO,
            width: 4.0,
            item_height: 0.8,
            padding: 0.2,
            items: Vec::new(),
        }
    }
}

impl MenuState {
    pub fn kind(&self) -> MenuKind {
        self.kind
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn anchor(&self) -> Pos2 {
        self.anchor
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn item_height(&self) -> f32 {
        self.item_height
    }

    pub fn padding(&self) -> f32 {
        self.padding
    }

    /// Show a fresh menu; nothing from a previous menu is kept
    pub fn open(&mut self, kind: MenuKind, anchor: Pos2, items: Vec<MenuItem>) {
        self.kind = kind;
        self.anchor = anchor;
        self.visible = true;
        self.set_items(items);
    }

    /// Replace the items of the current menu and lay them out again
    pub fn set_items(&mut self, items: Vec<MenuItem>) {
        self.items = items;
        self.layout();
    }

    pub fn close(&mut self) {
        self.visible = false;
        self.kind = MenuKind::None;
        self.items.clear();
    }

    fn stack_height(&self) -> f32 {
        if self.items.is_empty() {
            return 0.0;
        }
        self.items.len() as f32 * (self.item_height + self.padding) - self.padding
    }

    /// Stack items top to bottom, centered on the anchor in both directions
    pub fn layout(&mut self) {
        let left = self.anchor.x - self.width * 0.5;
        let first_top = self.anchor.y + self.stack_height() * 0.5;
        let step = self.item_height + self.padding;
        for (i, item) in self.items.iter_mut().enumerate() {
            let top = first_top - i as f32 * step;
            item.rect = WorldRect::new(left, top, left + self.width, top - self.item_height);
        }
    }

    /// The action of the first item containing `point`
    pub fn hit_test(&self, point: Pos2) -> Option<MenuAction> {
        if !self.visible {
            return None;
        }
        self.items
            .iter()
            .find(|item| item.rect.contains(point))
            .map(|item| item.action)
    }

    /// Paintable snapshot, `None` while hidden or empty
    pub fn overlay(&self, colors: MenuColors) -> Option<Drawable> {
        if !self.visible || self.items.is_empty() {
            return None;
        }
        let panel = WorldRect::from_center_size(self.anchor, self.width, self.stack_height())
            .expand(self.padding);
        Some(Drawable::MenuOverlay(MenuOverlay {
            panel,
            items: self
                .items
                .iter()
                .map(|item| (item.label.clone(), item.rect))
                .collect(),
            colors,
        }))
    }
}
