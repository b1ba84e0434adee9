use egui::{Color32, PointerButton, Pos2};

use crate::geometry::{ShapeGeometry, ShapeKind};
use crate::priority::PreviewPriorities;
use crate::style::Style;
use crate::surface::{Drawable, DrawableId, RenderSurface};

mod circle;
mod line;
mod path;
mod rectangle;

pub use circle::CircleDraft;
pub use line::LineDraft;
pub use path::PathDraft;
pub use rectangle::RectangleDraft;

/// Keys a draft reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftKey {
    /// Throw away everything placed so far
    Cancel,
    /// Finish a polygon or polyline
    Confirm,
}

/// Everything a draft needs from its owner while handling one event
pub struct DraftContext<'a> {
    pub surface: &'a mut RenderSurface,
    pub previews: &'a mut PreviewPriorities,
    /// The style a commit made right now would get
    pub style: Style,
    pub preview_color: Color32,
}

/// A finished shape handed from a draft to the history
#[derive(Debug, Clone, PartialEq)]
pub struct DraftCommit {
    /// Drawable built with the style current at commit time, not yet registered
    pub drawable: Drawable,
    pub kind: ShapeKind,
    /// Geometry kept for later restyling; `None` means the shape can't be rebuilt
    pub geometry: Option<ShapeGeometry>,
}

impl DraftCommit {
    pub fn new(geometry: ShapeGeometry, style: &Style) -> Self {
        Self {
            drawable: geometry.render_with(style),
            kind: geometry.kind(),
            geometry: Some(geometry),
        }
    }
}

/// Shared behaviour of every per-shape drafting state machine
pub trait ShapeDraft {
    fn name(&self) -> &'static str;

    /// Handle a pointer press at a world position.
    /// Returns a commit when this press completes the shape.
    fn on_pointer_down(
        &mut self,
        button: PointerButton,
        point: Pos2,
        ctx: &mut DraftContext<'_>,
    ) -> Option<DraftCommit>;

    /// Update the live preview; confirmed points are never moved
    fn on_pointer_move(&mut self, point: Pos2, ctx: &mut DraftContext<'_>);

    /// Handle a key press. Returns a commit when the key completes the shape.
    fn on_key(&mut self, key: DraftKey, ctx: &mut DraftContext<'_>) -> Option<DraftCommit>;

    /// Re-apply the live style to preview drawables in place
    fn refresh_style(&mut self, ctx: &mut DraftContext<'_>);

    /// Drop all placed points and preview drawables. Idempotent.
    fn reset(&mut self, surface: &mut RenderSurface);

    /// True while any anchor or vertex is held
    fn has_state(&self) -> bool;

    /// Handles of the preview drawables currently on the surface
    fn preview_ids(&self) -> Vec<DrawableId>;
}

/// The active draft, one variant per shape kind
#[derive(Debug)]
pub enum Draft {
    Line(LineDraft),
    Rectangle(RectangleDraft),
    Circle(CircleDraft),
    Polygon(PathDraft),
    Polyline(PathDraft),
}

impl Draft {
    pub fn new(kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::Line => Self::Line(LineDraft::default()),
            ShapeKind::Rectangle => Self::Rectangle(RectangleDraft::default()),
            ShapeKind::Circle => Self::Circle(CircleDraft::default()),
            ShapeKind::Polygon => Self::Polygon(PathDraft::polygon()),
            ShapeKind::Polyline => Self::Polyline(PathDraft::polyline()),
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Line(_) => ShapeKind::Line,
            Self::Rectangle(_) => ShapeKind::Rectangle,
            Self::Circle(_) => ShapeKind::Circle,
            Self::Polygon(_) => ShapeKind::Polygon,
            Self::Polyline(_) => ShapeKind::Polyline,
        }
    }
}

impl ShapeDraft for Draft {
    fn name(&self) -> &'static str {
        match self {
            Self::Line(draft) => draft.name(),
            Self::Rectangle(draft) => draft.name(),
            Self::Circle(draft) => draft.name(),
            Self::Polygon(draft) | Self::Polyline(draft) => draft.name(),
        }
    }

    fn on_pointer_down(
        &mut self,
        button: PointerButton,
        point: Pos2,
        ctx: &mut DraftContext<'_>,
    ) -> Option<DraftCommit> {
        match self {
            Self::Line(draft) => draft.on_pointer_down(button, point, ctx),
            Self::Rectangle(draft) => draft.on_pointer_down(button, point, ctx),
            Self::Circle(draft) => draft.on_pointer_down(button, point, ctx),
            Self::Polygon(draft) | Self::Polyline(draft) => {
                draft.on_pointer_down(button, point, ctx)
            }
        }
    }

    fn on_pointer_move(&mut self, point: Pos2, ctx: &mut DraftContext<'_>) {
        match self {
            Self::Line(draft) => draft.on_pointer_move(point, ctx),
            Self::Rectangle(draft) => draft.on_pointer_move(point, ctx),
            Self::Circle(draft) => draft.on_pointer_move(point, ctx),
            Self::Polygon(draft) | Self::Polyline(draft) => draft.on_pointer_move(point, ctx),
        }
    }

    fn on_key(&mut self, key: DraftKey, ctx: &mut DraftContext<'_>) -> Option<DraftCommit> {
        match self {
            Self::Line(draft) => draft.on_key(key, ctx),
            Self::Rectangle(draft) => draft.on_key(key, ctx),
            Self::Circle(draft) => draft.on_key(key, ctx),
            Self::Polygon(draft) | Self::Polyline(draft) => draft.on_key(key, ctx),
        }
    }

    fn refresh_style(&mut self, ctx: &mut DraftContext<'_>) {
        match self {
            Self::Line(draft) => draft.refresh_style(ctx),
            Self::Rectangle(draft) => draft.refresh_style(ctx),
            Self::Circle(draft) => draft.refresh_style(ctx),
            Self::Polygon(draft) | Self::Polyline(draft) => draft.refresh_style(ctx),
        }
    }

    fn reset(&mut self, surface: &mut RenderSurface) {
        match self {
            Self::Line(draft) => draft.reset(surface),
            Self::Rectangle(draft) => draft.reset(surface),
            Self::Circle(draft) => draft.reset(surface),
            Self::Polygon(draft) | Self::Polyline(draft) => draft.reset(surface),
        }
    }

    fn has_state(&self) -> bool {
        match self {
            Self::Line(draft) => draft.has_state(),
            Self::Rectangle(draft) => draft.has_state(),
            Self::Circle(draft) => draft.has_state(),
            Self::Polygon(draft) | Self::Polyline(draft) => draft.has_state(),
        }
    }

    fn preview_ids(&self) -> Vec<DrawableId> {
        match self {
            Self::Line(draft) => draft.preview_ids(),
            Self::Rectangle(draft) => draft.preview_ids(),
            Self::Circle(draft) => draft.preview_ids(),
            Self::Polygon(draft) | Self::Polyline(draft) => draft.preview_ids(),
        }
    }
}

/// Put `drawable` on the surface behind `slot`, registering it in the preview
/// band the first time
fn show_preview(ctx: &mut DraftContext<'_>, slot: &mut Option<DrawableId>, drawable: Drawable) {
    match (*slot).and_then(|id| ctx.surface.get_mut(id)) {
        Some(existing) => *existing = drawable,
        None => {
            let priority = ctx.previews.allocate();
            *slot = Some(ctx.surface.register(drawable, priority));
        }
    }
}

fn hide_preview(surface: &mut RenderSurface, slot: &mut Option<DrawableId>) {
    if let Some(id) = slot.take() {
        if let Err(err) = surface.unregister(id) {
            log::debug!("preview already gone: {}", err);
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::Harness;
    use super::*;

    #[test]
    fn test_new_draft_matches_kind() {
        for kind in ShapeKind::ALL {
            let draft = Draft::new(kind);
            assert_eq!(draft.kind(), kind);
            assert_eq!(draft.name(), kind.name());
            assert!(!draft.has_state());
        }
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut harness = Harness::new();
        let mut draft = Draft::new(ShapeKind::Polygon);
        draft.on_pointer_down(PointerButton::Primary, Pos2::ZERO, &mut harness.ctx());
        draft.on_pointer_down(PointerButton::Primary, Pos2::new(1.0, 0.0), &mut harness.ctx());
        draft.on_pointer_move(Pos2::new(1.0, 1.0), &mut harness.ctx());
        assert!(!harness.surface.is_empty());

        draft.reset(&mut harness.surface);
        draft.reset(&mut harness.surface);
        assert!(harness.surface.is_empty());
        assert!(!draft.has_state());
    }
}
