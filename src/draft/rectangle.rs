use egui::{PointerButton, Pos2};

use super::{DraftCommit, DraftContext, DraftKey, ShapeDraft, hide_preview, show_preview};
use crate::geometry::{ShapeGeometry, rect_from_corners};
use crate::surface::{Drawable, DrawableId, RectangleShape, RenderSurface};

/// Two presses: one corner, then the opposite corner
#[derive(Debug, Default)]
pub struct RectangleDraft {
    first_corner: Option<Pos2>,
    last_pointer: Option<Pos2>,
    preview: Option<DrawableId>,
}

impl RectangleDraft {
    fn preview_shape(first: Pos2, second: Pos2, ctx: &DraftContext<'_>) -> Drawable {
        let (center, width, height) = rect_from_corners(first, second);
        Drawable::Rectangle(RectangleShape {
            center,
            width,
            height,
            corner_radius: ctx.style.rounding(),
            color: ctx.preview_color,
            fill_color: None,
            stroke: ctx.style.stroke_width,
        })
    }
}

impl ShapeDraft for RectangleDraft {
    fn name(&self) -> &'static str {
        "Rectangle"
    }

    fn on_pointer_down(
        &mut self,
        button: PointerButton,
        point: Pos2,
        ctx: &mut DraftContext<'_>,
    ) -> Option<DraftCommit> {
        if button != PointerButton::Primary {
            return None;
        }
        let Some(corner_a) = self.first_corner else {
            self.first_corner = Some(point);
            return None;
        };
        self.reset(ctx.surface);
        Some(DraftCommit::new(
            ShapeGeometry::Rectangle {
                corner_a,
                corner_b: point,
            },
            &ctx.style,
        ))
    }

    fn on_pointer_move(&mut self, point: Pos2, ctx: &mut DraftContext<'_>) {
        let Some(first) = self.first_corner else {
            return;
        };
        self.last_pointer = Some(point);
        let shape = Self::preview_shape(first, point, ctx);
        show_preview(ctx, &mut self.preview, shape);
    }

    fn on_key(&mut self, key: DraftKey, ctx: &mut DraftContext<'_>) -> Option<DraftCommit> {
        if key == DraftKey::Cancel {
            self.reset(ctx.surface);
        }
        None
    }

    fn refresh_style(&mut self, ctx: &mut DraftContext<'_>) {
        let (Some(first), Some(second)) = (self.first_corner, self.last_pointer) else {
            return;
        };
        if self.preview.is_some() {
            let shape = Self::preview_shape(first, second, ctx);
            show_preview(ctx, &mut self.preview, shape);
        }
    }

    fn reset(&mut self, surface: &mut RenderSurface) {
        self.first_corner = None;
        self.last_pointer = None;
        hide_preview(surface, &mut self.preview);
    }

    fn has_state(&self) -> bool {
        self.first_corner.is_some()
    }

    fn preview_ids(&self) -> Vec<DrawableId> {
        self.preview.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::test_support::Harness;

    fn commit_rect(a: Pos2, b: Pos2) -> RectangleShape {
        let mut harness = Harness::new();
        let mut draft = RectangleDraft::default();
        draft.on_pointer_down(PointerButton::Primary, a, &mut harness.ctx());
        draft.on_pointer_move(b, &mut harness.ctx());
        let commit = draft
            .on_pointer_down(PointerButton::Primary, b, &mut harness.ctx())
            .expect("second corner commits");
        match commit.drawable {
            Drawable::Rectangle(rect) => rect,
            other => panic!("unexpected drawable {:?}", other),
        }
    }

    #[test]
    fn test_geometry_independent_of_corner_order() {
        let a = Pos2::new(-3.0, 1.0);
        let b = Pos2::new(1.0, -2.0);
        let forward = commit_rect(a, b);
        let backward = commit_rect(b, a);
        assert_eq!(forward.center, Pos2::new(-1.0, -0.5));
        assert_eq!(forward.width, 4.0);
        assert_eq!(forward.height, 3.0);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_preview_only_after_move() {
        let mut harness = Harness::new();
        let mut draft = RectangleDraft::default();
        draft.on_pointer_move(Pos2::new(1.0, 1.0), &mut harness.ctx());
        assert!(harness.surface.is_empty());

        draft.on_pointer_down(PointerButton::Primary, Pos2::ZERO, &mut harness.ctx());
        assert!(harness.surface.is_empty());

        draft.on_pointer_move(Pos2::new(1.0, 1.0), &mut harness.ctx());
        assert_eq!(harness.surface.len(), 1);
        let id = draft.preview_ids()[0];
        assert_eq!(harness.surface.get(id).unwrap().fill_color(), None);
    }

    #[test]
    fn test_refresh_style_updates_rounding() {
        let mut harness = Harness::new();
        let mut draft = RectangleDraft::default();
        draft.on_pointer_down(PointerButton::Primary, Pos2::ZERO, &mut harness.ctx());
        draft.on_pointer_move(Pos2::new(2.0, 2.0), &mut harness.ctx());
        harness.style.corner_radius = 0.5;
        harness.style.stroke_width = 2.0;
        draft.refresh_style(&mut harness.ctx());

        let id = draft.preview_ids()[0];
        let Some(Drawable::Rectangle(rect)) = harness.surface.get(id) else {
            panic!("preview should be a rectangle");
        };
        assert_eq!(rect.corner_radius, Some(0.5));
        assert_eq!(rect.stroke, 2.0);
        assert_eq!(rect.width, 2.0);
    }

    #[test]
    fn test_cancel_resets() {
        let mut harness = Harness::new();
        let mut draft = RectangleDraft::default();
        draft.on_pointer_down(PointerButton::Primary, Pos2::ZERO, &mut harness.ctx());
        draft.on_pointer_move(Pos2::new(2.0, 2.0), &mut harness.ctx());
        assert!(draft.on_key(DraftKey::Cancel, &mut harness.ctx()).is_none());
        assert!(!draft.has_state());
        assert!(harness.surface.is_empty());
    }
}
