use egui::{PointerButton, Pos2};

use super::{DraftCommit, DraftContext, DraftKey, ShapeDraft, hide_preview, show_preview};
use crate::geometry::ShapeGeometry;
use crate::surface::{Drawable, DrawableId, LineShape, RenderSurface};

/// Two presses: start point, then end point
#[derive(Debug, Default)]
pub struct LineDraft {
    first_point: Option<Pos2>,
    preview: Option<DrawableId>,
}

impl LineDraft {
    fn update_preview(&mut self, point: Pos2, ctx: &mut DraftContext<'_>) {
        let Some(start) = self.first_point else {
            return;
        };
        let line = Drawable::Line(LineShape {
            start,
            end: point,
            color: ctx.preview_color,
            stroke: ctx.style.stroke_width,
        });
        show_preview(ctx, &mut self.preview, line);
    }
}

impl ShapeDraft for LineDraft {
    fn name(&self) -> &'static str {
        "Line"
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
        let Some(start) = self.first_point else {
            self.first_point = Some(point);
            self.update_preview(point, ctx);
            return None;
        };
        self.reset(ctx.surface);
        // Coincident end points are accepted as a degenerate segment
        Some(DraftCommit::new(
            ShapeGeometry::Line { start, end: point },
            &ctx.style,
        ))
    }

    fn on_pointer_move(&mut self, point: Pos2, ctx: &mut DraftContext<'_>) {
        self.update_preview(point, ctx);
    }

    fn on_key(&mut self, key: DraftKey, ctx: &mut DraftContext<'_>) -> Option<DraftCommit> {
        if key == DraftKey::Cancel {
            self.reset(ctx.surface);
        }
        None
    }

    fn refresh_style(&mut self, ctx: &mut DraftContext<'_>) {
        if let Some(preview) = self.preview.and_then(|id| ctx.surface.get_mut(id)) {
            preview.set_stroke(ctx.preview_color, ctx.style.stroke_width);
        }
    }

    fn reset(&mut self, surface: &mut RenderSurface) {
        self.first_point = None;
        hide_preview(surface, &mut self.preview);
    }

    fn has_state(&self) -> bool {
        self.first_point.is_some()
    }

    fn preview_ids(&self) -> Vec<DrawableId> {
        self.preview.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::test_support::Harness;

    #[test]
    fn test_two_presses_commit() {
        let mut harness = Harness::new();
        let mut draft = LineDraft::default();
        let start = Pos2::new(-1.0, -1.0);
        let end = Pos2::new(2.0, 3.0);

        assert!(
            draft
                .on_pointer_down(PointerButton::Primary, start, &mut harness.ctx())
                .is_none()
        );
        // The preview appears on the first press
        assert_eq!(draft.preview_ids().len(), 1);

        let commit = draft
            .on_pointer_down(PointerButton::Primary, end, &mut harness.ctx())
            .expect("second press commits");
        assert_eq!(commit.geometry, Some(ShapeGeometry::Line { start, end }));
        assert!(!draft.has_state());
        assert!(harness.surface.is_empty());
    }

    #[test]
    fn test_coincident_points_commit() {
        let mut harness = Harness::new();
        let mut draft = LineDraft::default();
        draft.on_pointer_down(PointerButton::Primary, Pos2::ZERO, &mut harness.ctx());
        let commit = draft.on_pointer_down(PointerButton::Primary, Pos2::ZERO, &mut harness.ctx());
        assert!(commit.is_some());
    }

    #[test]
    fn test_secondary_button_ignored() {
        let mut harness = Harness::new();
        let mut draft = LineDraft::default();
        draft.on_pointer_down(PointerButton::Secondary, Pos2::ZERO, &mut harness.ctx());
        assert!(!draft.has_state());
    }

    #[test]
    fn test_move_without_anchor_is_noop() {
        let mut harness = Harness::new();
        let mut draft = LineDraft::default();
        draft.on_pointer_move(Pos2::new(1.0, 1.0), &mut harness.ctx());
        assert!(harness.surface.is_empty());
    }

    #[test]
    fn test_refresh_style_keeps_preview_color() {
        let mut harness = Harness::new();
        let mut draft = LineDraft::default();
        draft.on_pointer_down(PointerButton::Primary, Pos2::ZERO, &mut harness.ctx());
        harness.style.stroke_width = 3.5;
        draft.refresh_style(&mut harness.ctx());

        let id = draft.preview_ids()[0];
        let preview = harness.surface.get(id).unwrap();
        assert_eq!(preview.stroke_width(), Some(3.5));
        assert_eq!(preview.stroke_color(), Some(egui::Color32::GRAY));
    }
}
