use egui::{PointerButton, Pos2};

use super::{DraftCommit, DraftContext, DraftKey, ShapeDraft, hide_preview, show_preview};
use crate::geometry::{ShapeGeometry, distance};
use crate::surface::{CircleShape, Drawable, DrawableId, RenderSurface};

/// Two presses: the center, then any point on the rim
#[derive(Debug, Default)]
pub struct CircleDraft {
    center: Option<Pos2>,
    preview: Option<DrawableId>,
}

impl CircleDraft {
    fn show(&mut self, center: Pos2, radius: f32, ctx: &mut DraftContext<'_>) {
        let circle = Drawable::Circle(CircleShape {
            center,
            radius,
            color: ctx.preview_color,
            fill_color: None,
            stroke: ctx.style.stroke_width,
        });
        show_preview(ctx, &mut self.preview, circle);
    }
}

impl ShapeDraft for CircleDraft {
    fn name(&self) -> &'static str {
        "Circle"
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
        let Some(center) = self.center else {
            self.center = Some(point);
            return None;
        };
        let radius = distance(center, point);
        self.reset(ctx.surface);
        if radius <= 0.0 {
            log::debug!("discarding circle with zero radius at {:?}", center);
            return None;
        }
        Some(DraftCommit::new(
            ShapeGeometry::Circle { center, radius },
            &ctx.style,
        ))
    }

    fn on_pointer_move(&mut self, point: Pos2, ctx: &mut DraftContext<'_>) {
        let Some(center) = self.center else {
            return;
        };
        let radius = distance(center, point);
        if radius <= 0.0 {
            hide_preview(ctx.surface, &mut self.preview);
            return;
        }
        self.show(center, radius, ctx);
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
        self.center = None;
        hide_preview(surface, &mut self.preview);
    }

    fn has_state(&self) -> bool {
        self.center.is_some()
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
    fn test_three_four_five() {
        let mut harness = Harness::new();
        let mut draft = CircleDraft::default();
        draft.on_pointer_down(PointerButton::Primary, Pos2::ZERO, &mut harness.ctx());
        let commit = draft
            .on_pointer_down(PointerButton::Primary, Pos2::new(3.0, 4.0), &mut harness.ctx())
            .expect("non-zero radius commits");
        assert_eq!(
            commit.geometry,
            Some(ShapeGeometry::Circle {
                center: Pos2::ZERO,
                radius: 5.0
            })
        );
    }

    #[test]
    fn test_zero_radius_resets() {
        let mut harness = Harness::new();
        let mut draft = CircleDraft::default();
        let center = Pos2::new(1.0, 1.0);
        draft.on_pointer_down(PointerButton::Primary, center, &mut harness.ctx());
        let commit = draft.on_pointer_down(PointerButton::Primary, center, &mut harness.ctx());
        assert!(commit.is_none());
        assert!(!draft.has_state());
    }

    #[test]
    fn test_preview_hidden_at_zero_radius() {
        let mut harness = Harness::new();
        let mut draft = CircleDraft::default();
        draft.on_pointer_down(PointerButton::Primary, Pos2::ZERO, &mut harness.ctx());
        draft.on_pointer_move(Pos2::new(1.0, 0.0), &mut harness.ctx());
        assert_eq!(harness.surface.len(), 1);
        draft.on_pointer_move(Pos2::ZERO, &mut harness.ctx());
        assert!(harness.surface.is_empty());
        assert!(draft.has_state());
    }
}
