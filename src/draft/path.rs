use egui::{PointerButton, Pos2};

use super::{DraftCommit, DraftContext, DraftKey, ShapeDraft, hide_preview, show_preview};
use crate::geometry::ShapeGeometry;
use crate::surface::{Drawable, DrawableId, LineShape, RenderSurface};

/// Vertex-by-vertex draft for polygons (closed) and polylines (open).
///
/// Every press appends a vertex. Confirmed edges are shown in the stroke color,
/// the pending edge to the pointer in the preview color. Confirm commits.
#[derive(Debug)]
pub struct PathDraft {
    closed: bool,
    points: Vec<Pos2>,
    segments: Vec<DrawableId>,
    pending_segment: Option<DrawableId>,
}

impl PathDraft {
    pub fn polygon() -> Self {
        Self::new(true)
    }

    pub fn polyline() -> Self {
        Self::new(false)
    }

    fn new(closed: bool) -> Self {
        Self {
            closed,
            points: Vec::new(),
            segments: Vec::new(),
            pending_segment: None,
        }
    }

    /// Fewest vertices that make a committable shape
    pub fn min_points(&self) -> usize {
        if self.closed { 3 } else { 2 }
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    fn add_point(&mut self, point: Pos2, ctx: &mut DraftContext<'_>) {
        self.points.push(point);
        if let [.., start, end] = self.points[..] {
            let segment = Drawable::Line(LineShape {
                start,
                end,
                color: ctx.style.stroke_color,
                stroke: ctx.style.stroke_width,
            });
            let priority = ctx.previews.allocate();
            self.segments.push(ctx.surface.register(segment, priority));
        }
        hide_preview(ctx.surface, &mut self.pending_segment);
    }

    fn geometry(&self, points: Vec<Pos2>) -> ShapeGeometry {
        if self.closed {
            ShapeGeometry::Polygon { points }
        } else {
            ShapeGeometry::Polyline { points }
        }
    }
}

impl ShapeDraft for PathDraft {
    fn name(&self) -> &'static str {
        if self.closed { "Polygon" } else { "Polyline" }
    }

    fn on_pointer_down(
        &mut self,
        button: PointerButton,
        point: Pos2,
        ctx: &mut DraftContext<'_>,
    ) -> Option<DraftCommit> {
        if button == PointerButton::Primary {
            self.add_point(point, ctx);
        }
        None
    }

    fn on_pointer_move(&mut self, point: Pos2, ctx: &mut DraftContext<'_>) {
        let Some(&last) = self.points.last() else {
            hide_preview(ctx.surface, &mut self.pending_segment);
            return;
        };
        let pending = Drawable::Line(LineShape {
            start: last,
            end: point,
            color: ctx.preview_color,
            stroke: ctx.style.stroke_width,
        });
        show_preview(ctx, &mut self.pending_segment, pending);
    }

    fn on_key(&mut self, key: DraftKey, ctx: &mut DraftContext<'_>) -> Option<DraftCommit> {
        match key {
            DraftKey::Cancel => {
                self.reset(ctx.surface);
                None
            }
            DraftKey::Confirm => {
                let points = std::mem::take(&mut self.points);
                self.reset(ctx.surface);
                if points.len() < self.min_points() {
                    log::debug!(
                        "discarding {} with {} of {} vertices",
                        self.name(),
                        points.len(),
                        self.min_points()
                    );
                    return None;
                }
                Some(DraftCommit::new(self.geometry(points), &ctx.style))
            }
        }
    }

    fn refresh_style(&mut self, ctx: &mut DraftContext<'_>) {
        for id in &self.segments {
            if let Some(segment) = ctx.surface.get_mut(*id) {
                segment.set_stroke(ctx.style.stroke_color, ctx.style.stroke_width);
            }
        }
        if let Some(pending) = self.pending_segment.and_then(|id| ctx.surface.get_mut(id)) {
            pending.set_stroke(ctx.preview_color, ctx.style.stroke_width);
        }
    }

    fn reset(&mut self, surface: &mut RenderSurface) {
        self.points.clear();
        for id in self.segments.drain(..) {
            if let Err(err) = surface.unregister(id) {
                log::debug!("segment already gone: {}", err);
            }
        }
        hide_preview(surface, &mut self.pending_segment);
    }

    fn has_state(&self) -> bool {
        !self.points.is_empty()
    }

    fn preview_ids(&self) -> Vec<DrawableId> {
        self.segments
            .iter()
            .copied()
            .chain(self.pending_segment)
            .collect()
    }
}
