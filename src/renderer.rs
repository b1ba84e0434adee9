// src/renderer.rs
use eframe::egui::{self, Align2, Color32, FontId, Mesh, Pos2, Rect, Rounding, Shape, Stroke};

use crate::surface::{Drawable, MenuOverlay, Projection, RenderSurface};
use crate::geometry::WorldRect;

/// Maps world coordinates (y up) onto a screen rectangle (y down)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldTransform {
    projection: Projection,
    screen: Rect,
}

impl WorldTransform {
    pub fn new(projection: Projection, screen: Rect) -> Self {
        Self { projection, screen }
    }

    fn scale_x(&self) -> f32 {
        let span = self.projection.right - self.projection.left;
        if span == 0.0 { 0.0 } else { self.screen.width() / span }
    }

    fn scale_y(&self) -> f32 {
        let span = self.projection.top - self.projection.bottom;
        if span == 0.0 { 0.0 } else { self.screen.height() / span }
    }

    pub fn to_screen(&self, point: Pos2) -> Pos2 {
        Pos2::new(
            self.screen.left() + (point.x - self.projection.left) * self.scale_x(),
            self.screen.top() + (self.projection.top - point.y) * self.scale_y(),
        )
    }

    /// Convert a world length. On a canvas from [`fit_canvas`] both axes share one scale.
    pub fn to_screen_len(&self, len: f32) -> f32 {
        len * self.scale_x().min(self.scale_y())
    }

    pub fn rect_to_screen(&self, rect: &WorldRect) -> Rect {
        Rect::from_two_pos(
            self.to_screen(Pos2::new(rect.left, rect.top)),
            self.to_screen(Pos2::new(rect.right, rect.bottom)),
        )
    }
}

/// The largest rectangle centered in `available` with the projection's aspect
/// ratio, so one world unit spans the same number of points on both axes
pub fn fit_canvas(available: Rect, projection: &Projection) -> Rect {
    let world_w = projection.right - projection.left;
    let world_h = projection.top - projection.bottom;
    if world_w <= 0.0 || world_h <= 0.0 || available.height() <= 0.0 {
        return available;
    }
    let aspect = world_w / world_h;
    let size = if available.width() / available.height() > aspect {
        egui::vec2(available.height() * aspect, available.height())
    } else {
        egui::vec2(available.width(), available.width() / aspect)
    };
    Rect::from_center_size(available.center(), size)
}

/// Paints a [`RenderSurface`] into an egui painter
#[derive(Debug)]
pub struct Renderer {
    background: Color32,
}

impl Renderer {
    pub fn new(background: Color32) -> Self {
        Self { background }
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    /// Fill `rect` with the background, then paint every drawable in ascending
    /// priority order. Stroke widths are in screen points, everything else is
    /// in world units.
    pub fn render(&self, painter: &egui::Painter, rect: Rect, surface: &RenderSurface) {
        painter.rect_filled(rect, 0.0, self.background);
        let transform = WorldTransform::new(surface.params().projection, rect);
        for (_, drawable) in surface.render_order() {
            self.paint(painter, &transform, drawable);
        }
    }

    fn paint(&self, painter: &egui::Painter, t: &WorldTransform, drawable: &Drawable) {
        match drawable {
            Drawable::Line(line) => {
                painter.line_segment(
                    [t.to_screen(line.start), t.to_screen(line.end)],
                    Stroke::new(line.stroke, line.color),
                );
            }
            Drawable::Rectangle(rect) => {
                let half = egui::vec2(rect.width * 0.5, rect.height * 0.5);
                let screen = Rect::from_two_pos(
                    t.to_screen(rect.center - half),
                    t.to_screen(rect.center + half),
                );
                let rounding = Rounding::same(rect.corner_radius.map_or(0.0, |r| t.to_screen_len(r)));
                if let Some(fill) = rect.fill_color {
                    painter.rect_filled(screen, rounding, fill);
                }
                painter.rect_stroke(screen, rounding, Stroke::new(rect.stroke, rect.color));
            }
            Drawable::Circle(circle) => {
                let center = t.to_screen(circle.center);
                let radius = t.to_screen_len(circle.radius);
                if let Some(fill) = circle.fill_color {
                    painter.circle_filled(center, radius, fill);
                }
                painter.circle_stroke(center, radius, Stroke::new(circle.stroke, circle.color));
            }
            Drawable::Polygon(polygon) => {
                let points: Vec<Pos2> = polygon.points.iter().map(|p| t.to_screen(*p)).collect();
                if let Some(fill) = polygon.fill_color {
                    painter.add(Shape::mesh(fan_mesh(&points, fill)));
                }
                painter.add(Shape::closed_line(points, Stroke::new(polygon.stroke, polygon.color)));
            }
            Drawable::Polyline(polyline) => {
                let points = polyline.points.iter().map(|p| t.to_screen(*p)).collect();
                painter.add(Shape::line(points, Stroke::new(polyline.stroke, polyline.color)));
            }
            Drawable::MenuOverlay(menu) => self.paint_menu(painter, t, menu),
        }
    }

    fn paint_menu(&self, painter: &egui::Painter, t: &WorldTransform, menu: &MenuOverlay) {
        let colors = menu.colors;
        let panel = t.rect_to_screen(&menu.panel);
        painter.rect_filled(panel, 4.0, colors.panel);
        painter.rect_stroke(panel, 4.0, Stroke::new(1.0, colors.border));
        for (label, rect) in &menu.items {
            let item = t.rect_to_screen(rect);
            painter.rect_filled(item, 2.0, colors.item);
            painter.rect_stroke(item, 2.0, Stroke::new(1.0, colors.border));
            painter.text(
                item.center(),
                Align2::CENTER_CENTER,
                label,
                FontId::proportional((item.height() * 0.5).max(8.0)),
                colors.text,
            );
        }
    }
}

/// Triangle fan around the first point; fine for the convex and mildly
/// concave outlines users click together
fn fan_mesh(points: &[Pos2], color: Color32) -> Mesh {
    let mut mesh = Mesh::default();
    if points.len() < 3 {
        return mesh;
    }
    for point in points {
        mesh.colored_vertex(*point, color);
    }
    for i in 1..points.len() as u32 - 1 {
        mesh.add_triangle(0, i, i + 1);
    }
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{CanvasParams, CircleShape, LineShape, MenuColors};

    fn square_transform() -> WorldTransform {
        let screen = Rect::from_min_size(Pos2::new(10.0, 20.0), egui::vec2(800.0, 800.0));
        WorldTransform::new(Projection::default(), screen)
    }

    #[test]
    fn test_transform_flips_y() {
        let t = square_transform();
        assert_eq!(t.to_screen(Pos2::new(-5.0, 5.0)), Pos2::new(10.0, 20.0));
        assert_eq!(t.to_screen(Pos2::ZERO), Pos2::new(410.0, 420.0));
        assert_eq!(t.to_screen(Pos2::new(5.0, -5.0)), Pos2::new(810.0, 820.0));
        assert_eq!(t.to_screen_len(1.5), 120.0);
    }

    #[test]
    fn test_fit_canvas_keeps_projection_aspect() {
        let wide = Rect::from_min_size(Pos2::ZERO, egui::vec2(1600.0, 800.0));
        let canvas = fit_canvas(wide, &Projection::default());
        assert_eq!(canvas, Rect::from_min_size(Pos2::new(400.0, 0.0), egui::vec2(800.0, 800.0)));

        let tall = Rect::from_min_size(Pos2::new(10.0, 10.0), egui::vec2(300.0, 900.0));
        let canvas = fit_canvas(tall, &Projection::default());
        assert_eq!(canvas.size(), egui::vec2(300.0, 300.0));
        assert_eq!(canvas.center(), tall.center());

        let flat = Projection {
            left: -10.0,
            right: 10.0,
            bottom: -5.0,
            top: 5.0,
        };
        let canvas = fit_canvas(wide, &flat);
        assert_eq!(canvas.size(), egui::vec2(1600.0, 800.0));
    }

    #[test]
    fn test_rect_to_screen_is_normalized() {
        let t = square_transform();
        let rect = t.rect_to_screen(&WorldRect::new(-1.0, 1.0, 1.0, -1.0));
        assert_eq!(rect.min, Pos2::new(330.0, 340.0));
        assert_eq!(rect.max, Pos2::new(490.0, 500.0));
    }

    #[test]
    fn test_fan_mesh() {
        let points = [Pos2::ZERO, Pos2::new(1.0, 0.0), Pos2::new(1.0, 1.0), Pos2::new(0.0, 1.0)];
        let mesh = fan_mesh(&points, Color32::RED);
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.indices, vec![0, 1, 2, 0, 2, 3]);
        assert!(fan_mesh(&points[..2], Color32::RED).is_empty());
    }

    #[test]
    fn test_render_basics() {
        let mut surface = RenderSurface::new(CanvasParams::default());
        surface.register(
            Drawable::Line(LineShape {
                start: Pos2::ZERO,
                end: Pos2::new(1.0, 1.0),
                color: Color32::BLACK,
                stroke: 1.0,
            }),
            10_000,
        );
        surface.register(
            Drawable::Circle(CircleShape {
                center: Pos2::ZERO,
                radius: 2.0,
                color: Color32::BLACK,
                fill_color: Some(Color32::RED),
                stroke: 2.0,
            }),
            10_010,
        );
        surface.register(
            Drawable::MenuOverlay(MenuOverlay {
                panel: WorldRect::new(-2.2, 0.6, 2.2, -0.6),
                items: vec![("Fill: none".to_string(), WorldRect::new(-2.0, 0.4, 2.0, -0.4))],
                colors: MenuColors {
                    panel: Color32::GRAY,
                    border: Color32::BLACK,
                    text: Color32::BLACK,
                    item: Color32::WHITE,
                },
            }),
            i64::MAX,
        );

        let renderer = Renderer::new(Color32::WHITE);
        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            let rect = Rect::from_min_size(Pos2::ZERO, egui::vec2(800.0, 800.0));
            let painter = egui::Painter::new(ctx.clone(), egui::LayerId::background(), rect);
            renderer.render(&painter, rect, &surface);
        });
    }
}
