use egui::Pos2;

use super::{ShapeKind, rect_from_corners};
use crate::style::Style;
use crate::surface::{CircleShape, Drawable, LineShape, PolygonShape, PolylineShape, RectangleShape};

/// The immutable geometry of a committed shape.
///
/// Stored in the history so a shape can be rendered again under a new style
/// without keeping any of the draft that produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeGeometry {
    Line { start: Pos2, end: Pos2 },
    Rectangle { corner_a: Pos2, corner_b: Pos2 },
    Circle { center: Pos2, radius: f32 },
    Polygon { points: Vec<Pos2> },
    Polyline { points: Vec<Pos2> },
}

impl ShapeGeometry {
    pub fn kind(&self) -> ShapeKind {
        match self {
            ShapeGeometry::Line { .. } => ShapeKind::Line,
            ShapeGeometry::Rectangle { .. } => ShapeKind::Rectangle,
            ShapeGeometry::Circle { .. } => ShapeKind::Circle,
            ShapeGeometry::Polygon { .. } => ShapeKind::Polygon,
            ShapeGeometry::Polyline { .. } => ShapeKind::Polyline,
        }
    }

    /// Build a drawable for this geometry using the given style
    pub fn render_with(&self, style: &Style) -> Drawable {
        match self {
            ShapeGeometry::Line { start, end } => Drawable::Line(LineShape {
                start: *start,
                end: *end,
                color: style.stroke_color,
                stroke: style.stroke_width,
            }),
            ShapeGeometry::Rectangle { corner_a, corner_b } => {
                let (center, width, height) = rect_from_corners(*corner_a, *corner_b);
                Drawable::Rectangle(RectangleShape {
                    center,
                    width,
                    height,
                    corner_radius: style.rounding(),
                    color: style.stroke_color,
                    fill_color: style.fill_color,
                    stroke: style.stroke_width,
                })
            }
            ShapeGeometry::Circle { center, radius } => Drawable::Circle(CircleShape {
                center: *center,
                radius: *radius,
                color: style.stroke_color,
                fill_color: style.fill_color,
                stroke: style.stroke_width,
            }),
            ShapeGeometry::Polygon { points } => Drawable::Polygon(PolygonShape {
                points: points.clone(),
                color: style.stroke_color,
                fill_color: style.fill_color,
                stroke: style.stroke_width,
            }),
            ShapeGeometry::Polyline { points } => Drawable::Polyline(PolylineShape {
                points: points.clone(),
                color: style.stroke_color,
                stroke: style.stroke_width,
            }),
        }
    }
}
