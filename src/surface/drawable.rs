use egui::{Color32, Pos2};

use crate::geometry::WorldRect;

#[derive(Debug, Clone, PartialEq)]
pub struct LineShape {
    pub start: Pos2,
    pub end: Pos2,
    pub color: Color32,
    pub stroke: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RectangleShape {
    pub center: Pos2,
    pub width: f32,
    pub height: f32,
    pub corner_radius: Option<f32>,
    pub color: Color32,
    pub fill_color: Option<Color32>,
    pub stroke: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CircleShape {
    pub center: Pos2,
    pub radius: f32,
    pub color: Color32,
    pub fill_color: Option<Color32>,
    pub stroke: f32,
}

/// Closed outline, filled as a triangle fan around the first point
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonShape {
    pub points: Vec<Pos2>,
    pub color: Color32,
    pub fill_color: Option<Color32>,
    pub stroke: f32,
}

/// Open outline
#[derive(Debug, Clone, PartialEq)]
pub struct PolylineShape {
    pub points: Vec<Pos2>,
    pub color: Color32,
    pub stroke: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuColors {
    pub panel: Color32,
    pub border: Color32,
    pub text: Color32,
    pub item: Color32,
}

/// Snapshot of a visible menu, ready to paint
#[derive(Debug, Clone, PartialEq)]
pub struct MenuOverlay {
    pub panel: WorldRect,
    pub items: Vec<(String, WorldRect)>,
    pub colors: MenuColors,
}

/// Everything the surface knows how to paint
#[derive(Debug, Clone, PartialEq)]
pub enum Drawable {
    Line(LineShape),
    Rectangle(RectangleShape),
    Circle(CircleShape),
    Polygon(PolygonShape),
    Polyline(PolylineShape),
    MenuOverlay(MenuOverlay),
}

impl Drawable {
    pub fn stroke_color(&self) -> Option<Color32> {
        match self {
            Drawable::Line(line) => Some(line.color),
            Drawable::Rectangle(rect) => Some(rect.color),
            Drawable::Circle(circle) => Some(circle.color),
            Drawable::Polygon(polygon) => Some(polygon.color),
            Drawable::Polyline(polyline) => Some(polyline.color),
            Drawable::MenuOverlay(_) => None,
        }
    }

    pub fn stroke_width(&self) -> Option<f32> {
        match self {
            Drawable::Line(line) => Some(line.stroke),
            Drawable::Rectangle(rect) => Some(rect.stroke),
            Drawable::Circle(circle) => Some(circle.stroke),
            Drawable::Polygon(polygon) => Some(polygon.stroke),
            Drawable::Polyline(polyline) => Some(polyline.stroke),
            Drawable::MenuOverlay(_) => None,
        }
    }

    pub fn fill_color(&self) -> Option<Color32> {
        match self {
            Drawable::Rectangle(rect) => rect.fill_color,
            Drawable::Circle(circle) => circle.fill_color,
            Drawable::Polygon(polygon) => polygon.fill_color,
            _ => None,
        }
    }

    /// Restyle the outline in place; the menu overlay is left untouched
    pub fn set_stroke(&mut self, color: Color32, width: f32) {
        match self {
            Drawable::Line(line) => {
                line.color = color;
                line.stroke = width;
            }
            Drawable::Rectangle(rect) => {
                rect.color = color;
                rect.stroke = width;
            }
            Drawable::Circle(circle) => {
                circle.color = color;
                circle.stroke = width;
            }
            Drawable::Polygon(polygon) => {
                polygon.color = color;
                polygon.stroke = width;
            }
            Drawable::Polyline(polyline) => {
                polyline.color = color;
                polyline.stroke = width;
            }
            Drawable::MenuOverlay(_) => {}
        }
    }
}
