use egui::Pos2;
use serde::{Deserialize, Serialize};

pub mod hit_testing;
mod shape;

pub use hit_testing::WorldRect;
pub use shape::ShapeGeometry;

/// The kinds of shape a user can draft and commit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Line,
    Rectangle,
    Circle,
    Polygon,
    Polyline,
}

impl ShapeKind {
    /// All kinds, in the order used by the number-key shortcuts
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::Line,
        ShapeKind::Rectangle,
        ShapeKind::Circle,
        ShapeKind::Polygon,
        ShapeKind::Polyline,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Line => "Line",
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Circle => "Circle",
            ShapeKind::Polygon => "Polygon",
            ShapeKind::Polyline => "Polyline",
        }
    }

    /// Next kind in the menu's shape cycle.
    ///
    /// The cycle covers Polygon, Rectangle, Line and Circle. Polyline is only
    /// reachable through a direct selection and leaves the cycle at Polygon.
    pub fn next(&self) -> ShapeKind {
        match self {
            ShapeKind::Polygon => ShapeKind::Rectangle,
            ShapeKind::Rectangle => ShapeKind::Line,
            ShapeKind::Line => ShapeKind::Circle,
            ShapeKind::Circle => ShapeKind::Polygon,
            ShapeKind::Polyline => ShapeKind::Polygon,
        }
    }

    pub fn supports_fill(&self) -> bool {
        matches!(
            self,
            ShapeKind::Polygon | ShapeKind::Rectangle | ShapeKind::Circle
        )
    }

    pub fn supports_corner_radius(&self) -> bool {
        matches!(self, ShapeKind::Rectangle)
    }

    /// Whether the shape-specific menu has anything to offer for this kind
    pub fn has_extra_options(&self) -> bool {
        self.supports_fill() || self.supports_corner_radius()
    }
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Euclidean distance between two world points
pub fn distance(a: Pos2, b: Pos2) -> f32 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Axis-aligned rectangle spanned by two opposite corners.
///
/// Returns `(center, width, height)`; the result does not depend on corner order.
pub fn rect_from_corners(a: Pos2, b: Pos2) -> (Pos2, f32, f32) {
    let center = Pos2::new((a.x + b.x) * 0.5, (a.y + b.y) * 0.5);
    let width = (a.x - b.x).abs();
    let height = (a.y - b.y).abs();
    (center, width, height)
}
