use egui::Pos2;

/// Rectangle in world space, where y grows upward.
///
/// `top >= bottom` and `right >= left` for any rectangle produced by menu layout.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WorldRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl WorldRect {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn from_center_size(center: Pos2, width: f32, height: f32) -> Self {
        Self {
            left: center.x - width * 0.5,
            top: center.y + height * 0.5,
            right: center.x + width * 0.5,
            bottom: center.y - height * 0.5,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.top - self.bottom
    }

    pub fn center(&self) -> Pos2 {
        Pos2::new(
            self.left + self.width() * 0.5,
            self.bottom + self.height() * 0.5,
        )
    }

    /// Edges are inclusive
    pub fn contains(&self, point: Pos2) -> bool {
        point.x >= self.left
            && point.x <= self.right
            && point.y <= self.top
            && point.y >= self.bottom
    }

    pub fn expand(&self, amount: f32) -> Self {
        Self {
            left: self.left - amount,
            top: self.top + amount,
            right: self.right + amount,
            bottom: self.bottom - amount,
        }
    }
}
