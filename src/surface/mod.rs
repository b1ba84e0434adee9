use std::collections::BTreeMap;

use egui::{Pos2, Vec2};
use serde::{Deserialize, Serialize};

mod drawable;

pub use drawable::{
    CircleShape, Drawable, LineShape, MenuColors, MenuOverlay, PolygonShape, PolylineShape,
    RectangleShape,
};

use crate::error::SurfaceError;
use crate::priority::Priority;

/// Opaque handle to a drawable registered on a [`RenderSurface`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DrawableId(u64);

/// The visible world rectangle of the orthographic projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            left: -5.0,
            right: 5.0,
            bottom: -5.0,
            top: 5.0,
        }
    }
}

impl Projection {
    pub fn center(&self) -> Pos2 {
        Pos2::new(
            (self.left + self.right) * 0.5,
            (self.top + self.bottom) * 0.5,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasParams {
    /// Pixel size of the area pointer coordinates are reported in
    pub display_size: [f32; 2],
    pub projection: Projection,
    /// Symbolic color name for the canvas background
    pub background: String,
}

impl Default for CanvasParams {
    fn default() -> Self {
        Self {
            display_size: [800.0, 800.0],
            projection: Projection::default(),
            background: "background".to_string(),
        }
    }
}

impl CanvasParams {
    pub fn display_size(&self) -> Vec2 {
        Vec2::new(self.display_size[0], self.display_size[1])
    }

    /// Map canvas-relative pixel coordinates into world space.
    ///
    /// Pixel y grows downward, world y grows upward. A zero-sized display maps
    /// the affected axis to the projection's left/top edge.
    pub fn pixel_to_world(&self, pixel: Pos2) -> Pos2 {
        let [width, height] = self.display_size;
        let proj = &self.projection;
        let nx = if width > 0.0 { pixel.x / width } else { 0.0 };
        let ny = if height > 0.0 { pixel.y / height } else { 0.0 };
        Pos2::new(
            proj.left + nx * (proj.right - proj.left),
            proj.top - ny * (proj.top - proj.bottom),
        )
    }
}

#[derive(Debug)]
struct Slot {
    drawable: Drawable,
    priority: Priority,
}

/// Holds every persistent drawable together with its paint priority.
///
/// Each frame, drawables are painted in ascending priority order. Handles are
/// never reused, so a stale handle can only miss.
#[derive(Debug, Default)]
pub struct RenderSurface {
    params: CanvasParams,
    slots: BTreeMap<DrawableId, Slot>,
    next_id: u64,
}

impl RenderSurface {
    pub fn new(params: CanvasParams) -> Self {
        Self {
            params,
            slots: BTreeMap::new(),
            next_id: 0,
        }
    }

    pub fn params(&self) -> &CanvasParams {
        &self.params
    }

    pub fn set_display_size(&mut self, size: Vec2) {
        self.params.display_size = [size.x, size.y];
    }

    pub fn register(&mut self, drawable: Drawable, priority: Priority) -> DrawableId {
        let id = DrawableId(self.next_id);
        self.next_id += 1;
        log::debug!("register {:?} at priority {}", id, priority);
        self.slots.insert(id, Slot { drawable, priority });
        id
    }

    pub fn unregister(&mut self, id: DrawableId) -> Result<Drawable, SurfaceError> {
        log::debug!("unregister {:?}", id);
        self.slots
            .remove(&id)
            .map(|slot| slot.drawable)
            .ok_or(SurfaceError::UnknownDrawable(id))
    }

    pub fn contains(&self, id: DrawableId) -> bool {
        self.slots.contains_key(&id)
    }

    pub fn get(&self, id: DrawableId) -> Option<&Drawable> {
        self.slots.get(&id).map(|slot| &slot.drawable)
    }

    pub fn get_mut(&mut self, id: DrawableId) -> Option<&mut Drawable> {
        self.slots.get_mut(&id).map(|slot| &mut slot.drawable)
    }

    /// Swap the drawable behind a handle, keeping its priority
    pub fn replace(&mut self, id: DrawableId, drawable: Drawable) -> Result<Drawable, SurfaceError> {
        let slot = self
            .slots
            .get_mut(&id)
            .ok_or(SurfaceError::UnknownDrawable(id))?;
        Ok(std::mem::replace(&mut slot.drawable, drawable))
    }

    pub fn priority(&self, id: DrawableId) -> Option<Priority> {
        self.slots.get(&id).map(|slot| slot.priority)
    }

    pub fn set_priority(&mut self, id: DrawableId, priority: Priority) -> Result<(), SurfaceError> {
        let slot = self
            .slots
            .get_mut(&id)
            .ok_or(SurfaceError::UnknownDrawable(id))?;
        slot.priority = priority;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Registered drawables sorted by ascending priority, ties in registration order
    pub fn render_order(&self) -> Vec<(DrawableId, &Drawable)> {
        let mut ordered: Vec<_> = self
            .slots
            .iter()
            .map(|(id, slot)| (slot.priority, *id, &slot.drawable))
            .collect();
        ordered.sort_by_key(|(priority, id, _)| (*priority, *id));
        ordered
            .into_iter()
            .map(|(_, id, drawable)| (id, drawable))
            .collect()
    }
}
