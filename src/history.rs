use crate::draft::DraftCommit;
use crate::geometry::{ShapeGeometry, ShapeKind};
use crate::priority::{CommittedPriorities, Priority};
use crate::style::Style;
use crate::surface::{DrawableId, RenderSurface};

/// A committed shape on the surface
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub drawable: DrawableId,
    /// Fixed at commit time, kept across rebuilds
    pub priority: Priority,
    pub kind: ShapeKind,
    pub geometry: Option<ShapeGeometry>,
}

/// Ordered list of committed shapes, supporting append, pop-last undo and
/// restyling of the most recent shape
#[derive(Debug, Default)]
pub struct ShapeHistory {
    entries: Vec<HistoryEntry>,
    priorities: CommittedPriorities,
}

impl ShapeHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the commit's drawable under the next committed priority and
    /// record it. Returns the assigned priority.
    pub fn append(&mut self, commit: DraftCommit, surface: &mut RenderSurface) -> Priority {
        let priority = self.priorities.allocate();
        let drawable = surface.register(commit.drawable, priority);
        log::info!("committed {} at priority {}", commit.kind, priority);
        self.entries.push(HistoryEntry {
            drawable,
            priority,
            kind: commit.kind,
            geometry: commit.geometry,
        });
        priority
    }

    /// Remove the most recent shape from the history and the surface.
    /// Returns false when there was nothing to undo.
    pub fn undo(&mut self, surface: &mut RenderSurface) -> bool {
        let Some(entry) = self.entries.pop() else {
            log::info!("undo requested but history is empty");
            return false;
        };
        if let Err(err) = surface.unregister(entry.drawable) {
            log::warn!("undo of {}: {}", entry.kind, err);
        }
        true
    }

    /// Redraw the most recent shape with `style`, under the same priority.
    /// Returns false when the history is empty or the shape can't be rebuilt.
    pub fn rebuild_last(&mut self, style: &Style, surface: &mut RenderSurface) -> bool {
        let Some(entry) = self.entries.last_mut() else {
            log::debug!("rebuild requested but history is empty");
            return false;
        };
        let Some(geometry) = &entry.geometry else {
            log::debug!("last {} has no stored geometry", entry.kind);
            return false;
        };
        let drawable = geometry.render_with(style);
        if surface.contains(entry.drawable) {
            if let Err(err) = surface.replace(entry.drawable, drawable) {
                log::debug!("rebuild of last {} failed: {}", entry.kind, err);
            }
        } else {
            // The old drawable vanished; put the new one back at the same priority
            entry.drawable = surface.register(drawable, entry.priority);
        }
        true
    }

    pub fn last_shape_kind(&self) -> Option<ShapeKind> {
        self.entries.last().map(|entry| entry.kind)
    }

    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn priorities(&self) -> Vec<Priority> {
        self.entries.iter().map(|entry| entry.priority).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry and unregister its drawable
    pub fn clear(&mut self, surface: &mut RenderSurface) {
        for entry in self.entries.drain(..) {
            if let Err(err) = surface.unregister(entry.drawable) {
                log::debug!("committed {} already gone: {}", entry.kind, err);
            }
        }
    }
}
