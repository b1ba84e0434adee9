//! Paint priority bands.
//!
//! Committed shapes, live previews and the menu overlay each own a disjoint
//! range, so the paint order is always committed < preview < menu no matter
//! when a drawable was created.

pub type Priority = i64;

pub const COMMITTED_PRIORITY_BASE: Priority = 10_000;
pub const COMMITTED_PRIORITY_STEP: Priority = 10;
pub const PREVIEW_PRIORITY_BASE: Priority = 1_000_000_000;
pub const MENU_PRIORITY: Priority = Priority::MAX;

/// Hands out strictly increasing priorities for committed shapes
#[derive(Debug, Clone)]
pub struct CommittedPriorities {
    next: Priority,
}

impl Default for CommittedPriorities {
    fn default() -> Self {
        Self {
            next: COMMITTED_PRIORITY_BASE,
        }
    }
}

impl CommittedPriorities {
    pub fn allocate(&mut self) -> Priority {
        let priority = self.next;
        self.next += COMMITTED_PRIORITY_STEP;
        debug_assert!(self.next < PREVIEW_PRIORITY_BASE);
        priority
    }
}

/// Hands out priorities for live-preview drawables, above every committed shape
#[derive(Debug, Clone, Default)]
pub struct PreviewPriorities {
    counter: Priority,
}

impl PreviewPriorities {
    pub fn allocate(&mut self) -> Priority {
        let priority = PREVIEW_PRIORITY_BASE + self.counter;
        self.counter += 1;
        debug_assert!(priority < MENU_PRIORITY);
        priority
    }
}

pub fn is_committed(priority: Priority) -> bool {
    (COMMITTED_PRIORITY_BASE..PREVIEW_PRIORITY_BASE).contains(&priority)
}

pub fn is_preview(priority: Priority) -> bool {
    (PREVIEW_PRIORITY_BASE..MENU_PRIORITY).contains(&priority)
}
