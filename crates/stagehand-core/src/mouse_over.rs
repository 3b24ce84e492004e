//! Pointer ownership across overlapping widgets.
//!
//! Ownership is resolved with a one-frame delay. During frame N every widget
//! queries the owner committed at the end of frame N-1, and registers its own
//! candidacy for frame N+1. Queries therefore see the same answer no matter
//! where the querying widget sits in the update order.
//!
//! Candidacy is last-writer-wins: the widget declared last whose region
//! contains the pointer owns it, so declaration order doubles as hit-test
//! priority.

use kurbo::{Point, Rect};

use crate::widget::WidgetId;

/// Committed and in-progress pointer owner.
#[derive(Debug, Clone, Default)]
pub struct MouseOver {
    /// Owner for the current frame's queries.
    committed: Option<WidgetId>,
    /// Owner being built up by this frame's registrations.
    candidate: Option<WidgetId>,
}

impl MouseOver {
    /// Create a resolver with no owner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the pointer unconditionally, as a fallback for widgets without
    /// a finer region. Later registrations in the same frame override it.
    pub fn set_default(&mut self, id: WidgetId) {
        self.candidate = Some(id);
    }

    /// Claim the pointer if `pointer` lies inside `rect`.
    pub fn set_rect(&mut self, id: WidgetId, rect: Rect, pointer: Point) {
        if rect.contains(pointer) {
            self.candidate = Some(id);
        }
    }

    /// Whether `id` owned the pointer at the end of the previous frame.
    pub fn is_mouse_over(&self, id: WidgetId) -> bool {
        self.committed == Some(id)
    }

    /// The committed owner, if any.
    pub fn owner(&self) -> Option<WidgetId> {
        self.committed
    }

    /// Commit this frame's candidate and start an empty candidacy.
    pub fn end_frame(&mut self) {
        self.committed = self.candidate.take();
    }
}
