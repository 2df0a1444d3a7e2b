use super::{SwipeEndEvent, SwipeStartEvent};
use crate::notes::NoteMutations;

/// Logical pixels a finger must travel left to delete a note.
pub const DEFAULT_SWIPE_THRESHOLD: f64 = 75.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeSession {
    pub start_x: f64,
    pub index: usize,
}

/// Swipe-left-to-delete.
///
/// Only a leftward swipe strictly longer than the threshold deletes; a
/// rightward swipe of any length does nothing.
#[derive(Debug)]
pub struct SwipeController {
    threshold: f64,
    session: Option<SwipeSession>,
}

impl Default for SwipeController {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD)
    }
}

impl SwipeController {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            session: None,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn session(&self) -> Option<SwipeSession> {
        self.session
    }

    pub fn touch_start(&mut self, event: SwipeStartEvent) {
        self.session = Some(SwipeSession {
            start_x: event.x,
            index: event.index,
        });
    }

    /// Finish the touch at `end_x`. Returns whether a note was deleted.
    pub fn touch_end<N: NoteMutations + ?Sized>(&mut self, end_x: f64, notes: &mut N) -> bool {
        let Some(session) = self.session.take() else {
            return false;
        };
        self.apply(
            SwipeEndEvent {
                delta_x: session.start_x - end_x,
                index: session.index,
            },
            notes,
        )
    }

    /// Apply a completed swipe.
    pub fn apply<N: NoteMutations + ?Sized>(&self, event: SwipeEndEvent, notes: &mut N) -> bool {
        if event.delta_x <= self.threshold {
            return false;
        }
        let removed = notes.remove_at(event.index);
        log::debug!(
            "event=swipe_delete module=gestures index={} delta_x={} removed={}",
            event.index,
            event.delta_x,
            removed
        );
        removed
    }

    pub fn cancel(&mut self) {
        self.session = None;
    }
}
