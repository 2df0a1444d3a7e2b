use super::{DragOverEvent, DragStartEvent, DropEvent, DropHalf};
use crate::notes::NoteMutations;

/// Transient state of one drag, alive between drag-start and drop/cancel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    pub source_index: usize,
    pub hover: Option<InsertionMarker>,
}

/// Where the insertion line should be drawn while dragging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertionMarker {
    pub target_index: usize,
    pub half: DropHalf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

/// Drag-and-drop reordering: `Idle → Dragging → Idle`.
///
/// A cancelled drag returns to `Idle` without touching the collection. At most
/// one session exists; a second drag-start while dragging is ignored since the
/// dragged element holds the pointer.
#[derive(Debug, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// Index being dragged, if any. Hosts use it to style the source note.
    pub fn source_index(&self) -> Option<usize> {
        match self.state {
            DragState::Dragging(session) => Some(session.source_index),
            DragState::Idle => None,
        }
    }

    pub fn drag_start(&mut self, event: DragStartEvent) {
        if let DragState::Dragging(session) = self.state {
            log::debug!(
                "event=drag_start module=gestures status=ignored active_source={} new_source={}",
                session.source_index,
                event.source_index
            );
            return;
        }
        self.state = DragState::Dragging(DragSession {
            source_index: event.source_index,
            hover: None,
        });
    }

    /// Track the pointer over a candidate target.
    ///
    /// Returns the marker to draw, or `None` when idle or hovering the source
    /// note itself.
    pub fn drag_over(&mut self, event: DragOverEvent) -> Option<InsertionMarker> {
        let DragState::Dragging(session) = &mut self.state else {
            return None;
        };
        if event.target_index == session.source_index {
            session.hover = None;
            return None;
        }
        let marker = InsertionMarker {
            target_index: event.target_index,
            half: DropHalf::from_pointer(event.bounds, event.pointer_y),
        };
        session.hover = Some(marker);
        Some(marker)
    }

    /// Commit the drag. Returns whether the collection changed.
    pub fn drop<N: NoteMutations + ?Sized>(&mut self, event: DropEvent, notes: &mut N) -> bool {
        let DragState::Dragging(session) = std::mem::take(&mut self.state) else {
            return false;
        };
        if event.target_index == session.source_index {
            return false;
        }
        let moved = notes.move_to(session.source_index, event.target_index, event.insert_above);
        log::debug!(
            "event=drop module=gestures source={} target={} insert_above={} moved={}",
            session.source_index,
            event.target_index,
            event.insert_above,
            moved
        );
        moved
    }

    /// Drop on the last hovered target, using the half recorded by `drag_over`.
    pub fn drop_on_hover<N: NoteMutations + ?Sized>(&mut self, notes: &mut N) -> bool {
        let hover = match self.state {
            DragState::Dragging(DragSession {
                hover: Some(marker),
                ..
            }) => marker,
            _ => {
                self.cancel();
                return false;
            }
        };
        self.drop(
            DropEvent {
                target_index: hover.target_index,
                insert_above: hover.half.insert_above(),
            },
            notes,
        )
    }

    /// Drag ended without a drop (Escape, released outside any note).
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }
}
