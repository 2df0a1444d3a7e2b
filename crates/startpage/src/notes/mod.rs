//! # Notes
//!
//! The notes list is the one stateful component of the page: an ordered,
//! persisted sequence of [`Note`](crate::model::Note)s that the user grows with
//! the input box and rearranges with drag, swipe and delete gestures.
//!
//! ## Data Flow
//!
//! ```text
//! event (keypress, drag, swipe, click)
//!     → controller decides a mutation      (gestures/)
//!     → NoteCollection applies it          (collection.rs)
//!     → store is written through           (store/)
//!     → renderer rebuilds the list         (render.rs)
//! ```
//!
//! [`NotesBoard`](board::NotesBoard) wires these together for a host.
//!
//! ## Ordering
//!
//! Insertion order is the display order. The collection never sorts by
//! timestamp; doing so would undo every manual reorder.
//!
//! ## Identity
//!
//! A note's identity is its position. Indices are always `0..len`, and a
//! mutation at one index only shifts the notes after it.

pub mod board;
pub mod collection;

/// The mutations gesture controllers are allowed to request.
///
/// Both return whether the collection actually changed. Out-of-range indices
/// and no-op moves return `false` without touching anything.
pub trait NoteMutations {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn remove_at(&mut self, index: usize) -> bool;

    fn move_to(&mut self, source: usize, destination: usize, insert_above: bool) -> bool;
}
