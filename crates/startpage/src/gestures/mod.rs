//! # Gestures
//!
//! Typed gesture events and the two controllers that turn them into note
//! mutations. Hosts translate their native pointer/touch events into these
//! types; nothing here knows about elements or the DOM.
//!
//! - [`drag::DragController`]: pointer drag-and-drop reordering.
//! - [`swipe::SwipeController`]: swipe-left-to-delete on touch screens.
//!
//! Controllers hold only transient session state. They receive the collection
//! as `&mut impl NoteMutations` per event and never own it.
//!
//! Drag and swipe sessions on the same note are not reconciled: whichever
//! gesture's terminal event arrives first decides the mutation, and the other
//! then targets whatever sits at its recorded index.

pub mod drag;
pub mod swipe;

/// Vertical extent of a target note on screen, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetBounds {
    pub top: f64,
    pub height: f64,
}

impl TargetBounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn midpoint(&self) -> f64 {
        self.top + self.height / 2.0
    }

    /// Whether a pointer at `pointer_y` is in the upper half.
    pub fn is_upper_half(&self, pointer_y: f64) -> bool {
        pointer_y < self.midpoint()
    }
}

/// Which half of the hovered note the pointer is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropHalf {
    Top,
    Bottom,
}

impl DropHalf {
    pub fn from_pointer(bounds: TargetBounds, pointer_y: f64) -> Self {
        if bounds.is_upper_half(pointer_y) {
            Self::Top
        } else {
            Self::Bottom
        }
    }

    pub fn insert_above(self) -> bool {
        matches!(self, Self::Top)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragStartEvent {
    pub source_index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragOverEvent {
    pub target_index: usize,
    pub pointer_y: f64,
    pub bounds: TargetBounds,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropEvent {
    pub target_index: usize,
    pub insert_above: bool,
}

impl DropEvent {
    /// Build a drop from the pointer position over the target's bounds.
    pub fn from_pointer(target_index: usize, pointer_y: f64, bounds: TargetBounds) -> Self {
        Self {
            target_index,
            insert_above: bounds.is_upper_half(pointer_y),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeStartEvent {
    pub index: usize,
    pub x: f64,
}

/// A finished swipe: positive `delta_x` means the finger moved left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeEndEvent {
    pub delta_x: f64,
    pub index: usize,
}
