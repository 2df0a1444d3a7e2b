//! # Startpage Architecture
//!
//! Startpage is the **state core of a browser start page**: an ordered note
//! list with drag-and-drop and swipe-to-delete, plus the small widgets around
//! it (clock, theme, image rotator, search box, dropdown menus, memo pad). It
//! owns no DOM and no event loop. A host translates its UI events into calls
//! on [`page::StartPage`] and paints whatever the [`render::Renderer`] hands it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Page Facade (page.rs)                                      │
//! │  - Wires config, store and widgets together                 │
//! │  - One tick() for every timer                               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Notes Board (notes/board.rs)   │  Widgets (widgets/*.rs)   │
//! │  - Gesture events → mutations   │  - Clock, theme, images   │
//! │  - Re-render after each change  │  - Search, menus, memo    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Collection (notes/collection.rs) + Gestures (gestures/)    │
//! │  - The ordered list, add / remove_at / move_to              │
//! │  - Drag and swipe state machines                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - KeyValueStore trait                                      │
//! │  - FsBackend (production), MemBackend (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Persistence
//!
//! Every successful note mutation rewrites the whole list under one key. The
//! in-memory list is authoritative: a failed write is logged and the session
//! carries on. A missing or unreadable value loads as an empty list.
//!
//! ## Identity
//!
//! Notes have no id. A note is addressed by its position, and every rendered
//! view carries the index it was projected from, so a full re-render after each
//! mutation keeps gesture targets in step with the list.
//!
//! ## Testing Strategy
//!
//! - **Collection**: ordering and persistence against `MemBackend`
//! - **Gestures**: state machines against a recording `NoteMutations` mock
//! - **Board / page**: event sequences against `LastFrame`
//! - **Integration** (`tests/`): `FsBackend` round trips, scenario walks and
//!   property tests over random operation sequences

pub mod config;
pub mod error;
pub mod gestures;
pub mod logging;
pub mod model;
pub mod notes;
pub mod page;
pub mod render;
pub mod store;
pub mod widgets;
