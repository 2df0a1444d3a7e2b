//! # Start Page Widgets
//!
//! The smaller behaviors around the notes list. Each is deterministic given
//! its inputs (the current time, a random source, user events) and none of
//! them touches the notes collection.
//!
//! - [`clock`]: clock line, greeting and date text.
//! - [`theme`]: automatic day/night theme with a persisted manual override.
//! - [`images`]: rotating decorative image and weekday background.
//! - [`search`]: engine selector, search URL and query history.
//! - [`dropdown`]: hover/tap navigation menus.
//! - [`memo`]: remembered free-text box.

pub mod clock;
pub mod dropdown;
pub mod images;
pub mod memo;
pub mod search;
pub mod theme;
