//! # Render Projection
//!
//! Maps the current notes to the rows a host draws. Projection is a pure
//! function of the collection; the host owns the elements.
//!
//! Each row carries its **collection index** as identity, and gesture events
//! coming back from the host target that index. Because an index changes
//! whenever a note before it is added, removed or moved, the whole list is
//! rebuilt after every mutation. Lists stay in the tens of items, so there is
//! no keyed diffing.

use crate::model::{Category, Note};
use chrono::{DateTime, Local, TimeZone, Utc};

/// Badge colour for notes whose category the page does not offer.
pub const FALLBACK_COLOR: &str = "rgba(158, 158, 158, 0.2)";

/// One displayed note card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteView {
    pub index: usize,
    pub text: String,
    pub category: String,
    pub color: &'static str,
    pub timestamp: DateTime<Utc>,
    pub timestamp_label: String,
}

/// Host side of the projection: receives a full rebuild after each mutation.
pub trait Renderer {
    fn rebuild(&mut self, views: &[NoteView]);
}

pub fn category_color(category: &Category) -> &'static str {
    match category {
        Category::Personal => "rgba(76, 175, 80, 0.2)",
        Category::Work => "rgba(33, 150, 243, 0.2)",
        Category::Ideas => "rgba(156, 39, 176, 0.2)",
        Category::Todo => "rgba(255, 152, 0, 0.2)",
        Category::Other(_) => FALLBACK_COLOR,
    }
}

/// Project notes with timestamps shown in the local time zone.
pub fn project(notes: &[Note]) -> Vec<NoteView> {
    project_in(notes, &Local)
}

/// Project notes with timestamps shown in `tz`.
pub fn project_in<Tz>(notes: &[Note], tz: &Tz) -> Vec<NoteView>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    notes
        .iter()
        .enumerate()
        .map(|(index, note)| NoteView {
            index,
            text: note.text.clone(),
            category: note.category.as_str().to_string(),
            color: category_color(&note.category),
            timestamp: note.timestamp,
            timestamp_label: note
                .timestamp
                .with_timezone(tz)
                .format("%-m/%-d/%Y, %-I:%M:%S %p")
                .to_string(),
        })
        .collect()
}

/// Renderer that keeps the most recent frame, for headless hosts and tests.
#[derive(Debug, Default)]
pub struct LastFrame {
    pub views: Vec<NoteView>,
    pub rebuilds: usize,
}

impl LastFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.views.iter().map(|v| v.text.as_str()).collect()
    }
}

impl Renderer for LastFrame {
    fn rebuild(&mut self, views: &[NoteView]) {
        self.views = views.to_vec();
        self.rebuilds += 1;
    }
}
