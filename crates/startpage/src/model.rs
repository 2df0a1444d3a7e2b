//! # Domain Model: Notes and Categories
//!
//! A [`Note`] is one short user-authored item on the start page: a trimmed,
//! non-empty `text`, a [`Category`], and the instant it was created.
//!
//! ## Lifecycle
//!
//! Notes are created by the add operation and destroyed by delete. Once
//! created, nothing about a note changes except its position in the
//! collection; there is no edit-in-place.
//!
//! ## Categories
//!
//! The page offers four categories (`personal`, `work`, `ideas`, `todo`).
//! Data written by other versions of the page may carry any other string; such
//! values are kept verbatim in [`Category::Other`] so a load/save cycle never
//! rewrites them, and the renderer gives them a neutral colour.
//!
//! ## Persisted Shape
//!
//! ```text
//! [
//!   { "text": "Buy milk", "category": "todo", "timestamp": "2024-03-01T09:30:00.000Z" },
//!   ...
//! ]
//! ```
//!
//! Timestamps are RFC 3339 in UTC, which also accepts what the legacy page
//! wrote with `toISOString()`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    Personal,
    Work,
    Ideas,
    Todo,
    /// Unrecognised category, preserved as written.
    Other(String),
}

impl Category {
    /// The categories offered by the category toggles, in display order.
    pub const KNOWN: [Category; 4] = [
        Category::Personal,
        Category::Work,
        Category::Ideas,
        Category::Todo,
    ];

    /// Parse a category name. Never fails: unknown names become [`Category::Other`].
    pub fn parse(name: &str) -> Self {
        match name {
            "personal" => Self::Personal,
            "work" => Self::Work,
            "ideas" => Self::Ideas,
            "todo" => Self::Todo,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Personal => "personal",
            Self::Work => "work",
            Self::Ideas => "ideas",
            Self::Todo => "todo",
            Self::Other(name) => name,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Category {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(Category::parse(&name))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub text: String,
    // Legacy entries may lack a category; they fall back to personal.
    #[serde(default)]
    pub category: Category,
    pub timestamp: DateTime<Utc>,
}

impl Note {
    /// Build a note from raw input, trimming it.
    ///
    /// Returns `None` when nothing is left after trimming.
    pub fn new(text: &str, category: Category) -> Option<Self> {
        Self::with_timestamp(text, category, Utc::now())
    }

    pub fn with_timestamp(text: &str, category: Category, timestamp: DateTime<Utc>) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            text: text.to_string(),
            category,
            timestamp,
        })
    }
}

/// Where newly added notes land in the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsertPolicy {
    /// Most recent last.
    #[default]
    Append,
    /// Most recent first.
    Prepend,
}
