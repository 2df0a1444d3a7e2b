//! # Configuration
//!
//! Start page configuration is managed by [`confique`], loaded from a
//! `startpage.toml` in the page's data directory. Anything the file leaves out
//! falls back to the compiled defaults below, and a missing file is simply all
//! defaults. No environment variables are consulted.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `notes.storage_key` | `liquidGlassNotes` | Store key of the notes blob |
//! | `notes.insert_policy` | `append` | `append` or `prepend` new notes |
//! | `notes.default_category` | `personal` | Category selected at start-up |
//! | `notes.swipe_threshold` | `75.0` | Leftward swipe length that deletes |
//! | `theme.storage_key` | `theme` | Store key of the manual theme override |
//! | `theme.day_starts_at` | `7` | First hour shown in the light theme |
//! | `theme.night_starts_at` | `19` | First hour shown in the dark theme |
//! | `images.pattern` | `imgs/img{n}.png` | Image path, `{n}` counts from 1 |
//! | `images.count` | `12` | Number of rotating images |
//! | `images.rotate_secs` | `60` | Seconds before the next image |
//! | `images.swipe_threshold` | `50.0` | Swipe length that changes image |
//! | `search.history_key` | `searchHistory` | Store key of the search history |
//! | `search.history_limit` | `10` | Queries kept in history |
//! | `search.max_suggestions` | `5` | Suggestions shown while typing |
//! | `search.min_query_len` | `3` | Characters typed before suggesting |
//! | `dropdown.mobile_breakpoint` | `768` | Widest viewport using tap menus |
//! | `dropdown.stale_after_ms` | `5000` | Open menus auto-close after this |
//! | `dropdown.idle_refresh_after_ms` | `30000` | Idle time before a full reset |
//! | `memo.storage_key` | `myTextboxContent` | Store key of the memo box |

use crate::error::{Result, StartpageError};
use crate::model::{Category, InsertPolicy};
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "startpage.toml";

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct StartpageConfig {
    #[config(nested)]
    pub notes: NotesConfig,

    #[config(nested)]
    pub theme: ThemeConfig,

    #[config(nested)]
    pub images: ImagesConfig,

    #[config(nested)]
    pub search: SearchConfig,

    #[config(nested)]
    pub dropdown: DropdownConfig,

    #[config(nested)]
    pub memo: MemoConfig,
}

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NotesConfig {
    /// Store key holding the serialized notes.
    #[config(default = "liquidGlassNotes")]
    pub storage_key: String,

    /// Where new notes go: "append" (end of list) or "prepend" (top).
    #[config(default = "append")]
    pub insert_policy: InsertPolicy,

    /// Category selected when the page opens.
    #[config(default = "personal")]
    pub default_category: String,

    /// How far (logical pixels) a note must be swiped left to delete it.
    #[config(default = 75.0)]
    pub swipe_threshold: f64,
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            storage_key: "liquidGlassNotes".to_string(),
            insert_policy: InsertPolicy::Append,
            default_category: "personal".to_string(),
            swipe_threshold: 75.0,
        }
    }
}

impl NotesConfig {
    pub fn default_category(&self) -> Category {
        Category::parse(self.default_category.trim())
    }
}

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ThemeConfig {
    /// Store key of the manual light/dark override.
    #[config(default = "theme")]
    pub storage_key: String,

    /// Hour (0-23) the light theme starts in automatic mode.
    #[config(default = 7)]
    pub day_starts_at: u32,

    /// Hour (0-23) the dark theme starts in automatic mode.
    #[config(default = 19)]
    pub night_starts_at: u32,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme".to_string(),
            day_starts_at: 7,
            night_starts_at: 19,
        }
    }
}

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ImagesConfig {
    /// Image path template; `{n}` is replaced by 1..=count.
    #[config(default = "imgs/img{n}.png")]
    pub pattern: String,

    #[config(default = 12)]
    pub count: usize,

    /// Seconds an image stays up before rotating.
    #[config(default = 60)]
    pub rotate_secs: u64,

    #[config(default = 50.0)]
    pub swipe_threshold: f64,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            pattern: "imgs/img{n}.png".to_string(),
            count: 12,
            rotate_secs: 60,
            swipe_threshold: 50.0,
        }
    }
}

impl ImagesConfig {
    pub fn image_paths(&self) -> Vec<String> {
        (1..=self.count)
            .map(|n| self.pattern.replace("{n}", &n.to_string()))
            .collect()
    }
}

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    #[config(default = "searchHistory")]
    pub history_key: String,

    #[config(default = 10)]
    pub history_limit: usize,

    #[config(default = 5)]
    pub max_suggestions: usize,

    /// Minimum trimmed input length before suggestions appear.
    #[config(default = 3)]
    pub min_query_len: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            history_key: "searchHistory".to_string(),
            history_limit: 10,
            max_suggestions: 5,
            min_query_len: 3,
        }
    }
}

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DropdownConfig {
    /// Viewports at most this wide open menus by tapping instead of hovering.
    #[config(default = 768)]
    pub mobile_breakpoint: u32,

    #[config(default = 5000)]
    pub stale_after_ms: i64,

    #[config(default = 30000)]
    pub idle_refresh_after_ms: i64,
}

impl Default for DropdownConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint: 768,
            stale_after_ms: 5000,
            idle_refresh_after_ms: 30000,
        }
    }
}

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MemoConfig {
    #[config(default = "myTextboxContent")]
    pub storage_key: String,
}

impl Default for MemoConfig {
    fn default() -> Self {
        Self {
            storage_key: "myTextboxContent".to_string(),
        }
    }
}

impl StartpageConfig {
    /// Load `startpage.toml` from `dir`, layered over the defaults.
    pub fn load(dir: &Path) -> Result<Self> {
        Self::builder()
            .file(dir.join(CONFIG_FILE))
            .load()
            .map_err(|e| StartpageError::Config(e.to_string()))
    }

    /// A commented sample `startpage.toml`.
    pub fn template() -> String {
        confique::toml::template::<StartpageConfig>(confique::toml::FormatOptions::default())
    }
}

/// OS-appropriate data directory for a host that does not choose one.
pub fn default_data_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "startpage").map(|dirs| dirs.data_dir().to_path_buf())
}
