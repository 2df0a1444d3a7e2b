//! Light/dark theme: follows the time of day until the user toggles it.
//!
//! The manual choice is persisted under the theme key as `"light"` or
//! `"dark"`; no stored value (or an unreadable one) means automatic mode.

use crate::config::ThemeConfig;
use crate::store::{guarded_get, guarded_set, KeyValueStore};
use log::warn;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Icon on the switcher: it shows the theme a click would switch to.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Light => "fas fa-moon",
            Self::Dark => "fas fa-sun",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Auto,
    Manual(Theme),
}

pub struct ThemeController<S: KeyValueStore> {
    store: S,
    key: String,
    day_starts_at: u32,
    night_starts_at: u32,
    mode: ThemeMode,
    current: Theme,
}

impl<S: KeyValueStore> ThemeController<S> {
    /// Restore the persisted mode and resolve the theme for `hour`.
    pub fn init(store: S, config: &ThemeConfig, hour: u32) -> Self {
        let mode = match guarded_get(&store, &config.storage_key) {
            None => ThemeMode::Auto,
            Some(raw) => match Theme::parse(&raw) {
                Some(theme) => ThemeMode::Manual(theme),
                None => {
                    warn!(
                        "event=theme_load module=theme status=corrupt key={} value_len={}",
                        config.storage_key,
                        raw.len()
                    );
                    ThemeMode::Auto
                }
            },
        };
        let mut controller = Self {
            store,
            key: config.storage_key.clone(),
            day_starts_at: config.day_starts_at,
            night_starts_at: config.night_starts_at,
            mode,
            current: Theme::Light,
        };
        controller.current = controller.resolve(hour);
        controller
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Theme the schedule picks for `hour`.
    pub fn scheduled(&self, hour: u32) -> Theme {
        let in_day = if self.day_starts_at <= self.night_starts_at {
            hour >= self.day_starts_at && hour < self.night_starts_at
        } else {
            // Day window wraps past midnight.
            hour >= self.day_starts_at || hour < self.night_starts_at
        };
        if in_day {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    fn resolve(&self, hour: u32) -> Theme {
        match self.mode {
            ThemeMode::Manual(theme) => theme,
            ThemeMode::Auto => self.scheduled(hour),
        }
    }

    /// The switcher was clicked: flip and remember the choice.
    pub fn toggle(&mut self) -> Theme {
        let next = self.current.flipped();
        self.mode = ThemeMode::Manual(next);
        self.current = next;
        guarded_set(&self.store, &self.key, next.as_str());
        next
    }

    /// Drop the manual choice and go back to the schedule.
    pub fn follow_schedule(&mut self, hour: u32) -> Theme {
        self.mode = ThemeMode::Auto;
        if let Err(err) = self.store.remove(&self.key) {
            warn!(
                "event=theme_reset module=theme status=error key={} err={}",
                self.key, err
            );
        }
        self.current = self.resolve(hour);
        self.current
    }

    /// Periodic re-check. Returns the new theme only when it changed.
    pub fn recheck(&mut self, hour: u32) -> Option<Theme> {
        let next = self.resolve(hour);
        if next == self.current {
            return None;
        }
        self.current = next;
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;
    use std::rc::Rc;

    fn controller(store: Rc<MemBackend>, hour: u32) -> ThemeController<Rc<MemBackend>> {
        ThemeController::init(store, &ThemeConfig::default(), hour)
    }

    #[test]
    fn test_auto_follows_schedule() {
        let store = Rc::new(MemBackend::new());
        assert_eq!(controller(Rc::clone(&store), 6).current(), Theme::Dark);
        assert_eq!(controller(Rc::clone(&store), 7).current(), Theme::Light);
        assert_eq!(controller(Rc::clone(&store), 18).current(), Theme::Light);
        assert_eq!(controller(store, 19).current(), Theme::Dark);
    }

    #[test]
    fn test_recheck_reports_only_changes() {
        let mut theme = controller(Rc::new(MemBackend::new()), 10);
        assert_eq!(theme.recheck(11), None);
        assert_eq!(theme.recheck(20), Some(Theme::Dark));
        assert_eq!(theme.recheck(21), None);
    }

    #[test]
    fn test_toggle_persists_and_overrides_schedule() {
        let store = Rc::new(MemBackend::new());
        let mut theme = controller(Rc::clone(&store), 10);
        assert_eq!(theme.toggle(), Theme::Dark);
        assert_eq!(store.get("theme").unwrap(), Some("dark".to_string()));
        assert_eq!(theme.recheck(12), None);

        let reloaded = controller(store, 12);
        assert_eq!(reloaded.mode(), ThemeMode::Manual(Theme::Dark));
        assert_eq!(reloaded.current(), Theme::Dark);
    }

    #[test]
    fn test_follow_schedule_clears_override() {
        let store = Rc::new(MemBackend::new());
        let mut theme = controller(Rc::clone(&store), 22);
        theme.toggle();
        assert_eq!(theme.follow_schedule(22), Theme::Dark);
        assert_eq!(store.get("theme").unwrap(), None);
        assert_eq!(theme.mode(), ThemeMode::Auto);
    }

    #[test]
    fn test_corrupt_value_falls_back_to_auto() {
        let store = Rc::new(MemBackend::new());
        store.set("theme", "purple").unwrap();
        let theme = controller(store, 9);
        assert_eq!(theme.mode(), ThemeMode::Auto);
        assert_eq!(theme.current(), Theme::Light);
    }

    #[test]
    fn test_wrapping_day_window() {
        let config = ThemeConfig {
            day_starts_at: 22,
            night_starts_at: 6,
            ..Default::default()
        };
        let theme = ThemeController::init(MemBackend::new(), &config, 23);
        assert_eq!(theme.current(), Theme::Light);
        assert_eq!(theme.scheduled(12), Theme::Dark);
    }

    #[test]
    fn test_toggle_icon() {
        assert_eq!(Theme::Light.toggle_icon(), "fas fa-moon");
        assert_eq!(Theme::Dark.toggle_icon(), "fas fa-sun");
    }
}
