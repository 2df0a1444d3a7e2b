//! Navigation menus that open on hover (desktop) or tap (mobile).
//!
//! At most one menu is open at a time. Opening a menu counts as activity; a
//! periodic heartbeat closes menus left open too long and resets every menu
//! after a long idle period, which keeps menus from getting stuck open when
//! pointer events go missing (tab switches, sleep).

use crate::config::DropdownConfig;
use chrono::{DateTime, Duration, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
    pub changed_at: DateTime<Utc>,
}

/// What a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The top-level link of nav item `i`.
    NavLink(usize),
    /// An entry inside the menu of nav item `i`.
    MenuEntry(usize),
    /// Somewhere else inside nav item `i`.
    NavItem(usize),
    /// Anywhere outside the navigation.
    Outside,
}

#[derive(Debug, Clone)]
pub struct DropdownSet {
    menus: Vec<MenuState>,
    mobile_breakpoint: u32,
    stale_after: Duration,
    idle_refresh_after: Duration,
    last_activity: DateTime<Utc>,
}

impl DropdownSet {
    pub fn new(count: usize, config: &DropdownConfig, now: DateTime<Utc>) -> Self {
        Self {
            menus: vec![
                MenuState {
                    open: false,
                    changed_at: now,
                };
                count
            ],
            mobile_breakpoint: config.mobile_breakpoint,
            stale_after: Duration::milliseconds(config.stale_after_ms),
            idle_refresh_after: Duration::milliseconds(config.idle_refresh_after_ms),
            last_activity: now,
        }
    }

    pub fn len(&self) -> usize {
        self.menus.len()
    }

    pub fn is_empty(&self) -> bool {
        self.menus.is_empty()
    }

    pub fn is_open(&self, item: usize) -> bool {
        self.menus.get(item).is_some_and(|m| m.open)
    }

    pub fn open_item(&self) -> Option<usize> {
        self.menus.iter().position(|m| m.open)
    }

    pub fn is_mobile(&self, viewport_width: u32) -> bool {
        viewport_width <= self.mobile_breakpoint
    }

    pub fn show(&mut self, item: usize, now: DateTime<Utc>) -> bool {
        if item >= self.menus.len() {
            return false;
        }
        for (i, menu) in self.menus.iter_mut().enumerate() {
            if i != item && menu.open {
                menu.open = false;
                menu.changed_at = now;
            }
        }
        self.menus[item] = MenuState {
            open: true,
            changed_at: now,
        };
        self.last_activity = now;
        true
    }

    pub fn hide(&mut self, item: usize, now: DateTime<Utc>) -> bool {
        match self.menus.get_mut(item) {
            Some(menu) => {
                let was_open = menu.open;
                *menu = MenuState {
                    open: false,
                    changed_at: now,
                };
                was_open
            }
            None => false,
        }
    }

    /// Close every menu. Returns the items that were open.
    pub fn hide_all(&mut self, now: DateTime<Utc>) -> Vec<usize> {
        (0..self.menus.len())
            .filter(|&i| self.hide(i, now))
            .collect()
    }

    pub fn pointer_over(&mut self, item: usize, viewport_width: u32, now: DateTime<Utc>) {
        if !self.is_mobile(viewport_width) && !self.is_open(item) {
            self.show(item, now);
        }
    }

    /// Pointer left nav item `item`; `into_same_item` when it moved onto one of
    /// the item's own children.
    pub fn pointer_out(&mut self, item: usize, into_same_item: bool, viewport_width: u32, now: DateTime<Utc>) {
        if !self.is_mobile(viewport_width) && !into_same_item && self.is_open(item) {
            self.hide(item, now);
        }
    }

    pub fn click(&mut self, target: ClickTarget, viewport_width: u32, now: DateTime<Utc>) {
        match target {
            ClickTarget::MenuEntry(item) => {
                self.hide(item, now);
            }
            ClickTarget::NavLink(item) if self.is_mobile(viewport_width) => {
                if self.is_open(item) {
                    self.hide(item, now);
                } else {
                    self.show(item, now);
                }
            }
            ClickTarget::NavLink(_) | ClickTarget::NavItem(_) => {}
            ClickTarget::Outside => {
                self.hide_all(now);
            }
        }
    }

    pub fn escape(&mut self, now: DateTime<Utc>) -> Vec<usize> {
        self.hide_all(now)
    }

    pub fn window_blur(&mut self, now: DateTime<Utc>) -> Vec<usize> {
        self.hide_all(now)
    }

    /// Window focus or tab visibility regained: start over with every menu closed.
    pub fn reinitialize(&mut self, now: DateTime<Utc>) {
        for menu in &mut self.menus {
            *menu = MenuState {
                open: false,
                changed_at: now,
            };
        }
        self.last_activity = now;
    }

    /// Periodic check. Returns the items it closed.
    pub fn heartbeat(&mut self, now: DateTime<Utc>) -> Vec<usize> {
        let mut closed = Vec::new();
        if now - self.last_activity > self.idle_refresh_after {
            closed.extend(self.hide_all(now));
        }
        for i in 0..self.menus.len() {
            let menu = self.menus[i];
            if menu.open && now - menu.changed_at > self.stale_after && self.hide(i, now) {
                closed.push(i);
            }
        }
        if !closed.is_empty() {
            log::debug!(
                "event=dropdown_heartbeat module=dropdown closed={:?}",
                closed
            );
        }
        closed
    }
}
