//! # Page Facade
//!
//! [`StartPage`] is the single entry point a host wires its events into. It
//! owns one shared store and hands a clone of the `Rc` to each persisted
//! widget, so the notes, theme, search history and memo all live side by side
//! in the same key-value store under their own keys.
//!
//! ## Lifecycle
//!
//! `init` on page load; there is no teardown, the page is the process
//! boundary. Host timers all funnel into [`StartPage::tick`], which updates
//! the clock, re-checks the theme, rotates the image and runs the menu
//! heartbeat. Ticks never reach the notes board, so timer callbacks cannot
//! interleave with a note mutation.
//!
//! ## Time
//!
//! The facade takes `DateTime<FixedOffset>`: wall-clock fields (hour, weekday)
//! drive the clock and theme, the instant drives the rotation timers. Hosts
//! pass `Local::now().fixed_offset()`.

use crate::config::StartpageConfig;
use crate::error::Result;
use crate::model::InsertPolicy;
use crate::notes::board::NotesBoard;
use crate::notes::collection::NoteCollection;
use crate::gestures::swipe::SwipeController;
use crate::render::Renderer;
use crate::store::fs_backend::FsBackend;
use crate::store::KeyValueStore;
use crate::widgets::clock::ClockFace;
use crate::widgets::dropdown::DropdownSet;
use crate::widgets::images::{background_on, ImageRotator};
use crate::widgets::memo::Memo;
use crate::widgets::search::{default_engines, SearchBox};
use crate::widgets::theme::{Theme, ThemeController};
use chrono::{DateTime, FixedOffset, Timelike, Utc};
use rand::Rng;
use std::path::Path;
use std::rc::Rc;

/// Directory under the data dir holding the key-value files.
pub const STORAGE_DIR: &str = "storage";

/// What changed on a timer tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickReport {
    pub clock: ClockFace,
    pub theme_changed: Option<Theme>,
    pub image: Option<String>,
    pub menus_closed: Vec<usize>,
}

/// Result of a pull-to-refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshReport {
    pub background: String,
    pub clock: ClockFace,
    pub image: Option<String>,
}

pub struct StartPage<S: KeyValueStore, R: Renderer> {
    config: StartpageConfig,
    store: Rc<S>,
    notes: NotesBoard<Rc<S>, R>,
    theme: ThemeController<Rc<S>>,
    search: SearchBox<Rc<S>>,
    memo: Memo<Rc<S>>,
    images: ImageRotator,
    menus: DropdownSet,
}

impl<R: Renderer> StartPage<FsBackend, R> {
    /// Open a page whose config and storage live under `data_dir`.
    pub fn open<G: Rng>(
        data_dir: &Path,
        renderer: R,
        nav_items: usize,
        rng: &mut G,
        now: DateTime<FixedOffset>,
    ) -> Result<Self> {
        let config = StartpageConfig::load(data_dir)?;
        let store = FsBackend::new(data_dir.join(STORAGE_DIR));
        Ok(Self::init(store, renderer, config, nav_items, rng, now))
    }
}

impl<S: KeyValueStore, R: Renderer> StartPage<S, R> {
    pub fn init<G: Rng>(
        store: S,
        renderer: R,
        config: StartpageConfig,
        nav_items: usize,
        rng: &mut G,
        now: DateTime<FixedOffset>,
    ) -> Self {
        let store = Rc::new(store);
        let instant = now.with_timezone(&Utc);

        let collection = NoteCollection::new(
            Rc::clone(&store),
            config.notes.storage_key.clone(),
            config.notes.insert_policy,
        );
        let mut notes = NotesBoard::new(
            collection,
            SwipeController::new(config.notes.swipe_threshold),
            config.notes.default_category(),
            renderer,
        );
        notes.init();

        let theme = ThemeController::init(Rc::clone(&store), &config.theme, now.hour());
        let search = SearchBox::init(Rc::clone(&store), config.search.clone(), default_engines());
        let memo = Memo::init(Rc::clone(&store), config.memo.storage_key.clone());
        let images = ImageRotator::from_config(&config.images, rng, instant);
        let menus = DropdownSet::new(nav_items, &config.dropdown, instant);

        log::info!(
            "event=page_init module=page status=ok notes={} theme={} policy={:?}",
            notes.notes().len(),
            theme.current(),
            config.notes.insert_policy
        );

        Self {
            config,
            store,
            notes,
            theme,
            search,
            memo,
            images,
            menus,
        }
    }

    pub fn config(&self) -> &StartpageConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn insert_policy(&self) -> InsertPolicy {
        self.notes.collection().policy()
    }

    pub fn notes(&self) -> &NotesBoard<Rc<S>, R> {
        &self.notes
    }

    pub fn notes_mut(&mut self) -> &mut NotesBoard<Rc<S>, R> {
        &mut self.notes
    }

    pub fn theme(&self) -> &ThemeController<Rc<S>> {
        &self.theme
    }

    pub fn theme_mut(&mut self) -> &mut ThemeController<Rc<S>> {
        &mut self.theme
    }

    pub fn search(&self) -> &SearchBox<Rc<S>> {
        &self.search
    }

    pub fn search_mut(&mut self) -> &mut SearchBox<Rc<S>> {
        &mut self.search
    }

    pub fn memo_mut(&mut self) -> &mut Memo<Rc<S>> {
        &mut self.memo
    }

    pub fn images(&self) -> &ImageRotator {
        &self.images
    }

    pub fn images_mut(&mut self) -> &mut ImageRotator {
        &mut self.images
    }

    pub fn menus_mut(&mut self) -> &mut DropdownSet {
        &mut self.menus
    }

    /// Timer callback.
    pub fn tick(&mut self, now: DateTime<FixedOffset>) -> TickReport {
        let instant = now.with_timezone(&Utc);
        TickReport {
            clock: ClockFace::at(&now.naive_local()),
            theme_changed: self.theme.recheck(now.hour()),
            image: self.images.tick(instant).map(str::to_string),
            menus_closed: self.menus.heartbeat(instant),
        }
    }

    /// Pull-to-refresh: new background, fresh clock, random image.
    pub fn refresh<G: Rng>(&mut self, rng: &mut G, now: DateTime<FixedOffset>) -> RefreshReport {
        RefreshReport {
            background: background_on(&now),
            clock: ClockFace::at(&now.naive_local()),
            image: self
                .images
                .shuffle_start(rng, now.with_timezone(&Utc))
                .map(str::to_string),
        }
    }
}
