//! Search box with a selectable engine and a remembered query history.
//!
//! Selecting an engine rewrites where the search form submits (`action`) and
//! the name of its query field. Submitting records the query in the history
//! and yields the URL the browser should navigate to; the page itself makes
//! no requests.

use crate::config::SearchConfig;
use crate::store::{guarded_get, guarded_set, KeyValueStore};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchEngine {
    pub label: String,
    pub action: String,
    pub param: String,
}

impl SearchEngine {
    pub fn new(label: &str, action: &str, param: &str) -> Self {
        Self {
            label: label.to_string(),
            action: action.to_string(),
            param: param.to_string(),
        }
    }

    pub fn placeholder(&self) -> String {
        format!("Search {}...", self.label)
    }

    /// Navigation URL for `query`, percent-encoded.
    pub fn url_for(&self, query: &str) -> String {
        let sep = if self.action.contains('?') { '&' } else { '?' };
        format!(
            "{}{}{}={}",
            self.action,
            sep,
            self.param,
            urlencoding::encode(query)
        )
    }
}

pub fn default_engines() -> Vec<SearchEngine> {
    vec![
        SearchEngine::new("Google", "https://www.google.com/search", "q"),
        SearchEngine::new("Nyaa", "https://nyaa.si/", "q"),
    ]
}

/// Where the search form currently submits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormTarget<'a> {
    pub action: &'a str,
    pub input_name: &'a str,
}

pub struct SearchBox<S: KeyValueStore> {
    store: S,
    config: SearchConfig,
    engines: Vec<SearchEngine>,
    selected: usize,
    history: Vec<String>,
}

impl<S: KeyValueStore> SearchBox<S> {
    /// Restore history and select the first engine.
    pub fn init(store: S, config: SearchConfig, engines: Vec<SearchEngine>) -> Self {
        let history = match guarded_get(&store, &config.history_key) {
            None => Vec::new(),
            Some(raw) => serde_json::from_str::<Vec<String>>(&raw).unwrap_or_else(|err| {
                log::warn!(
                    "event=search_history_load module=search status=corrupt key={} err={}",
                    config.history_key,
                    err
                );
                Vec::new()
            }),
        };
        Self {
            store,
            config,
            engines,
            selected: 0,
            history,
        }
    }

    pub fn engines(&self) -> &[SearchEngine] {
        &self.engines
    }

    pub fn selected(&self) -> Option<&SearchEngine> {
        self.engines.get(self.selected)
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Pick an engine by position. Out-of-range picks are ignored.
    pub fn select(&mut self, index: usize) -> Option<FormTarget<'_>> {
        if index < self.engines.len() {
            self.selected = index;
        }
        self.form_target()
    }

    /// Pick an engine by its label, case-insensitively.
    pub fn select_label(&mut self, label: &str) -> Option<FormTarget<'_>> {
        if let Some(index) = self
            .engines
            .iter()
            .position(|e| e.label.eq_ignore_ascii_case(label))
        {
            self.selected = index;
        }
        self.form_target()
    }

    pub fn form_target(&self) -> Option<FormTarget<'_>> {
        self.selected().map(|engine| FormTarget {
            action: &engine.action,
            input_name: &engine.param,
        })
    }

    pub fn placeholder(&self) -> String {
        self.selected()
            .map(SearchEngine::placeholder)
            .unwrap_or_else(|| "Search...".to_string())
    }

    /// Run a search. Returns the URL to open, or `None` for a blank query.
    pub fn submit(&mut self, query: &str) -> Option<String> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }
        let url = self.selected()?.url_for(query);
        self.remember(query);
        Some(url)
    }

    /// History entries matching what has been typed so far.
    pub fn suggestions(&self, input: &str) -> Vec<&str> {
        let input = input.trim();
        if input.chars().count() < self.config.min_query_len {
            return Vec::new();
        }
        let needle = input.to_lowercase();
        self.history
            .iter()
            .filter(|item| item.to_lowercase().contains(&needle))
            .take(self.config.max_suggestions)
            .map(String::as_str)
            .collect()
    }

    fn remember(&mut self, query: &str) {
        if self.history.iter().any(|q| q == query) {
            return;
        }
        self.history.insert(0, query.to_string());
        self.history.truncate(self.config.history_limit);
        match serde_json::to_string(&self.history) {
            Ok(blob) => {
                guarded_set(&self.store, &self.config.history_key, &blob);
            }
            Err(err) => log::error!(
                "event=search_history_save module=search status=error err={}",
                err
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;
    use std::rc::Rc;

    fn search_box(store: Rc<MemBackend>) -> SearchBox<Rc<MemBackend>> {
        SearchBox::init(store, SearchConfig::default(), default_engines())
    }

    #[test]
    fn test_first_engine_selected_initially() {
        let search = search_box(Rc::new(MemBackend::new()));
        let target = search.form_target().unwrap();
        assert_eq!(target.action, "https://www.google.com/search");
        assert_eq!(target.input_name, "q");
        assert_eq!(search.placeholder(), "Search Google...");
    }

    #[test]
    fn test_select_rewrites_form_target() {
        let mut search = search_box(Rc::new(MemBackend::new()));
        let target = search.select_label("nyaa").unwrap();
        assert_eq!(target.action, "https://nyaa.si/");
        assert_eq!(search.placeholder(), "Search Nyaa...");

        search.select(9);
        assert_eq!(search.selected().unwrap().label, "Nyaa");
    }

    #[test]
    fn test_submit_builds_encoded_url() {
        let mut search = search_box(Rc::new(MemBackend::new()));
        assert_eq!(
            search.submit("  rust & wasm  ").unwrap(),
            "https://www.google.com/search?q=rust%20%26%20wasm"
        );
        search.select(1);
        assert_eq!(search.submit("one piece").unwrap(), "https://nyaa.si/?q=one%20piece");
    }

    #[test]
    fn test_blank_submit_is_ignored() {
        let mut search = search_box(Rc::new(MemBackend::new()));
        assert_eq!(search.submit("   "), None);
        assert!(search.history().is_empty());
    }

    #[test]
    fn test_history_is_most_recent_first_without_duplicates() {
        let store = Rc::new(MemBackend::new());
        let mut search = search_box(Rc::clone(&store));
        search.submit("alpha");
        search.submit("beta");
        search.submit("alpha");
        assert_eq!(search.history(), ["beta", "alpha"]);

        let reloaded = search_box(store);
        assert_eq!(reloaded.history(), ["beta", "alpha"]);
    }

    #[test]
    fn test_history_is_capped() {
        let mut search = search_box(Rc::new(MemBackend::new()));
        for i in 0..12 {
            search.submit(&format!("query {i}"));
        }
        assert_eq!(search.history().len(), 10);
        assert_eq!(search.history()[0], "query 11");
        assert_eq!(search.history()[9], "query 2");
    }

    #[test]
    fn test_suggestions() {
        let mut search = search_box(Rc::new(MemBackend::new()));
        for q in ["Rust book", "rustlings", "python", "trust me", "crust", "rusty", "rust fmt"] {
            search.submit(q);
        }
        assert!(search.suggestions("ru").is_empty());
        let found = search.suggestions(" RUS ");
        assert_eq!(found.len(), 5);
        assert_eq!(found[0], "rust fmt");
        assert!(search.suggestions("zzz").is_empty());
    }

    #[test]
    fn test_corrupt_history_is_ignored() {
        let store = Rc::new(MemBackend::new());
        store.set("searchHistory", "[1, 2").unwrap();
        let search = search_box(store);
        assert!(search.history().is_empty());
    }

    #[test]
    fn test_action_with_query_string() {
        let engine = SearchEngine::new("Docs", "https://docs.rs/releases/search?sort=recent", "query");
        assert_eq!(
            engine.url_for("serde"),
            "https://docs.rs/releases/search?sort=recent&query=serde"
        );
    }
}
