use crate::store::{guarded_get, guarded_set, KeyValueStore};

/// A free-text box that remembers its content across reloads.
///
/// Every input event saves the full text; start-up restores it.
pub struct Memo<S: KeyValueStore> {
    store: S,
    key: String,
    text: String,
}

impl<S: KeyValueStore> Memo<S> {
    pub fn init(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let text = guarded_get(&store, &key).unwrap_or_default();
        Self { store, key, text }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn on_input(&mut self, text: &str) {
        self.text = text.to_string();
        guarded_set(&self.store, &self.key, &self.text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;
    use std::rc::Rc;

    #[test]
    fn test_memo_restores_text() {
        let store = Rc::new(MemBackend::new());
        let mut memo = Memo::init(Rc::clone(&store), "myTextboxContent");
        assert_eq!(memo.text(), "");
        memo.on_input("- water plants\n- call bank");

        let restored = Memo::init(store, "myTextboxContent");
        assert_eq!(restored.text(), "- water plants\n- call bank");
    }

    #[test]
    fn test_memo_survives_failed_write() {
        let store = Rc::new(MemBackend::new());
        let mut memo = Memo::init(Rc::clone(&store), "memo");
        store.set_simulate_write_error(true);
        memo.on_input("unsaved");
        assert_eq!(memo.text(), "unsaved");
        assert_eq!(store.get("memo").unwrap(), None);
    }
}
