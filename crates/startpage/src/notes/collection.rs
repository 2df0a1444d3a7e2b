use super::NoteMutations;
use crate::model::{Category, InsertPolicy, Note};
use crate::store::{guarded_get, guarded_set, KeyValueStore};

/// Storage key used by the page unless configured otherwise.
pub const DEFAULT_NOTES_KEY: &str = "liquidGlassNotes";

/// The ordered, persisted list of notes.
///
/// Owns its store handle and writes through on every effective mutation, so
/// after a successful write the stored blob and `notes()` are equal. A failed
/// write is logged; the in-memory list stays authoritative for the session.
pub struct NoteCollection<S: KeyValueStore> {
    store: S,
    key: String,
    policy: InsertPolicy,
    notes: Vec<Note>,
}

impl<S: KeyValueStore> NoteCollection<S> {
    /// An empty collection bound to `key`. Call [`load_from_store`](Self::load_from_store)
    /// to pick up persisted notes.
    pub fn new(store: S, key: impl Into<String>, policy: InsertPolicy) -> Self {
        Self {
            store,
            key: key.into(),
            policy,
            notes: Vec::new(),
        }
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn get(&self, index: usize) -> Option<&Note> {
        self.notes.get(index)
    }

    pub fn policy(&self) -> InsertPolicy {
        self.policy
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Replace the in-memory list with what the store holds.
    ///
    /// A missing key gives an empty list. So does a value that is not a JSON
    /// array: corrupt storage is logged and otherwise treated as "no prior
    /// data". Unreadable records inside a valid array are dropped one by one.
    pub fn load_from_store(&mut self) {
        self.notes = match guarded_get(&self.store, &self.key) {
            None => Vec::new(),
            Some(raw) => match parse(&raw) {
                Ok(notes) => notes,
                Err(err) => {
                    log::warn!(
                        "event=notes_load module=notes status=corrupt key={} err={}",
                        self.key,
                        err
                    );
                    Vec::new()
                }
            },
        };
        log::debug!(
            "event=notes_load module=notes status=ok key={} count={}",
            self.key,
            self.notes.len()
        );
    }

    /// The exact string written to the store.
    pub fn serialize(&self) -> String {
        // Serializing plain strings and timestamps cannot fail.
        serde_json::to_string(&self.notes).unwrap_or_else(|_| "[]".to_string())
    }

    /// Add a note built from `text`.
    ///
    /// Blank text (after trimming) is ignored. Returns the index the note
    /// landed at.
    pub fn add(&mut self, text: &str, category: Category) -> Option<usize> {
        let note = Note::new(text, category)?;
        Some(self.insert(note))
    }

    /// Insert an already-built note according to the insert policy.
    pub fn insert(&mut self, note: Note) -> usize {
        let index = match self.policy {
            InsertPolicy::Append => {
                self.notes.push(note);
                self.notes.len() - 1
            }
            InsertPolicy::Prepend => {
                self.notes.insert(0, note);
                0
            }
        };
        self.persist("add");
        index
    }

    /// Where a note from `source` lands when dropped on `destination`.
    ///
    /// The slot is an index into the list *after* the source was removed.
    /// Returns `None` for out-of-range indices and drops onto the source itself.
    pub fn resolve_slot(&self, source: usize, destination: usize, insert_above: bool) -> Option<usize> {
        let len = self.notes.len();
        if source >= len || destination >= len || source == destination {
            return None;
        }
        let shifted = if source < destination {
            destination - 1
        } else {
            destination
        };
        Some(if insert_above { shifted } else { shifted + 1 })
    }

    fn persist(&self, op: &str) {
        let blob = self.serialize();
        if guarded_set(&self.store, &self.key, &blob) {
            log::debug!(
                "event=notes_save module=notes status=ok op={} count={}",
                op,
                self.notes.len()
            );
        }
    }
}

impl<S: KeyValueStore> NoteMutations for NoteCollection<S> {
    fn len(&self) -> usize {
        self.notes.len()
    }

    fn remove_at(&mut self, index: usize) -> bool {
        if index >= self.notes.len() {
            return false;
        }
        self.notes.remove(index);
        self.persist("remove");
        true
    }

    fn move_to(&mut self, source: usize, destination: usize, insert_above: bool) -> bool {
        let Some(slot) = self.resolve_slot(source, destination, insert_above) else {
            return false;
        };
        if slot == source {
            return false;
        }
        let note = self.notes.remove(source);
        self.notes.insert(slot, note);
        self.persist("move");
        true
    }
}

/// Decode the stored blob record by record.
///
/// Only a blob that is not a JSON array fails as a whole. Records that do not
/// decode, or whose text is blank after trimming, are skipped so one bad entry
/// never costs the rest of the list.
fn parse(raw: &str) -> serde_json::Result<Vec<Note>> {
    let records: Vec<serde_json::Value> = serde_json::from_str(raw)?;
    let mut notes = Vec::with_capacity(records.len());
    for (position, record) in records.into_iter().enumerate() {
        match serde_json::from_value::<Note>(record) {
            Ok(note) => match Note::with_timestamp(&note.text, note.category, note.timestamp) {
                Some(note) => notes.push(note),
                None => log::warn!(
                    "event=notes_load module=notes status=skipped position={} reason=blank_text",
                    position
                ),
            },
            Err(err) => log::warn!(
                "event=notes_load module=notes status=skipped position={} err={}",
                position,
                err
            ),
        }
    }
    Ok(notes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;
    use std::rc::Rc;

    fn texts<S: KeyValueStore>(collection: &NoteCollection<S>) -> Vec<&str> {
        collection.notes().iter().map(|n| n.text.as_str()).collect()
    }

    fn setup(items: &[&str]) -> NoteCollection<Rc<MemBackend>> {
        let mut collection =
            NoteCollection::new(Rc::new(MemBackend::new()), DEFAULT_NOTES_KEY, InsertPolicy::Append);
        for item in items {
            collection.add(item, Category::Personal).unwrap();
        }
        collection
    }

    fn stored<S: KeyValueStore>(collection: &NoteCollection<S>) -> Option<String> {
        collection.store().get(DEFAULT_NOTES_KEY).unwrap()
    }

    #[test]
    fn test_add_appends_by_default() {
        let collection = setup(&["A", "B", "C"]);
        assert_eq!(texts(&collection), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_add_prepends_under_prepend_policy() {
        let mut collection =
            NoteCollection::new(MemBackend::new(), DEFAULT_NOTES_KEY, InsertPolicy::Prepend);
        assert_eq!(collection.add("A", Category::Work), Some(0));
        assert_eq!(collection.add("B", Category::Work), Some(0));
        assert_eq!(texts(&collection), vec!["B", "A"]);
    }

    #[test]
    fn test_add_ignores_blank_text() {
        let mut collection = setup(&["A"]);
        let before = stored(&collection);
        assert_eq!(collection.add("   ", Category::Todo), None);
        assert_eq!(texts(&collection), vec!["A"]);
        assert_eq!(stored(&collection), before);
    }

    #[test]
    fn test_add_writes_through() {
        let collection = setup(&["A", "B"]);
        assert_eq!(stored(&collection), Some(collection.serialize()));
    }

    #[test]
    fn test_remove_at_shifts_following_notes() {
        let mut collection = setup(&["A", "B", "C"]);
        assert!(collection.remove_at(1));
        assert_eq!(texts(&collection), vec!["A", "C"]);
        assert_eq!(stored(&collection), Some(collection.serialize()));
    }

    #[test]
    fn test_remove_at_out_of_range_is_noop() {
        let mut collection = setup(&["A"]);
        assert!(!collection.remove_at(1));
        assert!(!collection.remove_at(usize::MAX));
        assert_eq!(texts(&collection), vec!["A"]);
    }

    #[test]
    fn test_move_down_below_target() {
        let mut collection = setup(&["A", "B", "C"]);
        assert!(collection.move_to(0, 2, false));
        assert_eq!(texts(&collection), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_move_down_above_target() {
        let mut collection = setup(&["A", "B", "C", "D"]);
        assert!(collection.move_to(0, 2, true));
        assert_eq!(texts(&collection), vec!["B", "A", "C", "D"]);
    }

    #[test]
    fn test_move_up_above_target() {
        let mut collection = setup(&["A", "B", "C"]);
        assert!(collection.move_to(2, 0, true));
        assert_eq!(texts(&collection), vec!["C", "A", "B"]);
    }

    #[test]
    fn test_move_up_below_target() {
        let mut collection = setup(&["A", "B", "C", "D"]);
        assert!(collection.move_to(3, 0, false));
        assert_eq!(texts(&collection), vec!["A", "D", "B", "C"]);
    }

    #[test]
    fn test_move_onto_own_boundaries_is_noop() {
        let mut collection = setup(&["A", "B", "C"]);
        let before = stored(&collection);

        assert!(!collection.move_to(1, 1, true));
        assert!(!collection.move_to(1, 1, false));
        // Above the next note, below the previous one.
        assert!(!collection.move_to(1, 2, true));
        assert!(!collection.move_to(1, 0, false));

        assert_eq!(texts(&collection), vec!["A", "B", "C"]);
        assert_eq!(stored(&collection), before);
    }

    #[test]
    fn test_move_below_next_note_swaps() {
        let mut collection = setup(&["A", "B", "C"]);
        assert!(collection.move_to(0, 1, false));
        assert_eq!(texts(&collection), vec!["B", "A", "C"]);
    }

    #[test]
    fn test_move_out_of_range_is_noop() {
        let mut collection = setup(&["A", "B"]);
        assert!(!collection.move_to(2, 0, true));
        assert!(!collection.move_to(0, 2, true));
        assert_eq!(texts(&collection), vec!["A", "B"]);
    }

    #[test]
    fn test_move_keeps_note_identity() {
        let mut collection = setup(&["A", "B", "C"]);
        let original: Vec<Note> = collection.notes().to_vec();
        collection.move_to(2, 0, true);
        assert_eq!(collection.notes()[0], original[2]);
        assert_eq!(collection.notes()[1], original[0]);
        assert_eq!(collection.notes()[2], original[1]);
    }

    #[test]
    fn test_load_from_missing_key_is_empty() {
        let mut collection =
            NoteCollection::new(MemBackend::new(), DEFAULT_NOTES_KEY, InsertPolicy::Append);
        collection.load_from_store();
        assert!(collection.is_empty());
    }

    #[test]
    fn test_load_from_malformed_blob_is_empty() {
        let store = MemBackend::new();
        store.set(DEFAULT_NOTES_KEY, "{not json").unwrap();
        let mut collection = NoteCollection::new(store, DEFAULT_NOTES_KEY, InsertPolicy::Append);
        collection.load_from_store();
        assert!(collection.is_empty());
    }

    #[test]
    fn test_load_skips_only_unreadable_records() {
        let store = Rc::new(MemBackend::new());
        store
            .set(
                DEFAULT_NOTES_KEY,
                r#"[{"text":"good","category":"work","timestamp":"2024-03-01T09:30:00.000Z"},
                    {"text":"no ts","category":"todo"},
                    {"text":"bad ts","category":"todo","timestamp":"yesterday"},
                    {"text":"also good","category":"ideas","timestamp":"2024-03-02T10:00:00Z"}]"#,
            )
            .unwrap();
        let mut collection =
            NoteCollection::new(Rc::clone(&store), DEFAULT_NOTES_KEY, InsertPolicy::Append);
        collection.load_from_store();
        assert_eq!(texts(&collection), vec!["good", "also good"]);

        // The next write keeps the surviving notes.
        collection.add("new", Category::Personal);
        let mut reader = NoteCollection::new(store, DEFAULT_NOTES_KEY, InsertPolicy::Append);
        reader.load_from_store();
        assert_eq!(texts(&reader), vec!["good", "also good", "new"]);
    }

    #[test]
    fn test_load_drops_blank_and_trims_text() {
        let store = MemBackend::new();
        store
            .set(
                DEFAULT_NOTES_KEY,
                r#"[{"text":"   ","category":"todo","timestamp":"2024-03-01T09:30:00Z"},
                    {"text":"  padded  ","category":"todo","timestamp":"2024-03-01T09:31:00Z"}]"#,
            )
            .unwrap();
        let mut collection = NoteCollection::new(store, DEFAULT_NOTES_KEY, InsertPolicy::Append);
        collection.load_from_store();
        assert_eq!(texts(&collection), vec!["padded"]);
    }

    #[test]
    fn test_load_non_array_blob_is_empty() {
        let store = MemBackend::new();
        store.set(DEFAULT_NOTES_KEY, r#"{"text":"lonely"}"#).unwrap();
        let mut collection = NoteCollection::new(store, DEFAULT_NOTES_KEY, InsertPolicy::Append);
        collection.load_from_store();
        assert!(collection.is_empty());
    }

    #[test]
    fn test_load_replaces_in_memory_state() {
        let store = Rc::new(MemBackend::new());
        let mut writer = NoteCollection::new(Rc::clone(&store), DEFAULT_NOTES_KEY, InsertPolicy::Append);
        writer.add("persisted", Category::Ideas);

        let mut reader = NoteCollection::new(store, DEFAULT_NOTES_KEY, InsertPolicy::Append);
        reader.load_from_store();
        assert_eq!(reader.notes(), writer.notes());
    }

    #[test]
    fn test_failed_write_keeps_memory_authoritative() {
        let store = Rc::new(MemBackend::new());
        let mut collection =
            NoteCollection::new(Rc::clone(&store), DEFAULT_NOTES_KEY, InsertPolicy::Append);
        collection.add("A", Category::Personal);
        let persisted = stored(&collection);

        store.set_simulate_write_error(true);
        collection.add("B", Category::Personal);
        assert!(collection.remove_at(0));

        assert_eq!(texts(&collection), vec!["B"]);
        assert_eq!(stored(&collection), persisted);
    }

    #[test]
    fn test_quota_exhaustion_is_not_fatal() {
        let store = Rc::new(MemBackend::with_capacity(200));
        let mut collection =
            NoteCollection::new(Rc::clone(&store), DEFAULT_NOTES_KEY, InsertPolicy::Append);
        for i in 0..10 {
            collection.add(&format!("note number {i}"), Category::Work);
        }
        assert_eq!(collection.len(), 10);
        assert!(store.used_bytes() <= 200);
    }

    #[test]
    fn test_resolve_slot() {
        let collection = setup(&["A", "B", "C"]);
        assert_eq!(collection.resolve_slot(0, 2, false), Some(2));
        assert_eq!(collection.resolve_slot(0, 2, true), Some(1));
        assert_eq!(collection.resolve_slot(2, 0, true), Some(0));
        assert_eq!(collection.resolve_slot(2, 0, false), Some(1));
        assert_eq!(collection.resolve_slot(1, 1, true), None);
        assert_eq!(collection.resolve_slot(3, 1, true), None);
    }
}
