use super::collection::NoteCollection;
use super::NoteMutations;
use crate::gestures::drag::{DragController, InsertionMarker};
use crate::gestures::swipe::SwipeController;
use crate::gestures::{DragOverEvent, DragStartEvent, DropEvent, SwipeStartEvent};
use crate::model::{Category, Note};
use crate::render::{project, Renderer};
use crate::store::KeyValueStore;

/// The notes widget as the host sees it.
///
/// Owns the collection, both gesture controllers, the category chosen with
/// the category toggles, and the renderer. Every entry point that changes the
/// collection ends with exactly one full rebuild; entry points that change
/// nothing do not redraw.
pub struct NotesBoard<S: KeyValueStore, R: Renderer> {
    collection: NoteCollection<S>,
    drag: DragController,
    swipe: SwipeController,
    selected_category: Category,
    renderer: R,
}

impl<S: KeyValueStore, R: Renderer> NotesBoard<S, R> {
    pub fn new(
        collection: NoteCollection<S>,
        swipe: SwipeController,
        default_category: Category,
        renderer: R,
    ) -> Self {
        Self {
            collection,
            drag: DragController::new(),
            swipe,
            selected_category: default_category,
            renderer,
        }
    }

    /// Page load: read persisted notes and draw them.
    pub fn init(&mut self) {
        self.collection.load_from_store();
        self.render();
    }

    pub fn notes(&self) -> &[Note] {
        self.collection.notes()
    }

    pub fn collection(&self) -> &NoteCollection<S> {
        &self.collection
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    pub fn selected_category(&self) -> &Category {
        &self.selected_category
    }

    /// A category toggle was clicked; applies to the next added note.
    pub fn select_category(&mut self, category: Category) {
        self.selected_category = category;
    }

    /// Enter in the input box, or the add button. Returns whether a note was added;
    /// the host clears the input when it was.
    pub fn submit(&mut self, text: &str) -> bool {
        let added = self
            .collection
            .add(text, self.selected_category.clone())
            .is_some();
        self.render_if(added)
    }

    /// The delete affordance on a note card.
    pub fn delete_clicked(&mut self, index: usize) -> bool {
        let removed = self.collection.remove_at(index);
        self.render_if(removed)
    }

    pub fn drag_start(&mut self, event: DragStartEvent) {
        self.drag.drag_start(event);
    }

    pub fn drag_over(&mut self, event: DragOverEvent) -> Option<InsertionMarker> {
        self.drag.drag_over(event)
    }

    pub fn drop(&mut self, event: DropEvent) -> bool {
        let moved = self.drag.drop(event, &mut self.collection);
        self.render_if(moved)
    }

    /// Drop released without a target of its own (keyboard drop, a host that
    /// only reports "released"): lands where the last `drag_over` pointed.
    pub fn drop_on_hover(&mut self) -> bool {
        let moved = self.drag.drop_on_hover(&mut self.collection);
        self.render_if(moved)
    }

    pub fn drag_end(&mut self) {
        self.drag.cancel();
    }

    pub fn touch_start(&mut self, event: SwipeStartEvent) {
        self.swipe.touch_start(event);
    }

    pub fn touch_end(&mut self, end_x: f64) -> bool {
        let removed = self.swipe.touch_end(end_x, &mut self.collection);
        self.render_if(removed)
    }

    fn render_if(&mut self, changed: bool) -> bool {
        if changed {
            self.render();
        }
        changed
    }

    fn render(&mut self) {
        let views = project(self.collection.notes());
        self.renderer.rebuild(&views);
    }
}
