//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::board::TaskBoard;
use crate::context::AppContext;
use crate::listing::TaskListView;
use crate::models::{Category, CategoryFilter, ItemId};
use crate::removal::{PendingRemoval, RemovalDialog};

/// View state of the task list page with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// Rows currently rendered and the placeholder flag
    pub list: TaskListView,
    /// Checked categories; changing it triggers a refresh
    pub filter: CategoryFilter,
    /// Pending removal confirmation
    pub removal: RemovalDialog,
    /// Text of the new-item input
    pub new_item_text: String,
    /// Selected category radio
    pub new_item_category: Category,
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

/// Get the store from context
pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the rendered list with a fresh projection
pub fn store_set_list(store: &TodoStore, view: TaskListView) {
    store.list().set(view);
}

/// Remove the row with `id` after a confirmed removal
pub fn store_remove_entry(store: &TodoStore, id: &ItemId) -> bool {
    store.list().write().remove_entry(id)
}

/// After an item is saved: clear the input and drop the placeholder
pub fn store_item_saved(store: &TodoStore) {
    store.new_item_text().set(String::new());
    store.list().write().hide_placeholder();
}

/// `TaskBoard` over the store, reloading through the app context
#[derive(Clone, Copy)]
pub struct StoreBoard {
    store: TodoStore,
    ctx: AppContext,
}

impl StoreBoard {
    pub fn new(store: TodoStore, ctx: AppContext) -> Self {
        Self { store, ctx }
    }
}

impl TaskBoard for StoreBoard {
    fn draft(&self) -> (String, Category) {
        (
            self.store.new_item_text().get_untracked(),
            self.store.new_item_category().get_untracked(),
        )
    }

    fn take_pending_removal(&self) -> Option<PendingRemoval> {
        self.store.removal().write().confirm()
    }

    fn remove_entry(&self, id: &ItemId) -> bool {
        store_remove_entry(&self.store, id)
    }

    fn item_saved(&self) {
        store_item_saved(&self.store);
    }

    fn reload(&self) {
        self.ctx.reload();
    }
}
