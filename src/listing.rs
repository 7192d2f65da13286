//! Task Listing
//!
//! Projects a list response through the category filter into renderable rows.

use std::cell::Cell;
use std::rc::Rc;

use crate::markup::escape_html_tag_syntax;
use crate::models::{Category, CategoryFilter, Item, ItemId, ItemList};

pub const PLACEHOLDER_TEXT: &str = "There are no tasks added. You can use panel above to do it!";

/// One row of the task list
#[derive(Debug, Clone, PartialEq)]
pub struct TaskEntry {
    pub id: ItemId,
    /// Raw item text, used for the removal prompt
    pub text: String,
    /// Escaped text inserted as the row's HTML
    pub html: String,
    pub category: Category,
}

impl TaskEntry {
    pub fn from_item(item: &Item) -> Self {
        Self {
            id: item.id.clone(),
            text: item.item_value.clone(),
            html: escape_html_tag_syntax(&item.item_value),
            category: item.category,
        }
    }

    pub fn class(&self) -> String {
        self.category.css_class()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskListView {
    pub entries: Vec<TaskEntry>,
    pub show_placeholder: bool,
}

impl TaskListView {
    /// Latest items first, filtered by category. Placeholder only when the
    /// server has no items at all.
    pub fn project(list: &ItemList, filter: &CategoryFilter) -> Self {
        match list.items.as_deref() {
            None | Some([]) => Self {
                entries: Vec::new(),
                show_placeholder: true,
            },
            Some(items) => Self {
                entries: items
                    .iter()
                    .rev()
                    .filter(|item| filter.contains(item.category))
                    .map(TaskEntry::from_item)
                    .collect(),
                show_placeholder: false,
            },
        }
    }

    /// Drop the row with `id`; returns whether one was removed
    pub fn remove_entry(&mut self, id: &ItemId) -> bool {
        match self.entries.iter().position(|entry| &entry.id == id) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn hide_placeholder(&mut self) {
        self.show_placeholder = false;
    }
}

/// Ticket taken when a refresh starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTicket(u64);

/// Orders list refreshes: only the most recently started one may render.
#[derive(Debug, Clone, Default)]
pub struct RefreshSequencer {
    latest: Rc<Cell<u64>>,
}

impl RefreshSequencer {
    pub fn begin(&self) -> RefreshTicket {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        RefreshTicket(next)
    }

    pub fn is_current(&self, ticket: RefreshTicket) -> bool {
        self.latest.get() == ticket.0
    }
}
