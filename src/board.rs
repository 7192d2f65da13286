//! Task Board
//!
//! The page state add/remove handlers read and mutate. The reactive store
//! implements it for the real page.

use crate::models::{Category, ItemId};
use crate::removal::PendingRemoval;

pub trait TaskBoard {
    /// Current new-item input text and selected category
    fn draft(&self) -> (String, Category);

    /// Consume the pending removal confirmation, if any
    fn take_pending_removal(&self) -> Option<PendingRemoval>;

    /// Drop the row with `id`; returns whether one was removed
    fn remove_entry(&self, id: &ItemId) -> bool;

    /// Clear the input and drop the placeholder after a save
    fn item_saved(&self);

    /// Re-fetch the list from the server
    fn reload(&self);
}
