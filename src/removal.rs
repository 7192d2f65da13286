//! Removal Confirmation
//!
//! At most one removal is pending at a time. Opening a new confirmation
//! replaces the previous one, and a confirmation is consumed when acted on.

use crate::models::ItemId;

#[derive(Debug, Clone, PartialEq)]
pub struct PendingRemoval {
    pub id: ItemId,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum RemovalDialog {
    #[default]
    Idle,
    Confirming(PendingRemoval),
}

impl RemovalDialog {
    pub fn open(&mut self, id: ItemId, text: String) {
        *self = RemovalDialog::Confirming(PendingRemoval { id, text });
    }

    /// Back to idle without a request; returns whether something was pending
    pub fn cancel(&mut self) -> bool {
        matches!(std::mem::take(self), RemovalDialog::Confirming(_))
    }

    /// Take the pending removal. A second confirm yields nothing.
    pub fn confirm(&mut self) -> Option<PendingRemoval> {
        match std::mem::take(self) {
            RemovalDialog::Confirming(pending) => Some(pending),
            RemovalDialog::Idle => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, RemovalDialog::Confirming(_))
    }

    pub fn prompt(&self) -> Option<String> {
        match self {
            RemovalDialog::Confirming(pending) => {
                Some(format!("Are you sure you want to remove \"{}\" item?", pending.text))
            }
            RemovalDialog::Idle => None,
        }
    }
}
