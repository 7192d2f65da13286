//! Session Storage
//!
//! The logged-in username lives in the tab's `sessionStorage`.

use log::warn;

use crate::models::Session;

pub const USERNAME_KEY: &str = "username";

pub trait SessionStore {
    fn username(&self) -> Option<String>;

    fn set_username(&self, username: &str);

    fn clear(&self);

    fn load(&self) -> Session {
        Session {
            username: self.username(),
        }
    }
}

/// `window.sessionStorage` backed store
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSession;

impl BrowserSession {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.session_storage().ok().flatten()
    }
}

impl SessionStore for BrowserSession {
    fn username(&self) -> Option<String> {
        Self::storage()?
            .get_item(USERNAME_KEY)
            .ok()
            .flatten()
            .filter(|name| !name.is_empty())
    }

    fn set_username(&self, username: &str) {
        let Some(storage) = Self::storage() else {
            warn!("sessionStorage unavailable, username not stored");
            return;
        };
        if let Err(e) = storage.set_item(USERNAME_KEY, username) {
            warn!("failed to store username: {:?}", e);
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(USERNAME_KEY);
        }
    }
}

#[cfg(test)]
pub use memory::MemorySession;

#[cfg(test)]
mod memory {
    use std::cell::RefCell;

    use super::SessionStore;

    #[derive(Debug, Default)]
    pub struct MemorySession(RefCell<Option<String>>);

    impl SessionStore for MemorySession {
        fn username(&self) -> Option<String> {
            self.0.borrow().clone()
        }

        fn set_username(&self, username: &str) {
            *self.0.borrow_mut() = Some(username.to_string());
        }

        fn clear(&self) {
            *self.0.borrow_mut() = None;
        }
    }
}
