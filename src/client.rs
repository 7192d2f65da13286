//! Todo Client
//!
//! Application state shared by the pages: the API, the session store and the
//! refresh sequencer. Every user action is one async method returning a
//! `Result`; components decide how to surface it.

use log::{debug, info, warn};

use crate::board::TaskBoard;
use crate::commands::TodoApi;
use crate::error::ClientError;
use crate::listing::{RefreshSequencer, TaskListView};
use crate::models::{Category, CategoryFilter, Credentials, ItemId};
use crate::route::Route;
use crate::session::SessionStore;

#[derive(Debug, Clone)]
pub struct TodoClient<A, S> {
    api: A,
    session: S,
    refresh: RefreshSequencer,
}

impl<A: TodoApi, S: SessionStore> TodoClient<A, S> {
    pub fn new(api: A, session: S) -> Self {
        Self {
            api,
            session,
            refresh: RefreshSequencer::default(),
        }
    }

    /// Submit credentials. On success the username is remembered and the
    /// caller is told where to go next.
    pub async fn login(&self, login: &str, password: &str) -> Result<Route, ClientError> {
        if login.is_empty() {
            return Err(ClientError::Validation("login"));
        }
        if password.is_empty() {
            return Err(ClientError::Validation("password"));
        }

        let credentials = Credentials {
            login: login.to_string(),
            password: password.to_string(),
        };
        if let Err(e) = self.api.post_login_credentials(&credentials).await {
            warn!("login for '{}' failed: {}", login, e);
            return Err(e);
        }

        self.session.set_username(login);
        info!("logged in as '{}'", login);
        Ok(Route::TodoList)
    }

    /// Fetch and project the list. `Ok(None)` means a newer refresh started
    /// while this one was in flight and its result was dropped.
    pub async fn load_items(&self, filter: &CategoryFilter) -> Result<Option<TaskListView>, ClientError> {
        let ticket = self.refresh.begin();
        let result = self.api.get_todo_list_items().await;
        if !self.refresh.is_current(ticket) {
            debug!("discarding stale item list response");
            return Ok(None);
        }

        match result {
            Ok(list) => {
                let view = TaskListView::project(&list, filter);
                debug!("rendering {} entries", view.entries.len());
                Ok(Some(view))
            }
            Err(ClientError::Unauthorized) => {
                warn!("item list rejected, session is gone");
                self.session.clear();
                Err(ClientError::Unauthorized)
            }
            Err(e) => {
                warn!("loading items failed: {}", e);
                Err(e)
            }
        }
    }

    pub async fn add_item(&self, item_value: &str, category: Category) -> Result<(), ClientError> {
        if item_value.is_empty() {
            return Err(ClientError::Validation("item_value"));
        }
        self.api.add_todo_list_item(item_value, category).await.map_err(|e| {
            warn!("saving item failed: {}", e);
            e
        })?;
        info!("added {} item", category.as_str());
        Ok(())
    }

    pub async fn remove_item(&self, id: &ItemId) -> Result<(), ClientError> {
        self.api.remove_item(id).await.map_err(|e| {
            warn!("removing item {} failed: {}", id, e);
            e
        })?;
        info!("removed item {}", id);
        Ok(())
    }

    /// Save the board's draft. On success the input is cleared, the
    /// placeholder dropped and the list reloaded; on failure nothing changes.
    pub async fn submit_new_item<B: TaskBoard>(&self, board: &B) -> Result<(), ClientError> {
        let (item_value, category) = board.draft();
        self.add_item(&item_value, category).await?;
        board.item_saved();
        board.reload();
        Ok(())
    }

    /// Act on the pending removal confirmation. The row is dropped only when
    /// the server accepted the removal; the list is reloaded once either way.
    /// Returns whether a row was removed, `Ok(false)` when nothing was pending.
    pub async fn confirm_removal<B: TaskBoard>(&self, board: &B) -> Result<bool, ClientError> {
        let Some(pending) = board.take_pending_removal() else {
            debug!("no removal pending");
            return Ok(false);
        };
        let result = self.remove_item(&pending.id).await;
        let removed = result.is_ok() && board.remove_entry(&pending.id);
        board.reload();
        result.map(|()| removed)
    }

    pub fn username(&self) -> Option<String> {
        self.session.load().username
    }

    pub fn logout(&self) {
        self.session.clear();
        info!("logged out");
    }
}
