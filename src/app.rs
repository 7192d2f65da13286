//! Todo App
//!
//! Picks the page from the location path and wires up shared state.

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::debug;
use reactive_stores::Store;

use crate::browser;
use crate::client::TodoClient;
use crate::commands::HttpApi;
use crate::components::{CategoryFilterPanel, LoginForm, LogoutBanner, NewItemForm, RemovalModal, TaskList};
use crate::config::AppConfig;
use crate::context::{use_app_context, AppContext};
use crate::error::{Action, ClientError};
use crate::route::{self, Page, Route};
use crate::session::BrowserSession;
use crate::store::{store_set_list, use_todo_store, TodoState, TodoStateStoreFields};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let client = TodoClient::new(HttpApi::new(config.api_base), BrowserSession);
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    // Provide context to all children
    provide_context(AppContext::new((reload_trigger, set_reload_trigger), client));
    provide_context(Store::new(TodoState::default()));

    let path = browser::current_path();
    debug!("mounting page for {}", path);
    match route::resolve(&path) {
        Page::Login => view! { <LoginPage /> }.into_any(),
        Page::TodoList => view! { <TodoListPage /> }.into_any(),
        Page::Redirect(target) => {
            browser::navigate(target);
            view! { <p class="redirect-info">"Redirecting..."</p> }.into_any()
        }
    }
}

#[component]
fn LoginPage() -> impl IntoView {
    view! {
        <main id="main" class="login-page">
            <h1>"Todo list"</h1>
            <LoginForm />
        </main>
    }
}

#[component]
fn TodoListPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_todo_store();

    // Load items on mount, after every mutation and on filter changes
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        let filter = store.filter().get();
        debug!("loading items, trigger={}", trigger);
        let client = ctx.client();
        spawn_local(async move {
            match client.load_items(&filter).await {
                Ok(Some(view)) => store_set_list(&store, view),
                Ok(None) => {}
                Err(e @ ClientError::Unauthorized) => {
                    browser::notify(e.notice(Action::LoadItems));
                    browser::navigate(Route::Login);
                }
                Err(e) => browser::notify(e.notice(Action::LoadItems)),
            }
        });
    });

    view! {
        <main id="main" class="todo-page">
            <LogoutBanner />
            <h1>"Todo list"</h1>
            <NewItemForm />
            <CategoryFilterPanel />
            <TaskList />
            <RemovalModal />
        </main>
    }
}
