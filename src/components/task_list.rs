//! Task List Component
//!
//! Rendered rows of the current projection. Clicking a row asks for removal.

use leptos::prelude::*;

use crate::listing::{TaskEntry, PLACEHOLDER_TEXT};
use crate::store::{use_todo_store, TodoStateStoreFields};

#[component]
pub fn TaskList() -> impl IntoView {
    let store = use_todo_store();

    view! {
        <div id="tasks_panel" class="tasks-panel">
            <ul id="tasks_list">
                <For
                    each=move || store.list().get().entries
                    key=|entry| entry.id.clone()
                    children=move |entry: TaskEntry| {
                        let data_id = entry.id.to_string();
                        let class = entry.class();
                        let TaskEntry { id, text, html, .. } = entry;
                        view! {
                            <li
                                data-id=data_id
                                class=class
                                inner_html=html
                                on:click=move |ev| {
                                    ev.stop_propagation();
                                    store.removal().write().open(id.clone(), text.clone());
                                }
                            ></li>
                        }
                    }
                />
            </ul>
            <Show when=move || store.list().get().show_placeholder>
                <p id="initial_info">{PLACEHOLDER_TEXT}</p>
            </Show>
        </div>
    }
}
