//! Removal Modal Component
//!
//! Yes/no confirmation for the pending removal. Confirm consumes the pending
//! removal, so repeated clicks cannot send a second request.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::browser;
use crate::context::use_app_context;
use crate::error::Action;
use crate::store::{use_todo_store, StoreBoard, TodoStateStoreFields};

#[component]
pub fn RemovalModal() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_todo_store();

    let board = StoreBoard::new(store, ctx);

    let confirm = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        let client = ctx.client();

        spawn_local(async move {
            if let Err(e) = client.confirm_removal(&board).await {
                browser::notify(e.notice(Action::RemoveItem));
            }
        });
    };

    let cancel = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        store.removal().write().cancel();
    };

    view! {
        <div
            id="item-removal-modal"
            class="modal"
            style:display=move || if store.removal().get().is_open() { "block" } else { "none" }
        >
            <div id="item-removal-modal-content" class="modal-content">
                {move || store.removal().get().prompt().map(|prompt| view! { <p>{prompt}</p> })}
                <button id="submit_modal" class="confirm-btn" on:click=confirm>"Yes"</button>
                <button id="close_modal" class="cancel-btn" on:click=cancel>"No"</button>
            </div>
        </div>
    }
}
