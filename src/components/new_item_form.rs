//! New Item Form Component
//!
//! Text input plus a category radio group.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::browser;
use crate::context::use_app_context;
use crate::error::Action;
use crate::models::Category;
use crate::store::{use_todo_store, StoreBoard, TodoStateStoreFields};

#[component]
pub fn NewItemForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_todo_store();

    let board = StoreBoard::new(store, ctx);

    let create_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let client = ctx.client();

        spawn_local(async move {
            if let Err(e) = client.submit_new_item(&board).await {
                browser::notify(e.notice(Action::AddItem));
            }
        });
    };

    view! {
        <form class="new-item-form" on:submit=create_item>
            <div class="new-item-row">
                <input
                    id="add_item_input"
                    type="text"
                    placeholder="Add new item..."
                    prop:value=move || store.new_item_text().get()
                    on:input=move |ev| store.new_item_text().set(event_target_value(&ev))
                />
                <button type="submit">"Save"</button>
            </div>

            <div id="item_category_rbtns" class="category-radio-row">
                {Category::ALL.iter().map(|&category| {
                    view! {
                        <label class=category.css_class()>
                            <input
                                type="radio"
                                name="categories"
                                value=category.as_str()
                                prop:checked=move || store.new_item_category().get() == category
                                on:change=move |_| store.new_item_category().set(category)
                            />
                            {category.label()}
                        </label>
                    }
                }).collect_view()}
            </div>
        </form>
    }
}
