//! Category Filter Component
//!
//! One checkbox per category; toggling one refreshes the list.

use leptos::prelude::*;

use crate::models::Category;
use crate::store::{use_todo_store, TodoStateStoreFields};

#[component]
pub fn CategoryFilterPanel() -> impl IntoView {
    let store = use_todo_store();

    view! {
        <div id="category_checkboxes" class="category-filter">
            {Category::ALL.iter().map(|&category| {
                view! {
                    <label class=category.css_class()>
                        <input
                            type="checkbox"
                            value=category.as_str()
                            prop:checked=move || store.filter().get().contains(category)
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                store.filter().write().set(category, checked);
                            }
                        />
                        {category.label()}
                    </label>
                }
            }).collect_view()}
        </div>
    }
}
