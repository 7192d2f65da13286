//! Logout Banner Component
//!
//! "Logged in as ..." line with a logout link, shown only with a stored username.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::route::Route;

#[component]
pub fn LogoutBanner() -> impl IntoView {
    let ctx = use_app_context();

    ctx.client().username().map(|username| {
        view! {
            <p class="text-right">
                "Logged in as " <em>{username}</em> ". "
                // The link itself ends the server session
                <a href=Route::Logout.path() on:click=move |_| ctx.client().logout()>
                    <span class="fa fa-sign-out"></span>
                    "Logout"
                </a>
            </p>
        }
    })
}
