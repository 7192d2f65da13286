//! Login Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::browser;
use crate::context::use_app_context;
use crate::error::Action;

#[component]
pub fn LoginForm() -> impl IntoView {
    let ctx = use_app_context();

    let (login, set_login) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let login = login.get_untracked();
        let password = password.get_untracked();
        let client = ctx.client();

        spawn_local(async move {
            match client.login(&login, &password).await {
                Ok(route) => browser::navigate(route),
                Err(e) => browser::notify(e.notice(Action::Login)),
            }
        });
    };

    view! {
        <form id="login_form" class="login-form" on:submit=submit>
            <input
                id="login_input"
                type="text"
                placeholder="Login"
                prop:value=move || login.get()
                on:input=move |ev| set_login.set(event_target_value(&ev))
            />
            <input
                id="password_input"
                type="password"
                placeholder="Password"
                prop:value=move || password.get()
                on:input=move |ev| set_password.set(event_target_value(&ev))
            />
            <button type="submit">"Log me in"</button>
        </form>
    }
}
