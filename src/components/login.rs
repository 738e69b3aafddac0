//! Login Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ApiError};
use crate::models::User;
use crate::session::Session;

/// Login then fetch the current user. The token is persisted before the
/// `/auth/me` call so the request carries the new credential; a failed
/// lookup discards it again.
async fn login_flow(
    session: Session,
    username: &str,
    password: &str,
) -> Result<(User, String), ApiError> {
    let token = api::login(session, username, password).await?;
    session.save(&token.access_token);
    match api::me(session).await {
        Ok(user) => Ok((user, token.access_token)),
        Err(e) => {
            session.clear();
            Err(e)
        }
    }
}

#[component]
pub fn Login(
    #[prop(into)] on_success: Callback<(User, String)>,
    #[prop(into)] on_toggle: Callback<()>,
) -> impl IntoView {
    let session = expect_context::<Session>();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(String::new());
    let (loading, set_loading) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get() {
            return;
        }
        set_error.set(String::new());
        set_loading.set(true);
        let name = username.get();
        let pass = password.get();

        spawn_local(async move {
            web_sys::console::log_1(&format!("[login] attempting login for {name}").into());
            match login_flow(session, &name, &pass).await {
                Ok((user, token)) => on_success.run((user, token)),
                Err(e) => {
                    web_sys::console::error_1(&format!("[login] failed: {e}").into());
                    set_error.set(e.display_message("Login failed"));
                }
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="auth-box">
            <h1>"Welcome to Pantry Manager"</h1>
            <h2>"Login"</h2>
            <form on:submit=submit>
                <div class="form-group">
                    <label>"Username"</label>
                    <input
                        type="text"
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                        required=true
                        autofocus=true
                    />
                </div>
                <div class="form-group">
                    <label>"Password"</label>
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        required=true
                    />
                </div>
                <Show when=move || !error.get().is_empty()>
                    <div class="error">{move || error.get()}</div>
                </Show>
                <button type="submit" disabled=move || loading.get()>
                    {move || if loading.get() { "Logging in..." } else { "Login" }}
                </button>
            </form>
            <p class="toggle-link">
                "Don't have an account? "
                <a on:click=move |_| on_toggle.run(())>"Register here"</a>
            </p>
        </div>
    }
}
