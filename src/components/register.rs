//! Register Component
//!
//! Local validation runs before any network call; on pass the flow is
//! register, auto-login, then current-user lookup.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ApiError};
use crate::models::User;
use crate::session::Session;

const MIN_PASSWORD_LEN: usize = 8;

/// Client-side password policy, checked before any network call
pub(crate) fn validate_passwords(password: &str, confirm: &str) -> Result<(), &'static str> {
    if password != confirm {
        return Err("Passwords do not match");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters");
    }
    Ok(())
}

/// Register, auto-login, then fetch the new user. The token is persisted
/// before `/auth/me` so the request carries the new credential.
async fn register_flow(
    session: Session,
    username: &str,
    password: &str,
) -> Result<(User, String), ApiError> {
    api::register(session, username, password).await?;
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
pub fn Register(
    #[prop(into)] on_success: Callback<(User, String)>,
    #[prop(into)] on_toggle: Callback<()>,
) -> impl IntoView {
    let session = expect_context::<Session>();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (error, set_error) = signal(String::new());
    let (loading, set_loading) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get() {
            return;
        }
        set_error.set(String::new());

        if let Err(msg) = validate_passwords(&password.get(), &confirm_password.get()) {
            set_error.set(msg.to_string());
            return;
        }

        set_loading.set(true);
        let name = username.get();
        let pass = password.get();

        spawn_local(async move {
            web_sys::console::log_1(&format!("[register] attempting to register {name}").into());
            match register_flow(session, &name, &pass).await {
                Ok((user, token)) => on_success.run((user, token)),
                Err(e) => {
                    web_sys::console::error_1(&format!("[register] failed: {e}").into());
                    set_error.set(e.display_message("Registration failed"));
                }
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="auth-box">
            <h1>"Welcome to Pantry Manager"</h1>
            <h2>"Create Account"</h2>
            <form on:submit=submit>
                <div class="form-group">
                    <label>"Username"</label>
                    <input
                        type="text"
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                        required=true
                        minlength=3
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
                        minlength=8
                    />
                </div>
                <div class="form-group">
                    <label>"Confirm Password"</label>
                    <input
                        type="password"
                        prop:value=move || confirm_password.get()
                        on:input=move |ev| set_confirm_password.set(event_target_value(&ev))
                        required=true
                        minlength=8
                    />
                </div>
                <Show when=move || !error.get().is_empty()>
                    <div class="error">{move || error.get()}</div>
                </Show>
                <button type="submit" disabled=move || loading.get()>
                    {move || if loading.get() { "Creating account..." } else { "Create Account" }}
                </button>
            </form>
            <p class="toggle-link">
                "Already have an account? "
                <a on:click=move |_| on_toggle.run(())>"Login here"</a>
            </p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatched_passwords_are_rejected() {
        assert_eq!(
            validate_passwords("password123", "password124"),
            Err("Passwords do not match")
        );
    }

    #[test]
    fn short_passwords_are_rejected() {
        assert_eq!(
            validate_passwords("short7!", "short7!"),
            Err("Password must be at least 8 characters")
        );
    }

    #[test]
    fn mismatch_is_reported_before_length() {
        assert_eq!(
            validate_passwords("short", "other"),
            Err("Passwords do not match")
        );
    }

    #[test]
    fn eight_characters_pass() {
        assert_eq!(validate_passwords("12345678", "12345678"), Ok(()));
    }
}
