//! Pantry Manager Frontend App
//!
//! Root controller: owns the session and which top-level screen is shown.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{Login, MainApp, Register};
use crate::models::User;
use crate::session::Session;

/// Top-level screen state
#[derive(Debug, Clone, PartialEq)]
pub enum AuthPhase {
    /// Validating a stored token on startup
    Loading,
    Unauthenticated { register: bool },
    Authenticated(User),
}

impl AuthPhase {
    /// Startup outcome: a user when the stored token was accepted
    pub fn resolve_startup(user: Option<User>) -> Self {
        match user {
            Some(user) => Self::Authenticated(user),
            None => Self::logged_out(),
        }
    }

    pub fn logged_in(user: User) -> Self {
        Self::Authenticated(user)
    }

    pub fn logged_out() -> Self {
        Self::Unauthenticated { register: false }
    }

    /// Flip between login and register; no-op outside the auth screens
    pub fn toggled(&self) -> Self {
        match self {
            Self::Unauthenticated { register } => Self::Unauthenticated {
                register: !register,
            },
            other => other.clone(),
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let session = Session::default();
    provide_context(session);

    let (phase, set_phase) = signal(AuthPhase::Loading);

    // Re-validate any stored token on startup; a rejected token is cleared
    // and the login screen shown.
    Effect::new(move |_| {
        if session.load().is_some() {
            spawn_local(async move {
                match api::me(session).await {
                    Ok(user) => set_phase.set(AuthPhase::resolve_startup(Some(user))),
                    Err(e) => {
                        web_sys::console::log_1(
                            &format!("[app] stored token rejected: {e}").into(),
                        );
                        session.clear();
                        set_phase.set(AuthPhase::resolve_startup(None));
                    }
                }
            });
        } else {
            set_phase.set(AuthPhase::resolve_startup(None));
        }
    });

    let on_auth = Callback::new(move |(user, token): (User, String)| {
        session.save(&token);
        set_phase.set(AuthPhase::logged_in(user));
    });

    let on_toggle = Callback::new(move |_: ()| {
        set_phase.update(|phase| *phase = phase.toggled());
    });

    let on_logout = Callback::new(move |_: ()| {
        session.clear();
        set_phase.set(AuthPhase::logged_out());
    });

    view! {
        {move || match phase.get() {
            AuthPhase::Loading => view! {
                <div class="loading">"Loading..."</div>
            }
            .into_any(),
            AuthPhase::Unauthenticated { register: false } => view! {
                <div class="auth-container">
                    <Login on_success=on_auth on_toggle=on_toggle />
                </div>
            }
            .into_any(),
            AuthPhase::Unauthenticated { register: true } => view! {
                <div class="auth-container">
                    <Register on_success=on_auth on_toggle=on_toggle />
                </div>
            }
            .into_any(),
            AuthPhase::Authenticated(user) => view! {
                <MainApp user=user on_logout=on_logout />
            }
            .into_any(),
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: 1,
            username: "alice".to_string(),
            created_at: None,
        }
    }

    #[test]
    fn startup_with_accepted_token_is_authenticated() {
        assert_eq!(
            AuthPhase::resolve_startup(Some(user())),
            AuthPhase::Authenticated(user())
        );
    }

    #[test]
    fn startup_with_rejected_or_missing_token_shows_login() {
        assert_eq!(
            AuthPhase::resolve_startup(None),
            AuthPhase::Unauthenticated { register: false }
        );
    }

    #[test]
    fn toggle_flips_between_login_and_register() {
        let login = AuthPhase::logged_out();
        let register = login.toggled();
        assert_eq!(register, AuthPhase::Unauthenticated { register: true });
        assert_eq!(register.toggled(), login);
    }

    #[test]
    fn toggle_is_a_noop_once_authenticated() {
        let phase = AuthPhase::logged_in(user());
        assert_eq!(phase.toggled(), phase);
    }

    #[test]
    fn logout_returns_to_login() {
        assert_eq!(
            AuthPhase::logged_out(),
            AuthPhase::Unauthenticated { register: false }
        );
    }
}
