//! Session context and hooks for the UI.

use dioxus::prelude::*;
use store::{MarketConfig, UserRecord};

use crate::make_repo;

/// Who is signed in, as seen by every view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<UserRecord>,
    /// Set when the stored session could not be read.
    pub error: Option<String>,
}

impl SessionState {
    pub fn signed_in(user: UserRecord) -> Self {
        Self {
            user: Some(user),
            error: None,
        }
    }

    pub fn signed_out() -> Self {
        Self::default()
    }
}

/// Get the session signal.
/// Updates when the user signs in, signs out, or edits their record.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Get the app configuration provided by [`SessionProvider`].
pub fn use_config() -> Signal<MarketConfig> {
    use_context::<Signal<MarketConfig>>()
}

/// Provider component for the session and configuration.
/// Wrap your app with this component.
#[component]
pub fn SessionProvider(#[props(default)] config: MarketConfig, children: Element) -> Element {
    let config = use_context_provider(|| Signal::new(config));

    // Storage is synchronous, so the session is ready on first render
    let session = use_context_provider(|| {
        let repo = make_repo(&config.peek());
        let state = match market::session::current_user(&repo) {
            Ok(user) => SessionState { user, error: None },
            Err(e) => {
                tracing::error!("Failed to load session: {}", e);
                SessionState {
                    user: None,
                    error: Some(e.to_string()),
                }
            }
        };
        Signal::new(state)
    });

    rsx! {
        if let Some(err) = session().error {
            div {
                class: "alert alert-error session-error",
                "{err}"
            }
        }
        {children}
    }
}

/// Button to sign out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    on_signed_out: EventHandler<()>,
) -> Element {
    let mut session = use_session();
    let config = use_config();

    let onclick = move |_| {
        let repo = make_repo(&config());
        match market::account::sign_out(&repo) {
            Ok(()) => {
                session.set(SessionState::signed_out());
                on_signed_out.call(());
            }
            Err(e) => {
                tracing::error!("Failed to sign out: {}", e);
                session.write().error = Some(e.to_string());
            }
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            crate::Icon { icon: crate::icons::FaRightFromBracket, width: 16, height: 16 }
            span { "{label}" }
        }
    }
}
