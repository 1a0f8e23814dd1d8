//! Sign-in form.

use dioxus::prelude::*;
use market::account::sign_in;
use store::UserRecord;

use crate::components::{Button, ButtonVariant, ErrorBanner, Input, Label};
use crate::{make_repo, use_config, use_session, SessionState};

/// Sign-in page.
#[component]
pub fn SignInView(
    on_signed_in: EventHandler<UserRecord>,
    on_navigate_sign_up: EventHandler<()>,
) -> Element {
    let mut session = use_session();
    let config = use_config();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);

        let repo = make_repo(&config());
        match sign_in(&repo, &username(), &password()) {
            Ok(user) => {
                session.set(SessionState::signed_in(user.clone()));
                on_signed_in.call(user);
            }
            Err(e) => {
                super::report_error("sign in", &e);
                error.set(Some(e.to_string()));
            }
        }
    };

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "panel",
                h2 { class: "panel-title", "Sign in to your account" }

                if let Some(err) = error() {
                    ErrorBanner { message: err }
                }

                form {
                    class: "form",
                    onsubmit: handle_submit,

                    div {
                        class: "field",
                        Label { html_for: "username", "Username" }
                        Input {
                            id: "username",
                            required: true,
                            value: username(),
                            oninput: move |evt: FormEvent| username.set(evt.value()),
                        }
                    }

                    div {
                        class: "field",
                        Label { html_for: "password", "Password" }
                        Input {
                            id: "password",
                            r#type: "password",
                            required: true,
                            value: password(),
                            oninput: move |evt: FormEvent| password.set(evt.value()),
                        }
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        class: "w-full",
                        r#type: "submit",
                        "Sign In"
                    }
                }

                p {
                    class: "panel-footer",
                    "Don't have an account? "
                    a {
                        class: "link",
                        onclick: move |_| on_navigate_sign_up.call(()),
                        "Sign up"
                    }
                }
            }
        }
    }
}
