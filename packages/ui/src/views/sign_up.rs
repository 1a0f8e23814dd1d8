//! Sign-up form.

use dioxus::prelude::*;
use market::account::{sign_up, SignUpForm};
use store::UserRecord;

use crate::components::{Button, ButtonVariant, ErrorBanner, Input, Label, Textarea};
use crate::{make_repo, use_config, use_session, SessionState};

/// Sign-up page.
///
/// On success the new user is already signed in; the platform decides where
/// to go next (sellers to their dashboard, buyers home).
#[component]
pub fn SignUpView(
    on_signed_up: EventHandler<UserRecord>,
    on_navigate_sign_in: EventHandler<()>,
) -> Element {
    let mut session = use_session();
    let config = use_config();
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut is_seller = use_signal(|| false);
    let mut seller_description = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);

        let form = SignUpForm {
            username: username(),
            email: email(),
            password: password(),
            confirm_password: confirm_password(),
            is_seller: is_seller(),
            seller_description: seller_description(),
        };
        let repo = make_repo(&config());
        match sign_up(&repo, form) {
            Ok(user) => {
                session.set(SessionState::signed_in(user.clone()));
                on_signed_up.call(user);
            }
            Err(e) => {
                super::report_error("sign up", &e);
                error.set(Some(e.to_string()));
            }
        }
    };

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "panel",
                h2 { class: "panel-title", "Create your account" }

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
                        Label { html_for: "email", "Email address" }
                        Input {
                            id: "email",
                            r#type: "email",
                            required: true,
                            value: email(),
                            oninput: move |evt: FormEvent| email.set(evt.value()),
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

                    div {
                        class: "field",
                        Label { html_for: "confirm-password", "Confirm Password" }
                        Input {
                            id: "confirm-password",
                            r#type: "password",
                            required: true,
                            value: confirm_password(),
                            oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                        }
                    }

                    div {
                        class: "field field-inline",
                        input {
                            id: "is-seller",
                            r#type: "checkbox",
                            checked: is_seller(),
                            onchange: move |evt: FormEvent| is_seller.set(evt.checked()),
                        }
                        Label { html_for: "is-seller", "I want to become a seller" }
                    }

                    if is_seller() {
                        div {
                            class: "field",
                            Label { html_for: "seller-description", "Professional Description" }
                            Textarea {
                                id: "seller-description",
                                required: true,
                                value: seller_description(),
                                oninput: move |evt: FormEvent| seller_description.set(evt.value()),
                            }
                        }
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        class: "w-full",
                        r#type: "submit",
                        "Sign Up"
                    }
                }

                p {
                    class: "panel-footer",
                    "Already have an account? "
                    a {
                        class: "link",
                        onclick: move |_| on_navigate_sign_in.call(()),
                        "Sign in"
                    }
                }
            }
        }
    }
}
