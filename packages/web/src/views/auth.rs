//! Sign-up and sign-in routes.

use dioxus::prelude::*;
use ui::views::{SignInView, SignUpView};

use crate::Route;

#[component]
pub fn SignUp() -> Element {
    let nav = use_navigator();

    rsx! {
        SignUpView {
            on_signed_up: move |user: store::UserRecord| {
                if user.is_seller {
                    nav.push(Route::SellerDashboard {});
                } else {
                    nav.push(Route::Home {});
                }
            },
            on_navigate_sign_in: move |_| {
                nav.push(Route::SignIn {});
            },
        }
    }
}

#[component]
pub fn SignIn() -> Element {
    let nav = use_navigator();

    rsx! {
        SignInView {
            on_signed_in: move |_| {
                nav.push(Route::Home {});
            },
            on_navigate_sign_up: move |_| {
                nav.push(Route::SignUp {});
            },
        }
    }
}
