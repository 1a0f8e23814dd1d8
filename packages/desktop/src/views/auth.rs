//! Sign-up and sign-in routes for desktop.

use dioxus::prelude::*;
use store::UserRecord;
use ui::views::{SignInView, SignUpView};

use crate::Route;

#[component]
pub fn SignUp() -> Element {
    let nav = use_navigator();

    rsx! {
        SignUpView {
            on_signed_up: move |user: UserRecord| {
                let next = if user.is_seller {
                    Route::SellerDashboard {}
                } else {
                    Route::Home {}
                };
                nav.replace(next);
            },
            on_navigate_sign_in: move |_| {
                nav.replace(Route::SignIn {});
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
                nav.replace(Route::Home {});
            },
            on_navigate_sign_up: move |_| {
                nav.replace(Route::SignUp {});
            },
        }
    }
}
