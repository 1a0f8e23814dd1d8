use dioxus::prelude::*;
use ui::{Footer, Navbar};

use crate::Route;

/// Header and footer around every page.
#[component]
pub fn AppLayout() -> Element {
    let nav = use_navigator();

    rsx! {
        Navbar {
            on_navigate_home: move |_| {
                nav.push(Route::Home {});
            },
            on_navigate_sign_in: move |_| {
                nav.push(Route::SignIn {});
            },
            on_navigate_sign_up: move |_| {
                nav.push(Route::SignUp {});
            },
            on_navigate_dashboard: move |_| {
                nav.push(Route::SellerDashboard {});
            },
            on_navigate_profile: move |_| {
                nav.push(Route::Profile {});
            },
            on_signed_out: move |_| {
                nav.push(Route::Home {});
            },
        }

        main {
            class: "main",
            Outlet::<Route> {}
        }

        Footer {}
    }
}
