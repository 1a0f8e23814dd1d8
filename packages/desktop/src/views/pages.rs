use dioxus::prelude::*;
use ui::views::{HomeView, ProfileView, SellerDashboardView, ServiceDetailsView};

use crate::Route;

#[component]
pub fn Home() -> Element {
    let nav = use_navigator();

    rsx! {
        HomeView {
            on_open_listing: move |id: u32| {
                nav.push(Route::ServiceDetails { id: id.to_string() });
            },
        }
    }
}

#[component]
pub fn SellerDashboard() -> Element {
    let nav = use_navigator();

    rsx! {
        SellerDashboardView {
            on_redirect_sign_in: move |_| {
                nav.replace(Route::SignIn {});
            },
            on_redirect_home: move |_| {
                nav.replace(Route::Home {});
            },
        }
    }
}

#[component]
pub fn Profile() -> Element {
    let nav = use_navigator();

    rsx! {
        ProfileView {
            on_redirect_sign_in: move |_| {
                nav.replace(Route::SignIn {});
            },
        }
    }
}

#[component]
pub fn ServiceDetails(id: String) -> Element {
    rsx! {
        ServiceDetailsView { id }
    }
}
