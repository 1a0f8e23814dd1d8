use dioxus::prelude::*;

use crate::icons::{FaArrowTrendUp, FaBell, FaCircleUser};
use crate::{use_session, Icon, LogoutButton};

const BRAND: &str = "خدمة";

/// Site header. Links depend on who is signed in.
#[component]
pub fn Navbar(
    on_navigate_home: EventHandler<()>,
    on_navigate_sign_in: EventHandler<()>,
    on_navigate_sign_up: EventHandler<()>,
    on_navigate_dashboard: EventHandler<()>,
    on_navigate_profile: EventHandler<()>,
    on_signed_out: EventHandler<()>,
) -> Element {
    let session = use_session();
    // Always empty: nothing produces notifications
    let notifications: Vec<String> = Vec::new();

    rsx! {
        header {
            class: "navbar",
            div {
                class: "navbar-inner container",

                a {
                    class: "brand",
                    onclick: move |_| on_navigate_home.call(()),
                    Icon { icon: FaArrowTrendUp, width: 32, height: 32, class: "brand-icon" }
                    h1 { class: "brand-name", "{BRAND}" }
                }

                nav {
                    class: "navbar-links",
                    if let Some(user) = session().user {
                        div {
                            class: "notifications",
                            button {
                                class: "nav-link",
                                title: "Notifications",
                                Icon { icon: FaBell, width: 22, height: 22 }
                                if !notifications.is_empty() {
                                    span { class: "badge", "{notifications.len()}" }
                                }
                            }
                        }
                        div { class: "divider-vertical" }
                        if user.is_seller {
                            a {
                                class: "nav-link",
                                onclick: move |_| on_navigate_dashboard.call(()),
                                "Seller Dashboard"
                            }
                        }
                        a {
                            class: "nav-link nav-user",
                            onclick: move |_| on_navigate_profile.call(()),
                            Icon { icon: FaCircleUser, width: 18, height: 18 }
                            span { "{user.username}" }
                        }
                        LogoutButton {
                            class: "nav-link",
                            on_signed_out: move |_| on_signed_out.call(()),
                        }
                    } else {
                        a {
                            class: "nav-link",
                            onclick: move |_| on_navigate_sign_in.call(()),
                            "Sign In"
                        }
                        a {
                            class: "btn btn-primary",
                            onclick: move |_| on_navigate_sign_up.call(()),
                            "Join Now"
                        }
                    }
                }
            }
        }
    }
}

/// Site footer.
#[component]
pub fn Footer() -> Element {
    rsx! {
        footer {
            class: "footer",
            div {
                class: "footer-grid container",
                div {
                    div {
                        class: "brand",
                        Icon { icon: FaArrowTrendUp, width: 24, height: 24, class: "brand-icon" }
                        span { class: "brand-name", "{BRAND}" }
                    }
                    p { class: "muted", "Find the perfect match for your project needs." }
                }
                div {
                    h5 { "About" }
                    p {
                        class: "muted",
                        "Connection is your gateway to a world of professional services, connecting talented freelancers with clients who need their expertise."
                    }
                    p {
                        class: "muted",
                        "Our platform makes it easy to find, connect, and collaborate with the right professionals for your project."
                    }
                }
                div {
                    h5 { "Support" }
                    ul {
                        class: "footer-links",
                        li { a { href: "#", "Help Center" } }
                        li { a { href: "#", "Contact Us" } }
                        li { a { href: "#", "Terms of Service" } }
                    }
                }
            }
        }
    }
}
