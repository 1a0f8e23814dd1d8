//! Home page.

use dioxus::prelude::*;
use market::catalog::{filter_listings, Category, Listing, CATEGORIES};

use crate::icons::{FaChevronDown, FaHeart, FaMagnifyingGlass, FaStar};
use crate::Icon;

/// Home page: hero search, category bar, and the filtered listing grid.
#[component]
pub fn HomeView(
    /// Called with the listing id when a card is clicked.
    on_open_listing: EventHandler<u32>,
) -> Element {
    let mut query = use_signal(String::new);
    let listings = filter_listings(&query());

    rsx! {
        section {
            class: "hero",
            div {
                class: "container hero-inner",
                h2 { class: "hero-title", "Find the perfect freelance services for your business" }
                p { class: "hero-subtitle", "Millions of people use Connection to turn their ideas into reality" }
                div {
                    class: "search-box",
                    input {
                        class: "search-input",
                        r#type: "text",
                        placeholder: "What service are you looking for today?",
                        value: query(),
                        oninput: move |evt: FormEvent| query.set(evt.value()),
                    }
                    button {
                        class: "btn btn-primary search-button",
                        Icon { icon: FaMagnifyingGlass, width: 18, height: 18 }
                        span { "Search" }
                    }
                }
            }
        }

        div {
            class: "category-bar",
            div {
                class: "container category-bar-inner",
                for category in CATEGORIES {
                    CategoryDropdown { key: "{category.name}", category: category.clone() }
                }
            }
        }

        section {
            class: "container listings",
            h3 { class: "section-title", "Services you might like" }
            if listings.is_empty() {
                p { class: "muted", "No services match \"{query}\"." }
            }
            div {
                class: "listing-grid",
                for listing in listings {
                    ListingCard {
                        key: "{listing.id}",
                        listing: listing.clone(),
                        on_open: move |id| on_open_listing.call(id),
                    }
                }
            }
        }
    }
}

#[component]
fn CategoryDropdown(category: Category) -> Element {
    let mut open = use_signal(|| false);

    rsx! {
        div {
            class: "category",
            onmouseenter: move |_| open.set(true),
            onmouseleave: move |_| open.set(false),
            button {
                class: "category-button",
                span { "{category.name}" }
                Icon { icon: FaChevronDown, width: 12, height: 12 }
            }
            if open() {
                div {
                    class: "category-menu",
                    for sub in category.subcategories.iter() {
                        a { key: "{sub}", class: "category-item", href: "#", "{sub}" }
                    }
                }
            }
        }
    }
}

#[component]
fn ListingCard(listing: Listing, on_open: EventHandler<u32>) -> Element {
    let id = listing.id;

    rsx! {
        div {
            class: "card listing-card",
            onclick: move |_| on_open.call(id),
            div {
                class: "card-media",
                img { class: "card-image", src: "{listing.image}", alt: "{listing.title}" }
                button {
                    class: "favorite",
                    onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                    Icon { icon: FaHeart, width: 18, height: 18 }
                }
            }
            div {
                class: "card-body",
                div {
                    class: "seller-line",
                    div { class: "avatar-placeholder" }
                    div {
                        h5 { class: "seller-name", "{listing.seller}" }
                        span { class: "seller-level", "{listing.level}" }
                    }
                }
                h4 { class: "card-title", "{listing.title}" }
                div {
                    class: "rating-line",
                    span { class: "star star-filled", Icon { icon: FaStar, width: 14, height: 14 } }
                    span { class: "rating", "{listing.rating}" }
                    span { class: "muted", "({listing.reviews})" }
                }
                div {
                    class: "card-footer",
                    span { class: "muted small", "From" }
                    span { class: "price", "${listing.price}" }
                }
            }
        }
    }
}
