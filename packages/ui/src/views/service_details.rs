//! Service details page.

use std::time::Duration;

use dioxus::prelude::*;
use market::packages::{Carousel, Tier, SHOWCASE};

use crate::icons::{
    FaCheck, FaChevronLeft, FaChevronRight, FaClock, FaHeart, FaMessage, FaRotate,
    FaShareNodes, FaStar,
};
use crate::{use_config, Icon};

async fn sleep(ms: u32) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(Duration::from_millis(ms as u64)).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(Duration::from_millis(ms as u64)).await;
}

/// Service details page with the three package tiers.
///
/// `id` comes from the route but every id shows the same service.
#[component]
pub fn ServiceDetailsView(id: String) -> Element {
    let config = use_config();
    let mut tier = use_signal(Tier::default);
    let mut carousel = use_signal(|| Carousel::new(SHOWCASE.slides.len()));

    use_future(move || async move {
        let interval = config.peek().carousel.autoplay_interval_ms;
        if interval == 0 {
            return;
        }
        loop {
            sleep(interval).await;
            carousel.write().next();
        }
    });

    let package = tier().details();
    let slide = SHOWCASE.slides.get(carousel().index()).copied().unwrap_or_default();

    rsx! {
        div {
            class: "container page details",
            "data-service-id": "{id}",

            div {
                class: "details-main",
                h1 { class: "page-title", "{SHOWCASE.title}" }

                div {
                    class: "seller-line",
                    img { class: "avatar", src: "{SHOWCASE.seller_avatar}", alt: "{SHOWCASE.seller}" }
                    div {
                        h3 { class: "seller-name", "{SHOWCASE.seller}" }
                        div {
                            class: "rating-line",
                            span { class: "star star-filled", Icon { icon: FaStar, width: 14, height: 14 } }
                            span { class: "rating", "{SHOWCASE.rating}" }
                            span { class: "muted", "({SHOWCASE.reviews} reviews)" }
                        }
                    }
                }

                div {
                    class: "carousel",
                    img { class: "carousel-image", src: "{slide}", alt: "Service preview" }
                    button {
                        class: "carousel-arrow carousel-prev",
                        onclick: move |_| carousel.write().prev(),
                        Icon { icon: FaChevronLeft, width: 20, height: 20 }
                    }
                    button {
                        class: "carousel-arrow carousel-next",
                        onclick: move |_| carousel.write().next(),
                        Icon { icon: FaChevronRight, width: 20, height: 20 }
                    }
                    div {
                        class: "carousel-dots",
                        for i in 0..SHOWCASE.slides.len() {
                            button {
                                key: "{i}",
                                class: if i == carousel().index() { "carousel-dot active" } else { "carousel-dot" },
                                onclick: move |_| carousel.write().go_to(i),
                            }
                        }
                    }
                }

                div {
                    class: "panel",
                    h2 { class: "panel-title", "About This Service" }
                    p { class: "muted", "{SHOWCASE.about}" }
                    h3 { "Why choose me?" }
                    ul {
                        class: "highlights",
                        for item in SHOWCASE.highlights.iter() {
                            li {
                                key: "{item}",
                                Icon { icon: FaCheck, width: 14, height: 14, class: "check" }
                                span { "{item}" }
                            }
                        }
                    }
                }
            }

            aside {
                class: "details-side panel",
                div {
                    class: "tier-tabs",
                    for t in Tier::ALL {
                        button {
                            key: "{t.details().name}",
                            class: if t == tier() { "tier-tab active" } else { "tier-tab" },
                            onclick: move |_| tier.set(t),
                            "{t.details().name}"
                        }
                    }
                }

                div {
                    class: "package",
                    div {
                        class: "package-header",
                        h3 { "{package.name}" }
                        span { class: "price", "${package.price}" }
                    }
                    p { class: "muted", "{package.description}" }
                    div {
                        class: "package-meta",
                        span {
                            Icon { icon: FaClock, width: 14, height: 14 }
                            " {package.delivery_time} delivery"
                        }
                        span {
                            Icon { icon: FaRotate, width: 14, height: 14 }
                            " {package.revisions} revisions"
                        }
                    }
                    ul {
                        class: "package-features",
                        for feature in package.features.iter() {
                            li {
                                key: "{feature}",
                                Icon { icon: FaCheck, width: 14, height: 14, class: "check" }
                                span { "{feature}" }
                            }
                        }
                    }
                    button { class: "btn btn-primary w-full", "{package.cta_label()}" }
                }

                div {
                    class: "details-actions",
                    button { class: "btn btn-ghost", title: "Save", Icon { icon: FaHeart, width: 18, height: 18 } }
                    button { class: "btn btn-ghost", title: "Share", Icon { icon: FaShareNodes, width: 18, height: 18 } }
                    button {
                        class: "btn btn-outline",
                        Icon { icon: FaMessage, width: 16, height: 16 }
                        span { "Contact Seller" }
                    }
                }
            }
        }
    }
}
