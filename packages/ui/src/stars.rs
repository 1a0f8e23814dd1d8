use dioxus::prelude::*;

use crate::icons::FaStar;
use crate::Icon;

/// Five stars, filled up to `rating`.
#[component]
pub fn StarRating(rating: u8) -> Element {
    rsx! {
        div {
            class: "stars",
            title: "{rating} out of 5",
            for i in 0..5u8 {
                span {
                    key: "{i}",
                    class: if i < rating { "star star-filled" } else { "star" },
                    Icon { icon: FaStar, width: 18, height: 18 }
                }
            }
        }
    }
}
