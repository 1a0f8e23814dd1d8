//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod repo;
pub use repo::{data_dir, make_repo};

pub mod views;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

mod navbar;
pub use navbar::{Footer, Navbar};

mod session;
pub use session::{use_config, use_session, LogoutButton, SessionProvider, SessionState};

mod stars;
pub use stars::StarRating;
