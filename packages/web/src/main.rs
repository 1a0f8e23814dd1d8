use dioxus::prelude::*;

use views::{AppLayout, Home, Profile, SellerDashboard, ServiceDetails, SignIn, SignUp};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AppLayout)]
        #[route("/")]
        Home {},
        #[route("/signup")]
        SignUp {},
        #[route("/signin")]
        SignIn {},
        #[route("/seller-dashboard")]
        SellerDashboard {},
        #[route("/profile")]
        Profile {},
        #[route("/service/:id")]
        ServiceDetails { id: String },
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: ui::MAIN_CSS }

        // Browser storage, default settings
        ui::SessionProvider {
            Router::<Route> {}
        }
    }
}
