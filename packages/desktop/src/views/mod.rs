mod layout;
pub use layout::AppLayout;

mod auth;
pub use auth::{SignIn, SignUp};

mod pages;
pub use pages::{Home, Profile, SellerDashboard, ServiceDetails};
