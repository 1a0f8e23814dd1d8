use market::MarketError;

mod home;
pub use home::HomeView;

mod sign_up;
pub use sign_up::SignUpView;

mod sign_in;
pub use sign_in::SignInView;

mod seller_dashboard;
pub use seller_dashboard::SellerDashboardView;

mod service_details;
pub use service_details::ServiceDetailsView;

mod profile;
pub use profile::ProfileView;

/// Log a failed action. Storage failures are errors, rejected input is not.
pub(crate) fn report_error(context: &str, e: &MarketError) {
    match e {
        MarketError::Store(_) => tracing::error!("{} failed: {}", context, e),
        _ => tracing::debug!("{} rejected: {}", context, e),
    }
}
