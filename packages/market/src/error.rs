use store::{ServiceId, StoreError};
use thiserror::Error;

/// Errors returned by marketplace operations.
///
/// The `Display` text is the message shown to the user next to the form.
#[derive(Debug, Error)]
pub enum MarketError {
    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Username is required")]
    UsernameRequired,

    #[error("Username already exists")]
    UsernameTaken,

    /// Same message for an unknown username and a wrong password.
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Only sellers can manage services")]
    NotASeller,

    #[error("Service {0} not found")]
    ServiceNotFound(ServiceId),

    #[error("Invalid price: {0:?}")]
    InvalidPrice(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}
