//! Sign-up, sign-in and sign-out.
//!
//! Credentials are plain text and compared exactly. There is no email format
//! check and no password strength rule.

use store::{KeyValueStore, Repository, UserRecord};

use crate::error::MarketError;

/// Fields of the sign-up form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignUpForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub is_seller: bool,
    pub seller_description: String,
}

/// Register a new user and sign them in.
///
/// Checks run in order and stop at the first failure: password confirmation,
/// non-empty username, username uniqueness. Nothing is written unless all pass.
pub fn sign_up<S: KeyValueStore>(
    repo: &Repository<S>,
    form: SignUpForm,
) -> Result<UserRecord, MarketError> {
    if form.password != form.confirm_password {
        return Err(MarketError::PasswordMismatch);
    }
    if form.username.is_empty() {
        return Err(MarketError::UsernameRequired);
    }
    if repo.find_user(&form.username)?.is_some() {
        return Err(MarketError::UsernameTaken);
    }

    let user = UserRecord {
        username: form.username,
        email: form.email,
        password: form.password,
        is_seller: form.is_seller,
        seller_description: form.seller_description,
        services: Vec::new(),
    };
    repo.insert_user(&user)?;
    repo.set_session(&user)?;
    tracing::info!(username = %user.username, seller = user.is_seller, "signed up");
    Ok(user)
}

/// Sign in with an exact username and password match.
pub fn sign_in<S: KeyValueStore>(
    repo: &Repository<S>,
    username: &str,
    password: &str,
) -> Result<UserRecord, MarketError> {
    let user = repo
        .list_users()?
        .into_iter()
        .find(|u| u.username == username && u.password == password)
        .ok_or(MarketError::InvalidCredentials)?;
    repo.set_session(&user)?;
    tracing::info!(username = %user.username, "signed in");
    Ok(user)
}

/// Forget the signed-in user.
pub fn sign_out<S: KeyValueStore>(repo: &Repository<S>) -> Result<(), MarketError> {
    repo.clear_session()?;
    tracing::info!("signed out");
    Ok(())
}
