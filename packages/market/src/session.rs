//! Session snapshot handling and route guards.
//!
//! The session is a full copy of a [`UserRecord`] kept under its own key. It is
//! never a live reference into the directory, so the two copies can drift
//! (another tab edits the directory, an older build wrote only one of them).
//! [`commit_user`] is the single write path for user changes and
//! [`current_user`] repairs drift when the app loads.

use store::{KeyValueStore, Repository, UserRecord};

use crate::error::MarketError;

/// Outcome of a route guard.
#[derive(Clone, Debug, PartialEq)]
pub enum Access {
    Granted(UserRecord),
    RedirectSignIn,
    RedirectHome,
}

/// Load the signed-in user, reconciled against the directory.
///
/// The directory copy wins. A snapshot whose username no longer exists in the
/// directory is cleared.
pub fn current_user<S: KeyValueStore>(
    repo: &Repository<S>,
) -> Result<Option<UserRecord>, MarketError> {
    let Some(snapshot) = repo.get_session()? else {
        return Ok(None);
    };
    match repo.find_user(&snapshot.username)? {
        Some(user) if user == snapshot => Ok(Some(user)),
        Some(user) => {
            tracing::warn!(username = %user.username, "session snapshot drifted from directory, refreshing");
            repo.set_session(&user)?;
            Ok(Some(user))
        }
        None => {
            tracing::warn!(username = %snapshot.username, "session user missing from directory, signing out");
            repo.clear_session()?;
            Ok(None)
        }
    }
}

/// Write `user` to the directory and then to the session snapshot.
pub fn commit_user<S: KeyValueStore>(
    repo: &Repository<S>,
    user: &UserRecord,
) -> Result<(), MarketError> {
    repo.upsert_user(user)?;
    repo.set_session(user)?;
    Ok(())
}

/// Guard for pages that need any signed-in user.
pub fn member_access(session: Option<&UserRecord>) -> Access {
    match session {
        Some(user) => Access::Granted(user.clone()),
        None => Access::RedirectSignIn,
    }
}

/// Guard for the seller dashboard.
pub fn seller_access(session: Option<&UserRecord>) -> Access {
    match session {
        None => Access::RedirectSignIn,
        Some(user) if !user.is_seller => Access::RedirectHome,
        Some(user) => Access::Granted(user.clone()),
    }
}
