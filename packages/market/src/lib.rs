//! # Market crate — the marketplace's application operations
//!
//! Everything a view does besides rendering lives here, as plain functions over
//! a [`store::Repository`]. Views call these, show the returned error's message
//! inline, and push the returned [`UserRecord`] into their session signal.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`account`] | Sign-up, sign-in, sign-out |
//! | [`session`] | Reading the signed-in user, keeping the session snapshot and the directory in step, route guards |
//! | [`dashboard`] | Seller service create/update/delete |
//! | [`profile`] | Profile edit and the signed-in user's reviews |
//! | [`catalog`] | Static home page listing, categories, search filter |
//! | [`packages`] | Service package tiers, the showcased service, carousel state |
//!
//! ## Dual write
//!
//! Every mutation of a user goes through [`session::commit_user`], which writes
//! the directory first and then the session snapshot. On load,
//! [`session::current_user`] compares the snapshot with the directory and
//! repairs the snapshot if they drifted apart.

pub mod account;
pub mod catalog;
pub mod dashboard;
pub mod error;
pub mod packages;
pub mod profile;
pub mod session;

pub use error::MarketError;
pub use store::{ReviewRecord, ServiceId, ServiceRecord, UserRecord};

#[cfg(test)]
pub(crate) mod testing {
    use store::{MemoryStore, Repository};

    pub fn repo() -> Repository<MemoryStore> {
        Repository::new(MemoryStore::new())
    }
}
