//! # Repository — typed access to the marketplace's key-value blobs
//!
//! All persisted state lives in three JSON blobs under fixed keys. [`Repository`]
//! is the only code that knows those keys; everything above it deals in
//! [`UserRecord`] and [`ReviewRecord`] values. Reads and writes go through the
//! [`KeyValueStore`] trait, so the same logic runs against browser
//! `localStorage` ([`crate::LocalStorage`]), JSON files on desktop
//! ([`crate::FileStore`]), or an in-memory map ([`crate::MemoryStore`]).
//!
//! ## Keys
//!
//! | Key | Value | Written by |
//! |-----|-------|-----------|
//! | `users` | array of [`UserRecord`] | sign-up, profile edit, service changes |
//! | `currentUser` | one [`UserRecord`] snapshot | sign-in, sign-up, every user mutation |
//! | `reviews` | array of [`ReviewRecord`] | never (read-only) |
//!
//! An optional prefix (see [`crate::MarketConfig`]) is prepended to every key.
//!
//! ## Semantics
//!
//! The directory is read and written whole: [`upsert_user`](Repository::upsert_user)
//! loads the array, replaces one entry, and writes the array back. There is no
//! locking, so two writers in different tabs race and the last one wins.
//!
//! An absent key reads as "empty". A present key that does not parse, or parses
//! into a record failing `validate`, is a [`StoreError::Malformed`].

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StoreError;
use crate::models::{ReviewRecord, UserRecord};

const USERS_KEY: &str = "users";
const SESSION_KEY: &str = "currentUser";
const REVIEWS_KEY: &str = "reviews";

/// Synchronous string key-value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// The marketplace's persisted state, backed by a KeyValueStore.
pub struct Repository<S: KeyValueStore> {
    store: S,
    prefix: String,
}

impl<S: KeyValueStore> Repository<S> {
    pub fn new(store: S) -> Self {
        Self::with_prefix(store, "")
    }

    /// Scope every key under `prefix` (e.g. `"demo:"` → `"demo:users"`).
    pub fn with_prefix(store: S, prefix: &str) -> Self {
        Self {
            store,
            prefix: prefix.to_string(),
        }
    }

    fn key(&self, name: &str) -> String {
        format!("{}{name}", self.prefix)
    }

    fn read_json<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>, StoreError> {
        let key = self.key(name);
        let Some(raw) = self.store.get(&key)? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| StoreError::malformed(&key, e))
    }

    fn write_json<T: Serialize + ?Sized>(&self, name: &str, value: &T) -> Result<(), StoreError> {
        let key = self.key(name);
        let raw = serde_json::to_string(value).map_err(|source| StoreError::Serialize {
            key: key.clone(),
            source,
        })?;
        self.store.set(&key, &raw)
    }

    /// Every registered user, in insertion order.
    pub fn list_users(&self) -> Result<Vec<UserRecord>, StoreError> {
        let users: Vec<UserRecord> = self.read_json(USERS_KEY)?.unwrap_or_default();
        for user in &users {
            user.validate()
                .map_err(|reason| StoreError::malformed(&self.key(USERS_KEY), reason))?;
        }
        Ok(users)
    }

    pub fn find_user(&self, username: &str) -> Result<Option<UserRecord>, StoreError> {
        Ok(self
            .list_users()?
            .into_iter()
            .find(|u| u.username == username))
    }

    /// Append a new user. Callers check username uniqueness first.
    pub fn insert_user(&self, user: &UserRecord) -> Result<(), StoreError> {
        let mut users = self.list_users()?;
        users.push(user.clone());
        self.write_json(USERS_KEY, &users)
    }

    /// Replace the user with the same username, or append if none matches.
    pub fn upsert_user(&self, user: &UserRecord) -> Result<(), StoreError> {
        let mut users = self.list_users()?;
        match users.iter_mut().find(|u| u.username == user.username) {
            Some(existing) => *existing = user.clone(),
            None => users.push(user.clone()),
        }
        self.write_json(USERS_KEY, &users)
    }

    /// The signed-in user snapshot, if any.
    pub fn get_session(&self) -> Result<Option<UserRecord>, StoreError> {
        let session: Option<UserRecord> = self.read_json(SESSION_KEY)?;
        if let Some(ref user) = session {
            user.validate()
                .map_err(|reason| StoreError::malformed(&self.key(SESSION_KEY), reason))?;
        }
        Ok(session)
    }

    pub fn set_session(&self, user: &UserRecord) -> Result<(), StoreError> {
        self.write_json(SESSION_KEY, user)
    }

    pub fn clear_session(&self) -> Result<(), StoreError> {
        self.store.remove(&self.key(SESSION_KEY))
    }

    /// Every stored review, in storage order.
    pub fn list_reviews(&self) -> Result<Vec<ReviewRecord>, StoreError> {
        let reviews: Vec<ReviewRecord> = self.read_json(REVIEWS_KEY)?.unwrap_or_default();
        for review in &reviews {
            review
                .validate()
                .map_err(|reason| StoreError::malformed(&self.key(REVIEWS_KEY), reason))?;
        }
        Ok(reviews)
    }
}

/// Milliseconds since the Unix epoch, platform-aware.
pub fn current_timestamp_ms() -> u64 {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        js_sys::Date::now() as u64
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ServiceId, ServiceRecord};
    use crate::MemoryStore;

    fn user(name: &str) -> UserRecord {
        UserRecord {
            username: name.to_string(),
            email: format!("{name}@example.com"),
            password: "secret".to_string(),
            is_seller: false,
            seller_description: String::new(),
            services: Vec::new(),
        }
    }

    #[test]
    fn test_empty_store_reads_as_empty() {
        let repo = Repository::new(MemoryStore::new());
        assert!(repo.list_users().unwrap().is_empty());
        assert!(repo.get_session().unwrap().is_none());
        assert!(repo.list_reviews().unwrap().is_empty());
    }

    #[test]
    fn test_insert_and_find_user() {
        let repo = Repository::new(MemoryStore::new());
        repo.insert_user(&user("alice")).unwrap();
        repo.insert_user(&user("bob")).unwrap();

        let users = repo.list_users().unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].username, "alice");
        assert_eq!(users[1].username, "bob");

        assert_eq!(repo.find_user("bob").unwrap().unwrap().email, "bob@example.com");
        assert!(repo.find_user("carol").unwrap().is_none());
    }

    #[test]
    fn test_upsert_replaces_in_place() {
        let repo = Repository::new(MemoryStore::new());
        repo.insert_user(&user("alice")).unwrap();
        repo.insert_user(&user("bob")).unwrap();

        let mut alice = user("alice");
        alice.email = "new@example.com".to_string();
        repo.upsert_user(&alice).unwrap();

        let users = repo.list_users().unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].email, "new@example.com");
        assert_eq!(users[1].username, "bob");

        repo.upsert_user(&user("carol")).unwrap();
        assert_eq!(repo.list_users().unwrap().len(), 3);
    }

    #[test]
    fn test_session_set_and_clear() {
        let repo = Repository::new(MemoryStore::new());
        repo.set_session(&user("alice")).unwrap();
        assert_eq!(repo.get_session().unwrap().unwrap().username, "alice");

        repo.clear_session().unwrap();
        assert!(repo.get_session().unwrap().is_none());
    }

    #[test]
    fn test_malformed_blob_is_rejected() {
        let store = MemoryStore::new();
        store.set("users", "{not json").unwrap();
        let repo = Repository::new(store.clone());
        assert!(matches!(
            repo.list_users(),
            Err(StoreError::Malformed { ref key, .. }) if key == "users"
        ));

        store.set("users", r#"[{"username": "x"}]"#).unwrap();
        assert!(repo.list_users().is_err());

        store.set("currentUser", "42").unwrap();
        assert!(matches!(repo.get_session(), Err(StoreError::Malformed { .. })));
    }

    #[test]
    fn test_invalid_records_are_rejected() {
        let store = MemoryStore::new();
        let repo = Repository::new(store.clone());

        let mut seller = user("sara");
        seller.services.push(ServiceRecord {
            id: ServiceId(1),
            title: "t".to_string(),
            description: "d".to_string(),
            price: -5.0,
            image: String::new(),
        });
        store
            .set("users", &serde_json::to_string(&vec![seller]).unwrap())
            .unwrap();
        assert!(matches!(repo.list_users(), Err(StoreError::Malformed { .. })));

        store
            .set(
                "reviews",
                r#"[{"id": 1, "sellerId": "a", "buyerId": "b", "rating": 9, "comment": "", "date": ""}]"#,
            )
            .unwrap();
        assert!(matches!(repo.list_reviews(), Err(StoreError::Malformed { .. })));
    }

    #[test]
    fn test_prefix_scopes_keys() {
        let store = MemoryStore::new();
        let scoped = Repository::with_prefix(store.clone(), "demo:");
        scoped.insert_user(&user("alice")).unwrap();

        assert!(store.get("demo:users").unwrap().is_some());
        assert!(store.get("users").unwrap().is_none());
        assert!(Repository::new(store).list_users().unwrap().is_empty());
    }

    #[test]
    fn test_current_timestamp_is_recent() {
        // 2020-01-01 in milliseconds
        assert!(current_timestamp_ms() > 1_577_836_800_000);
    }
}
