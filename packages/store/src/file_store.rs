//! # Filesystem-backed key-value store
//!
//! [`FileStore`] is the [`KeyValueStore`] used on desktop. Each key is one file
//! holding the raw JSON blob, so the on-disk layout mirrors what the web build
//! keeps in `localStorage`.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── users.json
//! ├── currentUser.json
//! └── reviews.json
//! ```
//!
//! Characters outside `[A-Za-z0-9_-]` in a key become `_` in the filename.
//!
//! ## Platform data directories
//!
//! Desktop passes `dirs::data_dir()/khidma` as the base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/khidma/` |
//! | Linux | `~/.local/share/khidma/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\khidma\` |

use std::io::ErrorKind;
use std::path::PathBuf;

use crate::error::StoreError;
use crate::repo::KeyValueStore;

/// Filesystem-backed KeyValueStore for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.base.join(format!("{name}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.base)?;
        std::fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserRecord;
    use crate::repo::Repository;

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("khidma");

        let repo = Repository::new(FileStore::new(base.clone()));
        let user = UserRecord {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "pw".to_string(),
            is_seller: false,
            seller_description: String::new(),
            services: Vec::new(),
        };
        repo.insert_user(&user).unwrap();
        repo.set_session(&user).unwrap();

        // Re-open from the same directory
        let reopened = Repository::new(FileStore::new(base.clone()));
        assert_eq!(reopened.list_users().unwrap(), vec![user.clone()]);
        assert_eq!(reopened.get_session().unwrap(), Some(user));
        assert!(base.join("currentUser.json").exists());

        reopened.clear_session().unwrap();
        assert!(reopened.get_session().unwrap().is_none());
        // Clearing twice is fine
        reopened.clear_session().unwrap();
    }

    #[test]
    fn test_prefixed_keys_map_to_safe_filenames() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        store.set("demo:users", "[]").unwrap();
        assert!(dir.path().join("demo_users.json").exists());
        assert_eq!(store.get("demo:users").unwrap().as_deref(), Some("[]"));
    }
}
