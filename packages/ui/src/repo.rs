//! Shared repository constructor for all platforms.
//!
//! Returns a [`store::Repository`] backed by the appropriate [`store::KeyValueStore`]:
//! - **Web** (WASM + `web` feature): browser `localStorage` via [`store::LocalStorage`]
//! - **Desktop** (native): JSON files via [`store::FileStore`] under [`data_dir`]
//!
//! Every backend is cheap to construct, so views build a repository per
//! interaction instead of holding one.

use std::path::PathBuf;

use store::MarketConfig;

/// Create a platform-appropriate repository, keys prefixed per `config`.
pub fn make_repo(config: &MarketConfig) -> store::Repository<impl store::KeyValueStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::Repository::with_prefix(store::LocalStorage::new(), &config.storage.key_prefix)
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        store::Repository::with_prefix(store::MemoryStore::new(), &config.storage.key_prefix)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        store::Repository::with_prefix(
            store::FileStore::new(data_dir()),
            &config.storage.key_prefix,
        )
    }
}

/// Platform data directory for the app: `<data_dir>/khidma/`.
pub fn data_dir() -> PathBuf {
    #[cfg(not(target_arch = "wasm32"))]
    {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("khidma")
    }
    #[cfg(target_arch = "wasm32")]
    {
        PathBuf::from("khidma")
    }
}
