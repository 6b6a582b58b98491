//! Key-value JSON persistence for the cart and account record.
//!
//! The durable state of the storefront is two independent keys, each a plain
//! JSON file under the configured data directory:
//!
//! - `cart` - the serialized array of cart lines
//! - `account` - the optional account-registration record
//!
//! An absent file means "empty" / "not registered", never an error. A
//! malformed file is logged and treated as empty; persistence write failures
//! are surfaced to the caller, which logs them and carries on with the
//! in-memory state for the rest of the session.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use storeclick_core::{Cart, Registration};

/// Storage key for the serialized cart.
pub const CART_KEY: &str = "cart";

/// Storage key for the account-registration record.
pub const ACCOUNT_KEY: &str = "account";

/// Errors that can occur when reading or writing persisted state.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem operation failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Persisted JSON under a key could not be parsed.
    #[error("malformed JSON under key \"{key}\": {source}")]
    Corrupt {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Value could not be serialized for writing.
    #[error("could not serialize value for key \"{key}\": {source}")]
    Serialize {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// JSON-file-backed key-value store.
#[derive(Debug, Clone)]
pub struct JsonStore {
    root: PathBuf,
}

impl JsonStore {
    /// Open a store rooted at `root`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the directory cannot be created.
    pub fn open(root: impl AsRef<Path>) -> Result<Self, StorageError> {
        let root = root.as_ref().to_path_buf();
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Read the persisted cart.
    ///
    /// Never fails: an absent key yields an empty cart, and a corrupt key is
    /// logged and replaced by an empty cart on the next write.
    #[must_use]
    pub fn read_cart(&self) -> Cart {
        match self.read_key(CART_KEY) {
            Ok(Some(cart)) => cart,
            Ok(None) => Cart::new(),
            Err(e) => {
                tracing::warn!(error = %e, "could not read persisted cart, starting empty");
                Cart::new()
            }
        }
    }

    /// Write the cart back to storage.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if serialization or the filesystem write
    /// fails.
    pub fn write_cart(&self, cart: &Cart) -> Result<(), StorageError> {
        self.write_key(CART_KEY, cart)
    }

    /// Read the account-registration record, if one was ever persisted.
    #[must_use]
    pub fn read_account(&self) -> Option<Registration> {
        match self.read_key(ACCOUNT_KEY) {
            Ok(registration) => registration,
            Err(e) => {
                tracing::warn!(error = %e, "could not read persisted account record");
                None
            }
        }
    }

    /// Persist the account-registration record.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if serialization or the filesystem write
    /// fails.
    pub fn write_account(&self, registration: &Registration) -> Result<(), StorageError> {
        self.write_key(ACCOUNT_KEY, registration)
    }

    /// Path of the JSON file backing a key.
    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    fn read_key<T: DeserializeOwned>(&self, key: &'static str) -> Result<Option<T>, StorageError> {
        let path = self.path_for(key);
        let raw = match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let value =
            serde_json::from_str(&raw).map_err(|source| StorageError::Corrupt { key, source })?;
        Ok(Some(value))
    }

    fn write_key<T: Serialize>(&self, key: &'static str, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string_pretty(value)
            .map_err(|source| StorageError::Serialize { key, source })?;
        std::fs::write(self.path_for(key), raw)?;
        Ok(())
    }
}
