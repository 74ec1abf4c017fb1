// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::PersistenceError;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// The four logical keys of the durable store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    /// The account list.
    Users,
    /// The single current-session slot.
    Session,
    /// The traffic-infraction collection.
    Infractions,
    /// The productivity collection.
    Productivity,
}

impl StoreKey {
    /// Every logical key, in clear order.
    pub const ALL: [Self; 4] = [
        Self::Users,
        Self::Session,
        Self::Infractions,
        Self::Productivity,
    ];

    /// The stored key name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Users => "users_list",
            Self::Session => "current_user",
            Self::Infractions => "infractions",
            Self::Productivity => "productivity",
        }
    }
}

/// Durable key/value storage for the dashboard collections.
///
/// Implementations persist JSON-encoded text under the four logical keys.
/// An absent key is a normal state, not an error: callers treat it as an
/// empty collection or an absent session.
pub trait Store {
    /// Reads the raw JSON stored under a key, `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read.
    fn read(&self, key: StoreKey) -> Result<Option<String>, PersistenceError>;

    /// Writes raw JSON under a key, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::WriteFailed` if the storage rejects the
    /// write.
    fn write(&mut self, key: StoreKey, value: &str) -> Result<(), PersistenceError>;

    /// Removes a key. Removing an absent key is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage rejects the removal.
    fn remove(&mut self, key: StoreKey) -> Result<(), PersistenceError>;

    /// Removes every logical key, returning the store to the first-run
    /// state. The caller is expected to reinitialize afterwards.
    ///
    /// # Errors
    ///
    /// Returns the first removal error encountered.
    fn clear(&mut self) -> Result<(), PersistenceError> {
        for key in StoreKey::ALL {
            self.remove(key)?;
        }
        Ok(())
    }
}

/// Loads a collection from a store, treating an absent key as empty.
///
/// # Errors
///
/// Returns an error if the store cannot be read or the stored JSON does not
/// decode as a list of `T`.
pub fn load_collection<T, S>(store: &S, key: StoreKey) -> Result<Vec<T>, PersistenceError>
where
    T: DeserializeOwned,
    S: Store + ?Sized,
{
    store.read(key)?.map_or_else(
        || Ok(Vec::new()),
        |raw| {
            serde_json::from_str(&raw).map_err(|err| PersistenceError::Serialization {
                key: key.as_str(),
                message: err.to_string(),
            })
        },
    )
}

/// Persists a collection to a store, replacing the previous value.
///
/// # Errors
///
/// Returns an error if encoding fails or the storage rejects the write.
pub fn save_collection<T, S>(
    store: &mut S,
    key: StoreKey,
    records: &[T],
) -> Result<(), PersistenceError>
where
    T: Serialize,
    S: Store + ?Sized,
{
    let raw: String =
        serde_json::to_string(records).map_err(|err| PersistenceError::Serialization {
            key: key.as_str(),
            message: err.to_string(),
        })?;
    store.write(key, &raw)
}

/// Loads the current-session slot, `None` when no session is persisted.
///
/// # Errors
///
/// Returns an error if the store cannot be read or the slot does not decode.
pub fn load_session<T, S>(store: &S) -> Result<Option<T>, PersistenceError>
where
    T: DeserializeOwned,
    S: Store + ?Sized,
{
    store.read(StoreKey::Session)?.map_or_else(
        || Ok(None),
        |raw| {
            serde_json::from_str(&raw)
                .map(Some)
                .map_err(|err| PersistenceError::Serialization {
                    key: StoreKey::Session.as_str(),
                    message: err.to_string(),
                })
        },
    )
}

/// Persists the current-session slot.
///
/// # Errors
///
/// Returns an error if encoding fails or the storage rejects the write.
pub fn save_session<T, S>(store: &mut S, session: &T) -> Result<(), PersistenceError>
where
    T: Serialize,
    S: Store + ?Sized,
{
    let raw: String =
        serde_json::to_string(session).map_err(|err| PersistenceError::Serialization {
            key: StoreKey::Session.as_str(),
            message: err.to_string(),
        })?;
    store.write(StoreKey::Session, &raw)
}

/// Clears the current-session slot.
///
/// # Errors
///
/// Returns an error if the storage rejects the removal.
pub fn clear_session<S>(store: &mut S) -> Result<(), PersistenceError>
where
    S: Store + ?Sized,
{
    store.remove(StoreKey::Session)
}
