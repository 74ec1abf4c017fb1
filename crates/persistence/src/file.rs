// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::PersistenceError;
use crate::store::{Store, StoreKey};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File-backed store: one `<key>.json` document per logical key inside a
/// data directory.
///
/// Writes are whole-file replacements, mirroring the set-one-key discipline
/// of the logical store. There is no write-ahead log and no fsync beyond
/// what the platform gives `fs::write`; this is a single-operator local
/// tool and the accepted failure mode is losing the last write.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Opens a file store rooted at `root`, creating the directory if
    /// needed.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::Initialization` if the directory cannot
    /// be created.
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self, PersistenceError> {
        let root: PathBuf = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).map_err(|err| {
            PersistenceError::Initialization(format!(
                "cannot create data directory {}: {err}",
                root.display()
            ))
        })?;
        Ok(Self { root })
    }

    /// The data directory this store reads and writes.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: StoreKey) -> PathBuf {
        self.root.join(format!("{}.json", key.as_str()))
    }
}

impl Store for FileStore {
    fn read(&self, key: StoreKey) -> Result<Option<String>, PersistenceError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(PersistenceError::ReadFailed {
                key: key.as_str(),
                message: err.to_string(),
            }),
        }
    }

    fn write(&mut self, key: StoreKey, value: &str) -> Result<(), PersistenceError> {
        fs::write(self.path_for(key), value).map_err(|err| PersistenceError::WriteFailed {
            key: key.as_str(),
            message: err.to_string(),
        })?;
        debug!(key = key.as_str(), bytes = value.len(), "key persisted");
        Ok(())
    }

    fn remove(&mut self, key: StoreKey) -> Result<(), PersistenceError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => {
                debug!(key = key.as_str(), "key removed");
                Ok(())
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(PersistenceError::WriteFailed {
                key: key.as_str(),
                message: err.to_string(),
            }),
        }
    }
}
