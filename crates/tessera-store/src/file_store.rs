//! File-backed record storage.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use strum::IntoEnumIterator;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

use crate::{Collection, Result, StoreError};

/// Tracing target for store operations.
const TRACING_TARGET: &str = "tessera_store::file_store";

/// Durable keyed storage of JSON records, one file per `(collection, key)`.
///
/// All operations are asynchronous and non-blocking. The store provides
/// no per-key serialization: a read and a concurrent write to the same
/// key are not ordered by this layer.
#[derive(Debug, Clone)]
pub struct FileStore {
    base_dir: Arc<PathBuf>,
}

impl FileStore {
    /// Opens a store rooted at the given directory.
    ///
    /// Creates the base directory and one subdirectory per collection if
    /// they do not already exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the directories cannot be created.
    pub async fn open(base_dir: impl Into<PathBuf>) -> Result<Self> {
        let base_dir = base_dir.into();
        for collection in Collection::iter() {
            fs::create_dir_all(base_dir.join(collection.dir_name())).await?;
        }

        tracing::debug!(
            target: TRACING_TARGET,
            base_dir = %base_dir.display(),
            "record store opened"
        );

        Ok(Self {
            base_dir: Arc::new(base_dir),
        })
    }

    /// Returns the directory this store is rooted at.
    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Writes a new record, failing if one already exists under the key.
    pub async fn create<T: Serialize>(
        &self,
        collection: Collection,
        key: &str,
        record: &T,
    ) -> Result<()> {
        let path = self.record_path(collection, key)?;
        let contents = serde_json::to_vec(record)?;

        let open_result = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await;

        let mut file = match open_result {
            Ok(file) => file,
            Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists => {
                return Err(StoreError::AlreadyExists {
                    collection,
                    key: key.to_owned(),
                });
            }
            Err(err) => return Err(err.into()),
        };

        file.write_all(&contents).await?;
        file.flush().await?;

        tracing::trace!(
            target: TRACING_TARGET,
            %collection,
            key,
            "record created"
        );
        Ok(())
    }

    /// Reads the record stored under the key.
    pub async fn read<T: DeserializeOwned>(&self, collection: Collection, key: &str) -> Result<T> {
        let path = self.record_path(collection, key)?;

        let contents = match fs::read(&path).await {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound {
                    collection,
                    key: key.to_owned(),
                });
            }
            Err(err) => return Err(err.into()),
        };

        Ok(serde_json::from_slice(&contents)?)
    }

    /// Replaces an existing record, failing if none exists under the key.
    pub async fn update<T: Serialize>(
        &self,
        collection: Collection,
        key: &str,
        record: &T,
    ) -> Result<()> {
        let path = self.record_path(collection, key)?;

        if let Err(err) = fs::metadata(&path).await {
            if err.kind() == std::io::ErrorKind::NotFound {
                return Err(StoreError::NotFound {
                    collection,
                    key: key.to_owned(),
                });
            }
            return Err(err.into());
        }

        let contents = serde_json::to_vec(record)?;
        fs::write(&path, contents).await?;

        tracing::trace!(
            target: TRACING_TARGET,
            %collection,
            key,
            "record updated"
        );
        Ok(())
    }

    /// Deletes the record stored under the key, failing if absent.
    pub async fn delete(&self, collection: Collection, key: &str) -> Result<()> {
        let path = self.record_path(collection, key)?;

        match fs::remove_file(&path).await {
            Ok(()) => {
                tracing::trace!(
                    target: TRACING_TARGET,
                    %collection,
                    key,
                    "record deleted"
                );
                Ok(())
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Err(StoreError::NotFound {
                collection,
                key: key.to_owned(),
            }),
            Err(err) => Err(err.into()),
        }
    }

    /// Resolves the file path for a record, rejecting keys that could
    /// escape the collection directory.
    fn record_path(&self, collection: Collection, key: &str) -> Result<PathBuf> {
        if key.is_empty()
            || key == "."
            || key == ".."
            || key.contains(['/', '\\', '\0'])
        {
            return Err(StoreError::InvalidKey {
                key: key.to_owned(),
            });
        }

        Ok(self
            .base_dir
            .join(collection.dir_name())
            .join(format!("{key}.json")))
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Record {
        name: String,
        value: u32,
    }

    async fn open_store() -> (FileStore, TempDir) {
        let dir = TempDir::new().expect("temp dir");
        let store = FileStore::open(dir.path()).await.expect("open store");
        (store, dir)
    }

    fn record() -> Record {
        Record {
            name: "alice".to_owned(),
            value: 7,
        }
    }

    #[tokio::test]
    async fn create_then_read_roundtrips() {
        let (store, _dir) = open_store().await;

        store
            .create(Collection::Users, "alice", &record())
            .await
            .expect("create");

        let stored: Record = store.read(Collection::Users, "alice").await.expect("read");
        assert_eq!(stored, record());
    }

    #[tokio::test]
    async fn create_fails_if_record_exists() {
        let (store, _dir) = open_store().await;

        store
            .create(Collection::Users, "alice", &record())
            .await
            .expect("create");

        let err = store
            .create(Collection::Users, "alice", &record())
            .await
            .expect_err("duplicate create");
        assert!(err.is_already_exists());
    }

    #[tokio::test]
    async fn read_missing_record_is_not_found() {
        let (store, _dir) = open_store().await;

        let err = store
            .read::<Record>(Collection::Users, "nobody")
            .await
            .expect_err("missing read");
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn update_missing_record_is_not_found() {
        let (store, _dir) = open_store().await;

        let err = store
            .update(Collection::Tokens, "nobody", &record())
            .await
            .expect_err("missing update");
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn update_replaces_contents() {
        let (store, _dir) = open_store().await;

        store
            .create(Collection::Users, "alice", &record())
            .await
            .expect("create");

        let updated = Record {
            name: "alice".to_owned(),
            value: 8,
        };
        store
            .update(Collection::Users, "alice", &updated)
            .await
            .expect("update");

        let stored: Record = store.read(Collection::Users, "alice").await.expect("read");
        assert_eq!(stored, updated);
    }

    #[tokio::test]
    async fn delete_removes_record() {
        let (store, _dir) = open_store().await;

        store
            .create(Collection::Users, "alice", &record())
            .await
            .expect("create");
        store
            .delete(Collection::Users, "alice")
            .await
            .expect("delete");

        let err = store
            .read::<Record>(Collection::Users, "alice")
            .await
            .expect_err("read after delete");
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn delete_missing_record_is_not_found() {
        let (store, _dir) = open_store().await;

        let err = store
            .delete(Collection::Tokens, "nobody")
            .await
            .expect_err("missing delete");
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn collections_are_isolated() {
        let (store, _dir) = open_store().await;

        store
            .create(Collection::Users, "alice", &record())
            .await
            .expect("create");

        let err = store
            .read::<Record>(Collection::Tokens, "alice")
            .await
            .expect_err("cross-collection read");
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn path_escaping_keys_are_rejected() {
        let (store, _dir) = open_store().await;

        for key in ["", ".", "..", "a/b", "a\\b", "a\0b"] {
            let err = store
                .read::<Record>(Collection::Users, key)
                .await
                .expect_err("invalid key");
            assert!(matches!(err, StoreError::InvalidKey { .. }), "key {key:?}");
        }
    }
}
