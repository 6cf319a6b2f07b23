use diesel::prelude::*;
use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

use super::model::LocalStorageDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::local_storage::dsl::*;
use agrifin_core::errors::Result;

/// Whole-value snapshots stored under string keys.
///
/// Every write replaces the value for its key. Reads go straight to the pool,
/// writes go through the writer actor.
#[derive(Clone)]
pub struct LocalStorageRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl LocalStorageRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        LocalStorageRepository { pool, writer }
    }

    /// Raw value for `key`, or `None` when the key was never written.
    pub fn get_item(&self, key: &str) -> Result<Option<String>> {
        let mut conn = get_connection(&self.pool)?;
        local_storage
            .filter(storage_key.eq(key))
            .select(storage_value)
            .first::<String>(&mut conn)
            .optional()
            .into_core()
    }

    pub async fn set_item(&self, key: &str, value: String) -> Result<()> {
        let row = LocalStorageDB {
            storage_key: key.to_string(),
            storage_value: value,
        };
        self.writer
            .exec(move |conn| {
                diesel::replace_into(local_storage)
                    .values(&row)
                    .execute(conn)
                    .into_core()?;
                Ok(())
            })
            .await
    }

    pub async fn remove_item(&self, key: &str) -> Result<()> {
        let key = key.to_string();
        self.writer
            .exec(move |conn| {
                diesel::delete(local_storage.filter(storage_key.eq(key)))
                    .execute(conn)
                    .into_core()?;
                Ok(())
            })
            .await
    }

    /// Decodes the JSON snapshot stored under `key`.
    pub fn load_snapshot<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.get_item(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Encodes `value` as JSON and replaces the snapshot under `key`.
    pub async fn save_snapshot<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        debug!("Writing {} bytes to '{}'", raw.len(), key);
        self.set_item(key, raw).await
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utils::setup_storage;
    use agrifin_core::Error;

    #[tokio::test]
    async fn test_missing_key_is_absent() {
        let (_dir, storage) = setup_storage();
        assert_eq!(storage.get_item("agrifin_loans").unwrap(), None);
        assert!(storage
            .load_snapshot::<Vec<String>>("agrifin_loans")
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_set_replaces_whole_value() {
        let (_dir, storage) = setup_storage();

        storage.set_item("k", "first".to_string()).await.unwrap();
        storage.set_item("k", "second".to_string()).await.unwrap();

        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("second"));
    }

    #[tokio::test]
    async fn test_remove_item() {
        let (_dir, storage) = setup_storage();

        storage.set_item("k", "v".to_string()).await.unwrap();
        storage.remove_item("k").await.unwrap();
        // Removing a missing key is a no-op.
        storage.remove_item("k").await.unwrap();

        assert_eq!(storage.get_item("k").unwrap(), None);
    }

    #[tokio::test]
    async fn test_snapshot_round_trip() {
        let (_dir, storage) = setup_storage();
        let values = vec!["a".to_string(), "b".to_string()];

        storage.save_snapshot("list", &values).await.unwrap();

        assert_eq!(storage.get_item("list").unwrap().as_deref(), Some(r#"["a","b"]"#));
        assert_eq!(
            storage.load_snapshot::<Vec<String>>("list").unwrap(),
            Some(values)
        );
    }

    #[tokio::test]
    async fn test_corrupt_snapshot_is_a_serialization_error() {
        let (_dir, storage) = setup_storage();

        storage.set_item("list", "{not json".to_string()).await.unwrap();

        assert!(matches!(
            storage.load_snapshot::<Vec<String>>("list"),
            Err(Error::Serialization(_))
        ));
    }
}
