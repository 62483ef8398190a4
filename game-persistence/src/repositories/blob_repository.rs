use crate::entities::{prelude::*, stat_blobs};
use anyhow::Result;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveValue::Set, DatabaseConnection, EntityTrait, QueryOrder, QuerySelect,
};
use tracing::debug;

#[derive(Clone)]
pub struct BlobRepository {
    db: DatabaseConnection,
}

impl BlobRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    pub async fn find(&self, storage_key: &str) -> Result<Option<String>> {
        let blob = StatBlobs::find_by_id(storage_key.to_string())
            .one(&self.db)
            .await?;
        Ok(blob.map(|model| model.payload))
    }

    /// Insert the payload, replacing whatever was stored under the key
    pub async fn upsert(&self, storage_key: &str, payload: &str) -> Result<()> {
        let blob = stat_blobs::ActiveModel {
            storage_key: Set(storage_key.to_string()),
            payload: Set(payload.to_string()),
            updated_at: Set(chrono::Utc::now().into()),
        };

        StatBlobs::insert(blob)
            .on_conflict(
                OnConflict::column(stat_blobs::Column::StorageKey)
                    .update_columns([stat_blobs::Column::Payload, stat_blobs::Column::UpdatedAt])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await?;

        debug!("Saved {} ({} bytes)", storage_key, payload.len());
        Ok(())
    }

    /// Returns whether a blob was removed
    pub async fn delete(&self, storage_key: &str) -> Result<bool> {
        let result = StatBlobs::delete_by_id(storage_key.to_string())
            .exec(&self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }

    pub async fn keys(&self) -> Result<Vec<String>> {
        let keys = StatBlobs::find()
            .select_only()
            .column(stat_blobs::Column::StorageKey)
            .order_by_asc(stat_blobs::Column::StorageKey)
            .into_tuple::<String>()
            .all(&self.db)
            .await?;
        Ok(keys)
    }
}
