use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::model::{UserChanges, UserRecord};

#[derive(Debug, Error)]
pub enum StorageError {
    /// A unique key (id or email) is already held by another record.
    #[error("duplicate key: {0}")]
    DuplicateKey(String),

    #[error("record not found: {0}")]
    NotFound(Uuid),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Port for the domain layer: persistence operations the domain needs.
/// Object-safe and async-friendly via `async_trait`.
///
/// Implementations must not hold in-process locks across an await.
/// Concurrent writes to the same id resolve last-write-wins.
#[async_trait]
pub trait AccountsRepository: Send + Sync {
    /// Load a record by id, active or not.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserRecord>, StorageError>;

    /// Look up the record holding `email`, optionally ignoring `exclude_id`.
    /// Inactive records still hold their email.
    async fn find_by_email(
        &self,
        email: &str,
        exclude_id: Option<Uuid>,
    ) -> Result<Option<UserRecord>, StorageError>;

    /// Insert a fully-formed record.
    ///
    /// Service computes id/timestamps/hash/token; repo persists.
    async fn insert(&self, record: UserRecord) -> Result<(), StorageError>;

    /// Apply a change set to the record with `id`.
    async fn update_fields(&self, id: Uuid, changes: UserChanges) -> Result<(), StorageError>;

    /// Every stored record, in insertion order.
    async fn list_all(&self) -> Result<Vec<UserRecord>, StorageError>;
}
