//! In-process storage adapter for the domain port.
//!
//! Email uniqueness is enforced under the write lock, so two racing creates
//! with the same email cannot both land. Locks are never held across an await.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use uuid::Uuid;

use crate::domain::model::{UserChanges, UserRecord};
use crate::domain::repo::{AccountsRepository, StorageError};

#[derive(Default)]
struct Store {
    by_id: HashMap<Uuid, UserRecord>,
    order: Vec<Uuid>,
}

impl Store {
    fn email_holder(&self, email: &str, exclude_id: Option<Uuid>) -> Option<&UserRecord> {
        self.order
            .iter()
            .filter(|id| Some(**id) != exclude_id)
            .filter_map(|id| self.by_id.get(id))
            .find(|r| r.email == email)
    }
}

/// HashMap-backed repository keyed by user id.
#[derive(Default)]
pub struct InMemoryAccountsRepository {
    store: RwLock<Store>,
}

impl InMemoryAccountsRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountsRepository for InMemoryAccountsRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserRecord>, StorageError> {
        Ok(self.store.read().by_id.get(&id).cloned())
    }

    async fn find_by_email(
        &self,
        email: &str,
        exclude_id: Option<Uuid>,
    ) -> Result<Option<UserRecord>, StorageError> {
        Ok(self.store.read().email_holder(email, exclude_id).cloned())
    }

    async fn insert(&self, record: UserRecord) -> Result<(), StorageError> {
        let mut store = self.store.write();
        if store.by_id.contains_key(&record.id) {
            return Err(StorageError::DuplicateKey(format!("id {}", record.id)));
        }
        if store.email_holder(&record.email, None).is_some() {
            return Err(StorageError::DuplicateKey(record.email));
        }
        store.order.push(record.id);
        store.by_id.insert(record.id, record);
        Ok(())
    }

    async fn update_fields(&self, id: Uuid, changes: UserChanges) -> Result<(), StorageError> {
        let mut store = self.store.write();
        if !store.by_id.contains_key(&id) {
            return Err(StorageError::NotFound(id));
        }
        if let Some(ref email) = changes.email {
            if store.email_holder(email, Some(id)).is_some() {
                return Err(StorageError::DuplicateKey(email.clone()));
            }
        }
        if let Some(record) = store.by_id.get_mut(&id) {
            changes.apply_to(record);
        }
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<UserRecord>, StorageError> {
        let store = self.store.read();
        Ok(store
            .order
            .iter()
            .filter_map(|id| store.by_id.get(id).cloned())
            .collect())
    }
}
