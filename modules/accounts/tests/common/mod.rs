#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use accounts::contract::model::{NewUser, Phone};
use accounts::domain::model::{UserChanges, UserRecord};
use accounts::domain::repo::{AccountsRepository, StorageError};
use accounts::domain::service::{Service, ServiceConfig};
use accounts::infra::storage::InMemoryAccountsRepository;

pub const TEST_SECRET: &str = "test-secret";

pub fn test_config() -> ServiceConfig {
    ServiceConfig {
        token_secret: TEST_SECRET.to_string(),
        bcrypt_cost: 4,
    }
}

/// In-memory repository that counts writes.
#[derive(Default)]
pub struct CountingRepository {
    inner: InMemoryAccountsRepository,
    writes: AtomicUsize,
}

impl CountingRepository {
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AccountsRepository for CountingRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserRecord>, StorageError> {
        self.inner.find_by_id(id).await
    }

    async fn find_by_email(
        &self,
        email: &str,
        exclude_id: Option<Uuid>,
    ) -> Result<Option<UserRecord>, StorageError> {
        self.inner.find_by_email(email, exclude_id).await
    }

    async fn insert(&self, record: UserRecord) -> Result<(), StorageError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.insert(record).await
    }

    async fn update_fields(&self, id: Uuid, changes: UserChanges) -> Result<(), StorageError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.update_fields(id, changes).await
    }

    async fn list_all(&self) -> Result<Vec<UserRecord>, StorageError> {
        self.inner.list_all().await
    }
}

/// Repository whose every call fails, to exercise the internal error path.
pub struct BrokenRepository;

#[async_trait]
impl AccountsRepository for BrokenRepository {
    async fn find_by_id(&self, _id: Uuid) -> Result<Option<UserRecord>, StorageError> {
        Err(anyhow::anyhow!("connection reset by peer at 10.0.0.7:27017").into())
    }

    async fn find_by_email(
        &self,
        _email: &str,
        _exclude_id: Option<Uuid>,
    ) -> Result<Option<UserRecord>, StorageError> {
        Err(anyhow::anyhow!("connection reset by peer at 10.0.0.7:27017").into())
    }

    async fn insert(&self, _record: UserRecord) -> Result<(), StorageError> {
        Err(anyhow::anyhow!("write rejected").into())
    }

    async fn update_fields(&self, _id: Uuid, _changes: UserChanges) -> Result<(), StorageError> {
        Err(anyhow::anyhow!("write rejected").into())
    }

    async fn list_all(&self) -> Result<Vec<UserRecord>, StorageError> {
        Err(anyhow::anyhow!("cursor timed out").into())
    }
}

pub fn counting_service() -> (Arc<CountingRepository>, Service) {
    let repo = Arc::new(CountingRepository::default());
    let service = Service::new(repo.clone(), test_config()).expect("valid test config");
    (repo, service)
}

pub fn new_user(name: &str, email: &str) -> NewUser {
    NewUser {
        name: name.to_string(),
        email: email.to_string(),
        password: "AnaPass12".to_string(),
        phones: vec![Phone {
            number: "1234567".to_string(),
            city_code: "1".to_string(),
            country_code: "57".to_string(),
        }],
    }
}
