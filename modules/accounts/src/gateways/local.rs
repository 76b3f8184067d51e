use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::contract::{
    client::AccountsApi,
    error::AccountsError,
    model::{NewUser, User, UserPatch},
};
use crate::domain::service::Service;

/// Local implementation of the AccountsApi trait that delegates to the domain service
pub struct AccountsLocalClient {
    service: Arc<Service>,
}

impl AccountsLocalClient {
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl AccountsApi for AccountsLocalClient {
    async fn create_user(&self, new_user: NewUser) -> Result<User, AccountsError> {
        self.service.create_user(new_user).await.map_err(Into::into)
    }

    async fn get_user(&self, id: Uuid) -> Result<User, AccountsError> {
        self.service.get_user(id).await.map_err(Into::into)
    }

    async fn list_users(&self) -> Result<Vec<User>, AccountsError> {
        self.service.list_users().await.map_err(Into::into)
    }

    async fn replace_user(&self, id: Uuid, request: NewUser) -> Result<User, AccountsError> {
        self.service
            .replace_user(id, request)
            .await
            .map_err(Into::into)
    }

    async fn patch_user(&self, id: Uuid, patch: UserPatch) -> Result<User, AccountsError> {
        self.service.patch_user(id, patch).await.map_err(Into::into)
    }

    async fn delete_user(&self, id: Uuid) -> Result<(), AccountsError> {
        self.service.delete_user(id).await.map_err(Into::into)
    }
}
