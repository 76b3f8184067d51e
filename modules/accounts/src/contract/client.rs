use async_trait::async_trait;
use uuid::Uuid;

use crate::contract::{
    error::AccountsError,
    model::{NewUser, User, UserPatch},
};

/// Public API trait for the accounts module that other modules can use
#[async_trait]
pub trait AccountsApi: Send + Sync {
    /// Create a new account and issue its token
    async fn create_user(&self, new_user: NewUser) -> Result<User, AccountsError>;

    /// Get an account by ID, active or not
    async fn get_user(&self, id: Uuid) -> Result<User, AccountsError>;

    /// List every stored account, active and inactive
    async fn list_users(&self) -> Result<Vec<User>, AccountsError>;

    /// Replace name, email, password and phones of an account
    async fn replace_user(&self, id: Uuid, request: NewUser) -> Result<User, AccountsError>;

    /// Update only the supplied fields of an account
    async fn patch_user(&self, id: Uuid, patch: UserPatch) -> Result<User, AccountsError>;

    /// Mark an account inactive; the record is kept
    async fn delete_user(&self, id: Uuid) -> Result<(), AccountsError>;
}
