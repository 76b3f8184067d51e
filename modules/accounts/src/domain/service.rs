use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, error, info, instrument};
use uuid::Uuid;

use crate::contract::model::{NewUser, User, UserPatch};
use crate::domain::credentials::{CredentialHasher, DEFAULT_COST};
use crate::domain::error::DomainError;
use crate::domain::model::{UserChanges, UserRecord};
use crate::domain::reconcile;
use crate::domain::repo::{AccountsRepository, StorageError};
use crate::domain::token::{identity_claims, TokenIssuer};
use crate::domain::validation;

/// Domain service implementing the account lifecycle.
/// Depends only on the repository port, not on infra types.
#[derive(Clone)]
pub struct Service {
    repo: Arc<dyn AccountsRepository>,
    hasher: CredentialHasher,
    tokens: TokenIssuer,
}

/// Configuration for the domain service
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub token_secret: String,
    pub bcrypt_cost: u32,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            token_secret: crate::config::DEV_TOKEN_SECRET.to_string(),
            bcrypt_cost: DEFAULT_COST,
        }
    }
}

impl Service {
    /// Create a service with dependencies.
    pub fn new(
        repo: Arc<dyn AccountsRepository>,
        config: ServiceConfig,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            repo,
            hasher: CredentialHasher::new(config.bcrypt_cost)?,
            tokens: TokenIssuer::new(&config.token_secret),
        })
    }

    #[instrument(
        name = "accounts.service.create_user",
        skip(self, new_user),
        fields(email = %new_user.email)
    )]
    pub async fn create_user(&self, new_user: NewUser) -> Result<User, DomainError> {
        info!("Creating new user");

        validation::validate_new_user(&new_user)?;

        if self
            .repo
            .find_by_email(&new_user.email, None)
            .await
            .map_err(storage_failure)?
            .is_some()
        {
            return Err(DomainError::email_already_exists(new_user.email));
        }

        let NewUser {
            name,
            email,
            password,
            phones,
        } = new_user;

        let id = Uuid::new_v4();
        let hasher = self.hasher;
        let password_hash = run_blocking(move || hasher.hash(&password)).await?;
        let token = self.tokens.issue(&identity_claims(id, &email))?;

        let now = Utc::now();
        let record = UserRecord {
            id,
            name,
            email,
            password_hash,
            phones,
            created: now,
            modified: now,
            last_login: now,
            token,
            is_active: true,
        };

        self.repo
            .insert(record.clone())
            .await
            .map_err(|e| match e {
                StorageError::DuplicateKey(_) => {
                    DomainError::email_already_exists(record.email.clone())
                }
                other => storage_failure(other),
            })?;

        info!(user_id = %record.id, "Successfully created user");
        Ok(record.into())
    }

    #[instrument(name = "accounts.service.get_user", skip(self), fields(user_id = %id))]
    pub async fn get_user(&self, id: Uuid) -> Result<User, DomainError> {
        debug!("Getting user by id");
        let record = self.load(id).await?;
        debug!("Successfully retrieved user");
        Ok(record.into())
    }

    #[instrument(name = "accounts.service.list_users", skip(self))]
    pub async fn list_users(&self) -> Result<Vec<User>, DomainError> {
        debug!("Listing all users");
        let records = self.repo.list_all().await.map_err(storage_failure)?;
        debug!("Successfully listed {} users", records.len());
        Ok(records.into_iter().map(Into::into).collect())
    }

    #[instrument(
        name = "accounts.service.replace_user",
        skip(self, request),
        fields(user_id = %id)
    )]
    pub async fn replace_user(&self, id: Uuid, request: NewUser) -> Result<User, DomainError> {
        info!("Replacing user");

        validation::validate_new_user(&request)?;
        let current = self.load(id).await?;
        let email_taken = self.email_taken(&request.email, id).await?;

        let hasher = self.hasher;
        let now = Utc::now();
        let changes = run_blocking(move || {
            reconcile::apply_full_update(&current, &request, email_taken, &hasher, now)
        })
        .await?;

        self.persist(id, changes).await?;
        let updated = self.load(id).await?;

        info!("Successfully replaced user");
        Ok(updated.into())
    }

    #[instrument(
        name = "accounts.service.patch_user",
        skip(self, patch),
        fields(user_id = %id)
    )]
    pub async fn patch_user(&self, id: Uuid, patch: UserPatch) -> Result<User, DomainError> {
        info!("Partially updating user");

        validation::validate_user_patch(&patch)?;
        let current = self.load(id).await?;

        if patch.is_empty() {
            debug!("No fields supplied, skipping write");
            return Ok(current.into());
        }

        let email_taken = match patch.email.as_deref() {
            Some(email) if email != current.email => self.email_taken(email, id).await?,
            _ => false,
        };

        let hasher = self.hasher;
        let now = Utc::now();
        let changes = run_blocking(move || {
            reconcile::apply_partial_update(&current, &patch, email_taken, &hasher, now)
        })
        .await?;

        self.persist(id, changes).await?;
        let updated = self.load(id).await?;

        info!("Successfully updated user");
        Ok(updated.into())
    }

    #[instrument(name = "accounts.service.delete_user", skip(self), fields(user_id = %id))]
    pub async fn delete_user(&self, id: Uuid) -> Result<(), DomainError> {
        info!("Soft-deleting user");

        self.load(id).await?;
        self.persist(id, UserChanges::deactivate(Utc::now())).await?;

        info!("Successfully deactivated user");
        Ok(())
    }

    // --- storage helpers ---

    async fn load(&self, id: Uuid) -> Result<UserRecord, DomainError> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(storage_failure)?
            .ok_or_else(|| DomainError::user_not_found(id))
    }

    /// True when a record other than `id` holds `email`.
    async fn email_taken(&self, email: &str, id: Uuid) -> Result<bool, DomainError> {
        Ok(self
            .repo
            .find_by_email(email, Some(id))
            .await
            .map_err(storage_failure)?
            .is_some())
    }

    async fn persist(&self, id: Uuid, changes: UserChanges) -> Result<(), DomainError> {
        let email = changes.email.clone();
        self.repo
            .update_fields(id, changes)
            .await
            .map_err(|e| match e {
                StorageError::NotFound(id) => DomainError::user_not_found(id),
                StorageError::DuplicateKey(key) => {
                    DomainError::email_already_exists(email.unwrap_or(key))
                }
                other => storage_failure(other),
            })
    }
}

fn storage_failure(e: StorageError) -> DomainError {
    error!(error = %e, "Storage operation failed");
    DomainError::storage(e.to_string())
}

/// Runs CPU-heavy work (password hashing) off the async workers.
async fn run_blocking<T, F>(f: F) -> Result<T, DomainError>
where
    F: FnOnce() -> Result<T, DomainError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| DomainError::internal(e.to_string()))?
}
