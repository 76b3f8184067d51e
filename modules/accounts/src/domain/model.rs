use chrono::{DateTime, Utc};
use std::fmt;
use uuid::Uuid;

use crate::contract::model::{Phone, User};

/// Persisted account. The only shape that carries the password hash.
#[derive(Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub phones: Vec<Phone>,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    pub last_login: DateTime<Utc>,
    pub token: String,
    pub is_active: bool,
}

impl fmt::Debug for UserRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserRecord")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("phones", &self.phones)
            .field("created", &self.created)
            .field("modified", &self.modified)
            .field("last_login", &self.last_login)
            .field("is_active", &self.is_active)
            .finish_non_exhaustive()
    }
}

impl From<UserRecord> for User {
    fn from(r: UserRecord) -> Self {
        Self {
            id: r.id,
            name: r.name,
            email: r.email,
            phones: r.phones,
            created: r.created,
            modified: r.modified,
            last_login: r.last_login,
            token: r.token,
            is_active: r.is_active,
        }
    }
}

/// Field-level update document handed to storage. `None` means "leave as is".
///
/// `id`, `created`, `last_login` and `token` have no slot here: updates can
/// never touch them.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct UserChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub phones: Option<Vec<Phone>>,
    pub is_active: Option<bool>,
    pub modified: Option<DateTime<Utc>>,
}

impl fmt::Debug for UserChanges {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserChanges")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password_hash", &self.password_hash.as_ref().map(|_| "<redacted>"))
            .field("phones", &self.phones)
            .field("is_active", &self.is_active)
            .field("modified", &self.modified)
            .finish()
    }
}

impl UserChanges {
    /// Soft delete: flag inactive and touch `modified`.
    pub fn deactivate(now: DateTime<Utc>) -> Self {
        Self {
            is_active: Some(false),
            modified: Some(now),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply_to(self, record: &mut UserRecord) {
        if let Some(name) = self.name {
            record.name = name;
        }
        if let Some(email) = self.email {
            record.email = email;
        }
        if let Some(password_hash) = self.password_hash {
            record.password_hash = password_hash;
        }
        if let Some(phones) = self.phones {
            record.phones = phones;
        }
        if let Some(is_active) = self.is_active {
            record.is_active = is_active;
        }
        if let Some(modified) = self.modified {
            record.modified = modified;
        }
    }
}
