//! Turns full and partial update requests into storage change sets.
//!
//! Both functions are pure over their inputs: the caller supplies the stored
//! record, whether the requested email is held by another record, and the
//! timestamp to stamp. Neither touches storage.

use chrono::{DateTime, Utc};

use crate::contract::model::{NewUser, UserPatch};
use crate::domain::credentials::CredentialHasher;
use crate::domain::error::DomainError;
use crate::domain::model::{UserChanges, UserRecord};

/// Replace name, email, password and phones. Always advances `modified`.
pub fn apply_full_update(
    existing: &UserRecord,
    request: &NewUser,
    email_taken: bool,
    hasher: &CredentialHasher,
    now: DateTime<Utc>,
) -> Result<UserChanges, DomainError> {
    if request.email != existing.email && email_taken {
        return Err(DomainError::email_already_exists(request.email.clone()));
    }

    Ok(UserChanges {
        name: Some(request.name.clone()),
        email: Some(request.email.clone()),
        password_hash: Some(hasher.hash(&request.password)?),
        phones: Some(request.phones.clone()),
        modified: Some(now),
        ..UserChanges::default()
    })
}

/// Replace only the supplied fields. Supplying nothing yields an empty change
/// set and leaves `modified` alone; supplying anything advances it, even when
/// the values match what is stored.
pub fn apply_partial_update(
    existing: &UserRecord,
    patch: &UserPatch,
    email_taken: bool,
    hasher: &CredentialHasher,
    now: DateTime<Utc>,
) -> Result<UserChanges, DomainError> {
    let mut changes = UserChanges {
        name: patch.name.clone(),
        phones: patch.phones.clone(),
        ..UserChanges::default()
    };

    if let Some(ref email) = patch.email {
        if *email != existing.email && email_taken {
            return Err(DomainError::email_already_exists(email.clone()));
        }
        changes.email = Some(email.clone());
    }

    if let Some(ref password) = patch.password {
        changes.password_hash = Some(hasher.hash(password)?);
    }

    if !changes.is_empty() {
        changes.modified = Some(now);
    }
    Ok(changes)
}
