//! Format rules for user-supplied credentials.
//!
//! Every check here is pure and runs before any storage access.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::contract::model::{NewUser, UserPatch};
use crate::domain::error::DomainError;

/// `local-part@domain.tld` with a purely alphabetic top-level segment of 2+ chars.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email pattern is valid")
});

const MIN_PASSWORD_DIGITS: usize = 2;

pub fn validate_email_format(candidate: &str) -> Result<(), DomainError> {
    if EMAIL_RE.is_match(candidate) {
        Ok(())
    } else {
        Err(DomainError::InvalidEmail)
    }
}

/// Letters and digits only, with at least one uppercase letter, one lowercase
/// letter and two digits anywhere in the string.
pub fn validate_password_format(candidate: &str) -> Result<(), DomainError> {
    let only_alphanumeric = candidate.chars().all(|c| c.is_ascii_alphanumeric());
    let has_upper = candidate.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = candidate.chars().any(|c| c.is_ascii_lowercase());
    let digits = candidate.chars().filter(char::is_ascii_digit).count();

    if only_alphanumeric && has_upper && has_lower && digits >= MIN_PASSWORD_DIGITS {
        Ok(())
    } else {
        Err(DomainError::InvalidPassword)
    }
}

pub fn validate_new_user(new_user: &NewUser) -> Result<(), DomainError> {
    validate_email_format(&new_user.email)?;
    validate_password_format(&new_user.password)?;
    Ok(())
}

/// Checks only the fields the patch supplies.
pub fn validate_user_patch(patch: &UserPatch) -> Result<(), DomainError> {
    if let Some(ref email) = patch.email {
        validate_email_format(email)?;
    }
    if let Some(ref password) = patch.password {
        validate_password_format(password)?;
    }
    Ok(())
}
