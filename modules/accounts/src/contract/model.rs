use chrono::{DateTime, Utc};
use std::fmt;
use uuid::Uuid;

/// Phone number attached to a user. Carried as-is, no format rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phone {
    pub number: String,
    pub city_code: String,
    pub country_code: String,
}

/// Response view of a stored account. Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phones: Vec<Phone>,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    pub last_login: DateTime<Utc>,
    pub token: String,
    pub is_active: bool,
}

/// Full account payload, used both to create an account and to replace one.
#[derive(Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phones: Vec<Phone>,
}

/// Partial update: `None` leaves the stored field untouched, `Some` replaces it.
/// `Some(vec![])` for phones clears the list.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub phones: Option<Vec<Phone>>,
}

impl UserPatch {
    /// True when no field was supplied.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.password.is_none() && self.phones.is_none()
    }
}

// Passwords stay out of logs and panic messages.
impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("phones", &self.phones)
            .finish()
    }
}

impl fmt::Debug for UserPatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserPatch")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("phones", &self.phones)
            .finish()
    }
}
