use http::StatusCode;
use thiserror::Error;
use uuid::Uuid;

/// Errors that are safe to expose to other modules
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccountsError {
    #[error("{message}")]
    InvalidFormat { message: String },

    #[error("Email '{email}' is already registered")]
    DuplicateEmail { email: String },

    #[error("User not found: {id}")]
    NotFound { id: Uuid },

    #[error("Internal error")]
    Internal,
}

/// Coarse classification a transport layer maps to a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidFormat,
    DuplicateEmail,
    NotFound,
    StorageFailure,
}

impl ErrorKind {
    pub fn status(self) -> StatusCode {
        match self {
            Self::InvalidFormat | Self::DuplicateEmail => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::StorageFailure => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn is_client_error(self) -> bool {
        self.status().is_client_error()
    }
}

impl AccountsError {
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            message: message.into(),
        }
    }

    pub fn duplicate_email(email: impl Into<String>) -> Self {
        Self::DuplicateEmail {
            email: email.into(),
        }
    }

    pub fn not_found(id: Uuid) -> Self {
        Self::NotFound { id }
    }

    pub fn internal() -> Self {
        Self::Internal
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidFormat { .. } => ErrorKind::InvalidFormat,
            Self::DuplicateEmail { .. } => ErrorKind::DuplicateEmail,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Internal => ErrorKind::StorageFailure,
        }
    }
}

impl From<crate::domain::error::DomainError> for AccountsError {
    fn from(domain_error: crate::domain::error::DomainError) -> Self {
        use crate::domain::error::DomainError::*;
        match domain_error {
            UserNotFound { id } => Self::not_found(id),
            EmailAlreadyExists { email } => Self::duplicate_email(email),
            e @ (InvalidEmail | InvalidPassword) => Self::invalid_format(e.to_string()),
            // Already logged where the storage call failed.
            Storage { .. } => Self::internal(),
            e @ (Credential { .. } | Token { .. } | Internal { .. }) => {
                tracing::error!(error = %e, "Internal failure");
                Self::internal()
            }
        }
    }
}
