//! Wire shapes for a request-handling collaborator, with serde.
//! Field names follow the service's published JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::contract::error::AccountsError;
use crate::contract::model::{NewUser, Phone, User, UserPatch};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneDto {
    pub number: String,
    #[serde(rename = "citycode")]
    pub city_code: String,
    #[serde(rename = "contrycode", alias = "countrycode")]
    pub country_code: String,
}

/// REST DTO for user representation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDto {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phones: Vec<PhoneDto>,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    pub last_login: DateTime<Utc>,
    pub token: String,
    #[serde(rename = "isactive")]
    pub is_active: bool,
}

/// Body for creating or replacing a user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserReq {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phones: Vec<PhoneDto>,
}

/// Body for a partial update. Missing or null fields are left unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateUserReq {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub phones: Option<Vec<PhoneDto>>,
}

/// Confirmation or error body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageDto {
    #[serde(rename = "mensaje")]
    pub message: String,
}

impl MessageDto {
    pub fn user_deleted() -> Self {
        Self {
            message: "User deleted".to_string(),
        }
    }
}

// Conversion implementations between REST DTOs and contract models

impl From<Phone> for PhoneDto {
    fn from(p: Phone) -> Self {
        Self {
            number: p.number,
            city_code: p.city_code,
            country_code: p.country_code,
        }
    }
}

impl From<PhoneDto> for Phone {
    fn from(p: PhoneDto) -> Self {
        Self {
            number: p.number,
            city_code: p.city_code,
            country_code: p.country_code,
        }
    }
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            phones: user.phones.into_iter().map(Into::into).collect(),
            created: user.created,
            modified: user.modified,
            last_login: user.last_login,
            token: user.token,
            is_active: user.is_active,
        }
    }
}

impl From<UserReq> for NewUser {
    fn from(req: UserReq) -> Self {
        Self {
            name: req.name,
            email: req.email,
            password: req.password,
            phones: req.phones.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<UpdateUserReq> for UserPatch {
    fn from(req: UpdateUserReq) -> Self {
        Self {
            name: req.name,
            email: req.email,
            password: req.password,
            phones: req.phones.map(|p| p.into_iter().map(Into::into).collect()),
        }
    }
}

impl From<&AccountsError> for MessageDto {
    fn from(e: &AccountsError) -> Self {
        Self {
            message: e.to_string(),
        }
    }
}
