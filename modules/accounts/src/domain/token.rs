use std::collections::BTreeMap;
use std::fmt;

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::domain::error::DomainError;

/// Flat string claims. A sorted map keeps the encoded payload stable for a
/// given claim set regardless of insertion order.
pub type Claims = BTreeMap<String, String>;

const ALGORITHM: Algorithm = Algorithm::HS256;

/// Issues HS256 JWTs from a shared secret. Tokens carry no expiry.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("algorithm", &ALGORITHM)
            .finish_non_exhaustive()
    }
}

impl TokenIssuer {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    pub fn issue(&self, claims: &Claims) -> Result<String, DomainError> {
        jsonwebtoken::encode(&Header::new(ALGORITHM), claims, &self.encoding)
            .map_err(|e| DomainError::token(e.to_string()))
    }

    /// Verifies the signature with the same secret and algorithm and returns
    /// the embedded claims.
    pub fn decode(&self, token: &str) -> Result<Claims, DomainError> {
        let mut validation = Validation::new(ALGORITHM);
        validation.required_spec_claims.clear();
        validation.validate_exp = false;

        jsonwebtoken::decode::<Claims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|e| DomainError::token(e.to_string()))
    }
}

/// Claims embedded in the token issued at account creation.
pub fn identity_claims(user_id: Uuid, email: &str) -> Claims {
    Claims::from([
        ("user_id".to_string(), user_id.to_string()),
        ("email".to_string(), email.to_string()),
    ])
}
