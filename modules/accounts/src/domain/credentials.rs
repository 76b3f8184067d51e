use crate::domain::error::DomainError;

/// Lowest and highest cost factors bcrypt accepts.
pub const MIN_COST: u32 = 4;
pub const MAX_COST: u32 = 31;
pub const DEFAULT_COST: u32 = bcrypt::DEFAULT_COST;

/// Salted bcrypt hashing of account passwords.
///
/// Each call to [`CredentialHasher::hash`] draws a fresh salt, so hashing the
/// same password twice yields two different strings; the cost factor and salt
/// travel inside the hash, which is all [`CredentialHasher::verify`] needs.
#[derive(Debug, Clone, Copy)]
pub struct CredentialHasher {
    cost: u32,
}

impl CredentialHasher {
    pub fn new(cost: u32) -> Result<Self, DomainError> {
        if !(MIN_COST..=MAX_COST).contains(&cost) {
            return Err(DomainError::credential(format!(
                "bcrypt cost {cost} outside {MIN_COST}..={MAX_COST}"
            )));
        }
        Ok(Self { cost })
    }

    pub fn hash(&self, plaintext: &str) -> Result<String, DomainError> {
        bcrypt::hash(plaintext, self.cost).map_err(|e| DomainError::credential(e.to_string()))
    }

    /// Malformed hashes verify as `false`.
    pub fn verify(&self, plaintext: &str, hash: &str) -> bool {
        bcrypt::verify(plaintext, hash).unwrap_or(false)
    }
}
