//! Admin user accounts.

use std::fmt;

use bcrypt::DEFAULT_COST;
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// Raised when the password hasher rejects its input.
#[derive(Debug, Error)]
#[error("password hashing failed: {0}")]
pub struct PasswordHashError(#[from] bcrypt::BcryptError);

/// Salted bcrypt hash of a password.
///
/// The hash is opaque: it is verified against, never displayed or serialised.
///
/// # Examples
/// ```
/// use coaching_site::domain::PasswordHash;
///
/// let hash = PasswordHash::hash_with_cost("hunter2", 4).unwrap();
/// assert!(hash.matches("hunter2"));
/// assert!(!hash.matches("hunter3"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Hash a plaintext password at the default work factor.
    pub fn hash(password: &str) -> Result<Self, PasswordHashError> {
        Self::hash_with_cost(password, DEFAULT_COST)
    }

    /// Hash a plaintext password at an explicit bcrypt cost.
    pub fn hash_with_cost(password: &str, cost: u32) -> Result<Self, PasswordHashError> {
        Ok(Self(bcrypt::hash(password, cost)?))
    }

    /// Whether `password` verifies against this hash.
    pub fn matches(&self, password: &str) -> bool {
        bcrypt::verify(password, &self.0).unwrap_or(false)
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(..)")
    }
}

/// Stored admin account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub username: String,
    #[serde(skip)]
    pub password_hash: PasswordHash,
    pub created_at: DateTime<Utc>,
}

/// Fields supplied when creating an account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub password_hash: PasswordHash,
}

impl NewUser {
    /// Account whose password is hashed from `password`.
    pub fn with_password(
        username: impl Into<String>,
        password: &str,
    ) -> Result<Self, PasswordHashError> {
        Ok(Self {
            username: username.into(),
            password_hash: PasswordHash::hash(password)?,
        })
    }
}
