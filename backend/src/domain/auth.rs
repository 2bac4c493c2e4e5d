//! Admin authentication: login credentials and the account-backed login
//! service.
//!
//! Keep inbound payload parsing outside the domain by exposing constructors
//! that validate string inputs before a handler talks to a port or service.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};
use uuid::Uuid;
use zeroize::Zeroizing;

use super::ports::{LoginService, StoreError, UserRepository};
use super::{Error, NewUser, User};

/// Domain error returned when login payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginValidationError {
    /// Username was missing or blank once trimmed.
    EmptyUsername,
    /// Password was blank.
    EmptyPassword,
}

impl fmt::Display for LoginValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyUsername => write!(f, "username must not be empty"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for LoginValidationError {}

/// Validated login credentials.
///
/// ## Invariants
/// - `username` is trimmed and must not be empty after trimming.
/// - `password` must be non-empty but keeps caller-provided whitespace.
///
/// # Examples
/// ```
/// use coaching_site::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts(" admin ", "password").unwrap();
/// assert_eq!(creds.username(), "admin");
/// assert_eq!(creds.password(), "password");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    username: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw username/password inputs.
    pub fn try_from_parts(username: &str, password: &str) -> Result<Self, LoginValidationError> {
        let normalized = username.trim();
        if normalized.is_empty() {
            return Err(LoginValidationError::EmptyUsername);
        }

        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }

        Ok(Self {
            username: normalized.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Username string suitable for user lookups.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Password string provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

fn store_failure(operation: &str, err: StoreError) -> Error {
    error!(operation, error = %err, "user repository failed");
    Error::internal(format!("{operation} failed"))
}

/// Ensure the configured admin account exists, creating it if needed.
///
/// An existing account with the same username is left as is.
pub async fn ensure_admin(
    users: &dyn UserRepository,
    credentials: &LoginCredentials,
) -> Result<User, Error> {
    if let Some(existing) = users
        .find_user_by_username(credentials.username())
        .await
        .map_err(|err| store_failure("find admin", err))?
    {
        return Ok(existing);
    }
    let new_user = NewUser::with_password(credentials.username(), credentials.password())
        .map_err(|err| {
            error!(error = %err, "admin password could not be hashed");
            Error::internal("create admin failed")
        })?;
    let user = users
        .create_user(new_user)
        .await
        .map_err(|err| store_failure("create admin", err))?;
    info!(username = %user.username, "admin account provisioned");
    Ok(user)
}

/// Login service checking credentials against stored accounts.
///
/// Constructed with `None` when no admin account was configured; every login
/// then fails with a configuration error.
#[derive(Clone)]
pub struct AccountLoginService {
    users: Option<Arc<dyn UserRepository>>,
}

impl AccountLoginService {
    /// Authenticate against `users`.
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users: Some(users) }
    }

    /// Service used when no admin password was configured.
    pub fn unconfigured() -> Self {
        Self { users: None }
    }
}

#[async_trait]
impl LoginService for AccountLoginService {
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<Uuid, Error> {
        let Some(users) = &self.users else {
            error!("admin login attempted without configured admin credentials");
            return Err(Error::configuration("Admin login not configured"));
        };
        let user = users
            .find_user_by_username(credentials.username())
            .await
            .map_err(|err| store_failure("find user", err))?;
        match user {
            Some(user) if user.password_hash.matches(credentials.password()) => Ok(user.id),
            _ => Err(Error::unauthorized("invalid credentials")),
        }
    }
}
