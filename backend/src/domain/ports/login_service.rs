//! Driving port for admin login.
//!
//! Inbound adapters call it to authenticate credentials without knowing the
//! backing account store, so handler tests can substitute a double.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Error, LoginCredentials};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate credentials and return the authenticated user id.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<Uuid, Error>;
}
