//! Port abstraction for admin account persistence.
use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{NewUser, User};

use super::StoreError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new account. Usernames are unique; a duplicate yields
    /// [`StoreError::Conflict`].
    async fn create_user(&self, user: NewUser) -> Result<User, StoreError>;

    /// Fetch an account by identifier.
    async fn find_user(&self, id: &Uuid) -> Result<Option<User>, StoreError>;

    /// Fetch an account by exact username.
    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;
}
