use async_trait::async_trait;
use uuid::Uuid;

use super::{MemoryStore, lock};
use crate::domain::ports::{StoreError, UserRepository};
use crate::domain::{NewUser, User};

#[async_trait]
impl UserRepository for MemoryStore {
    async fn create_user(&self, user: NewUser) -> Result<User, StoreError> {
        let mut users = lock(&self.users);
        if users
            .values()
            .any(|entry| entry.record.username == user.username)
        {
            return Err(StoreError::conflict(format!(
                "username {} already exists",
                user.username
            )));
        }
        let created = User {
            id: Uuid::new_v4(),
            username: user.username,
            password_hash: user.password_hash,
            created_at: self.now(),
        };
        users.insert(created.id, self.sequenced(created.clone()));
        Ok(created)
    }

    async fn find_user(&self, id: &Uuid) -> Result<Option<User>, StoreError> {
        Ok(lock(&self.users).get(id).map(|entry| entry.record.clone()))
    }

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        Ok(lock(&self.users)
            .values()
            .find(|entry| entry.record.username == username)
            .map(|entry| entry.record.clone()))
    }
}
