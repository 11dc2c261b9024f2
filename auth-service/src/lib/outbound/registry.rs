use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::auth::errors::AuthError;
use crate::auth::models::UserId;
use crate::auth::models::UserRecord;
use crate::auth::models::Username;
use crate::auth::ports::UserRegistry;

/// In-memory user registry.
///
/// The username map is the only mutable shared state in the service.
/// `register` holds the write guard across the whole
/// check-then-allocate-then-insert sequence, so duplicate checks and
/// identifier allocation are atomic with respect to every other
/// registry operation; `lookup` takes the read guard, so lookups run
/// concurrently with each other but never against an in-flight write.
///
/// State does not survive a process restart.
pub struct InMemoryUserRegistry {
    users: RwLock<HashMap<Username, UserRecord>>,
}

impl InMemoryUserRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryUserRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRegistry for InMemoryUserRegistry {
    async fn register(
        &self,
        username: Username,
        password_hash: String,
    ) -> Result<UserId, AuthError> {
        let mut users = self.users.write().await;

        if users.contains_key(&username) {
            return Err(AuthError::UsernameTaken(username.to_string()));
        }

        // Fresh random id allocated under the same guard as the
        // uniqueness check; concurrent registrations cannot collide.
        let id = UserId::new();
        users.insert(username, UserRecord { id, password_hash });

        Ok(id)
    }

    async fn lookup(&self, username: &Username) -> Result<UserRecord, AuthError> {
        let users = self.users.read().await;

        users
            .get(username)
            .cloned()
            .ok_or_else(|| AuthError::UserNotFound(username.to_string()))
    }
}
