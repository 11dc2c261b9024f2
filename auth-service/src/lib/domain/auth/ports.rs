use async_trait::async_trait;

use crate::auth::errors::AuthError;
use crate::auth::models::RegisterCommand;
use crate::auth::models::TokenValidation;
use crate::auth::models::UserId;
use crate::auth::models::UserRecord;
use crate::auth::models::Username;

/// Port for the authentication service operations.
///
/// This is the only surface exposed to inbound adapters.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new user.
    ///
    /// # Arguments
    /// * `command` - Validated command containing username and password
    ///
    /// # Returns
    /// Identifier of the newly created user
    ///
    /// # Errors
    /// * `UsernameTaken` - Username is already registered
    /// * `HashingFailed` - Password hashing could not complete
    async fn register(&self, command: RegisterCommand) -> Result<UserId, AuthError>;

    /// Verify credentials and issue a bearer token.
    ///
    /// # Arguments
    /// * `username` - Raw username from the caller
    /// * `password` - Plaintext password to verify
    ///
    /// # Returns
    /// Signed token string bound to the user's identifier
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown username or wrong password
    ///   (indistinguishable from each other)
    /// * `TokenCreationFailed` - Token signing failed
    async fn login(&self, username: &str, password: &str) -> Result<String, AuthError>;

    /// Validate a bearer token.
    ///
    /// Always returns an answer; an invalid token is an expected
    /// outcome, not an error.
    ///
    /// # Arguments
    /// * `token` - Serialized token string
    ///
    /// # Returns
    /// `Valid` with the subject identifier, or `Invalid` with the
    /// failure reason for diagnostics
    async fn validate(&self, token: &str) -> TokenValidation;
}

/// Storage port for registered users.
///
/// Implementations own the only mutable shared state in the system
/// and must serialize registration against lookup so no caller ever
/// observes a torn record.
#[async_trait]
pub trait UserRegistry: Send + Sync + 'static {
    /// Atomically check username uniqueness and insert a new record.
    ///
    /// Allocates a fresh identifier on success. On failure nothing
    /// is mutated.
    ///
    /// # Arguments
    /// * `username` - Validated username, used as the storage key
    /// * `password_hash` - Hash produced by the password hasher
    ///
    /// # Returns
    /// Identifier of the created user
    ///
    /// # Errors
    /// * `UsernameTaken` - A record for this username already exists
    async fn register(
        &self,
        username: Username,
        password_hash: String,
    ) -> Result<UserId, AuthError>;

    /// Retrieve the record stored for a username.
    ///
    /// # Arguments
    /// * `username` - Username to look up
    ///
    /// # Returns
    /// The stored identifier and password hash
    ///
    /// # Errors
    /// * `UserNotFound` - No record for this username
    async fn lookup(&self, username: &Username) -> Result<UserRecord, AuthError>;
}
