use std::sync::Arc;

use async_trait::async_trait;
use auth_core::PasswordHasher;
use auth_core::TokenCodec;
use auth_core::TokenError;
use chrono::Utc;

use crate::auth::errors::AuthError;
use crate::auth::models::InvalidTokenReason;
use crate::auth::models::RegisterCommand;
use crate::auth::models::TokenValidation;
use crate::auth::models::UserId;
use crate::auth::models::Username;
use crate::auth::ports::AuthServicePort;
use crate::auth::ports::UserRegistry;

/// Authentication service orchestrating hasher, registry, and codec.
///
/// Stateless per request: every call stands alone, and the only
/// shared mutable state lives behind the registry port. The hasher
/// and codec are read-only after construction.
pub struct AuthService<R>
where
    R: UserRegistry,
{
    registry: Arc<R>,
    password_hasher: PasswordHasher,
    token_codec: TokenCodec,
}

impl<R> AuthService<R>
where
    R: UserRegistry,
{
    /// Create the service with injected dependencies.
    ///
    /// # Arguments
    /// * `registry` - User storage implementation
    /// * `password_hasher` - Configured password hasher
    /// * `token_codec` - Codec holding the signing secret and
    ///   validity window
    pub fn new(registry: Arc<R>, password_hasher: PasswordHasher, token_codec: TokenCodec) -> Self {
        Self {
            registry,
            password_hasher,
            token_codec,
        }
    }
}

#[async_trait]
impl<R> AuthServicePort for AuthService<R>
where
    R: UserRegistry,
{
    async fn register(&self, command: RegisterCommand) -> Result<UserId, AuthError> {
        let password_hash = self
            .password_hasher
            .hash(&command.password)
            .map_err(|e| AuthError::HashingFailed(e.to_string()))?;

        let user_id = self
            .registry
            .register(command.username.clone(), password_hash)
            .await?;

        tracing::info!(username = %command.username, user_id = %user_id, "User registered");

        Ok(user_id)
    }

    async fn login(&self, username: &str, password: &str) -> Result<String, AuthError> {
        // An unparseable username, an unknown username, and a wrong
        // password must all look the same to the caller.
        let username =
            Username::new(username.to_string()).map_err(|_| AuthError::InvalidCredentials)?;

        let record = self
            .registry
            .lookup(&username)
            .await
            .map_err(|e| match e {
                AuthError::UserNotFound(_) => AuthError::InvalidCredentials,
                other => other,
            })?;

        if !self.password_hasher.verify(password, &record.password_hash) {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self
            .token_codec
            .issue(&record.id.to_string(), Utc::now())
            .map_err(|e| AuthError::TokenCreationFailed(e.to_string()))?;

        tracing::info!(username = %username, user_id = %record.id, "User logged in");

        Ok(token)
    }

    async fn validate(&self, token: &str) -> TokenValidation {
        let claims = match self.token_codec.verify(token, Utc::now()) {
            Ok(claims) => claims,
            Err(e) => {
                let reason = InvalidTokenReason::from(e);
                tracing::debug!(?reason, "Token validation failed");
                return TokenValidation::Invalid { reason };
            }
        };

        // A subject that does not parse back into a UserId means the
        // token was not one of ours, however well it was signed.
        match UserId::from_string(&claims.sub) {
            Ok(subject) => TokenValidation::Valid { subject },
            Err(_) => {
                tracing::debug!("Token subject is not a valid user id");
                TokenValidation::Invalid {
                    reason: InvalidTokenReason::from(TokenError::Malformed),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::auth::models::UserRecord;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    // Define mocks in the test module using mockall
    mock! {
        pub TestUserRegistry {}

        #[async_trait]
        impl UserRegistry for TestUserRegistry {
            async fn register(&self, username: Username, password_hash: String) -> Result<UserId, AuthError>;
            async fn lookup(&self, username: &Username) -> Result<UserRecord, AuthError>;
        }
    }

    fn service_with(registry: MockTestUserRegistry) -> AuthService<MockTestUserRegistry> {
        // Low-cost hashing keeps the tests fast
        let hasher = PasswordHasher::with_params(8192, 1, 1).expect("Valid params rejected");
        let codec = TokenCodec::new(SECRET, Duration::minutes(5));
        AuthService::new(Arc::new(registry), hasher, codec)
    }

    fn username(s: &str) -> Username {
        Username::new(s.to_string()).unwrap()
    }

    fn register_command(username_str: &str, password: &str) -> RegisterCommand {
        RegisterCommand::new(username(username_str), password.to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_register_hashes_password_and_returns_id() {
        let mut registry = MockTestUserRegistry::new();

        let expected_id = UserId::new();
        registry
            .expect_register()
            .withf(|username, hash| {
                // The service stores a hash, never the plaintext
                username.as_str() == "alice" && hash.starts_with("$argon2") && !hash.contains("pw1")
            })
            .times(1)
            .returning(move |_, _| Ok(expected_id));

        let service = service_with(registry);

        let result = service.register(register_command("alice", "pw1")).await;
        assert_eq!(result.unwrap(), expected_id);
    }

    #[tokio::test]
    async fn test_register_duplicate_username() {
        let mut registry = MockTestUserRegistry::new();

        registry
            .expect_register()
            .times(1)
            .returning(|username, _| Err(AuthError::UsernameTaken(username.to_string())));

        let service = service_with(registry);

        let result = service.register(register_command("alice", "pw2")).await;
        assert!(matches!(result.unwrap_err(), AuthError::UsernameTaken(_)));
    }

    #[tokio::test]
    async fn test_login_issues_token_bound_to_user() {
        let mut registry = MockTestUserRegistry::new();

        let user_id = UserId::new();
        let hasher = PasswordHasher::with_params(8192, 1, 1).unwrap();
        let stored_hash = hasher.hash("pw1").unwrap();

        registry
            .expect_lookup()
            .withf(|u| u.as_str() == "alice")
            .times(1)
            .returning(move |_| {
                Ok(UserRecord {
                    id: user_id,
                    password_hash: stored_hash.clone(),
                })
            });

        let service = service_with(registry);

        let token = service.login("alice", "pw1").await.expect("Login failed");
        assert!(!token.is_empty());

        // Round trip through validation yields the same subject
        let validation = service.validate(&token).await;
        assert_eq!(validation, TokenValidation::Valid { subject: user_id });
    }

    #[tokio::test]
    async fn test_login_wrong_password_is_invalid_credentials() {
        let mut registry = MockTestUserRegistry::new();

        let hasher = PasswordHasher::with_params(8192, 1, 1).unwrap();
        let stored_hash = hasher.hash("pw1").unwrap();

        registry.expect_lookup().times(1).returning(move |_| {
            Ok(UserRecord {
                id: UserId::new(),
                password_hash: stored_hash.clone(),
            })
        });

        let service = service_with(registry);

        let result = service.login("alice", "wrong").await;
        assert!(matches!(result.unwrap_err(), AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_login_unknown_user_is_invalid_credentials() {
        let mut registry = MockTestUserRegistry::new();

        registry
            .expect_lookup()
            .times(1)
            .returning(|username| Err(AuthError::UserNotFound(username.to_string())));

        let service = service_with(registry);

        // Same error variant as a wrong password: no username enumeration
        let result = service.login("nobody", "pw1").await;
        assert!(matches!(result.unwrap_err(), AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_login_unparseable_username_is_invalid_credentials() {
        let mut registry = MockTestUserRegistry::new();

        // The registry is never consulted for an invalid username
        registry.expect_lookup().times(0);

        let service = service_with(registry);

        let result = service.login("", "pw1").await;
        assert!(matches!(result.unwrap_err(), AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_validate_garbage_is_malformed() {
        let service = service_with(MockTestUserRegistry::new());

        let validation = service.validate("not.a.token").await;
        assert_eq!(
            validation,
            TokenValidation::Invalid {
                reason: InvalidTokenReason::Malformed
            }
        );
    }

    #[tokio::test]
    async fn test_validate_foreign_signature_is_invalid() {
        let service = service_with(MockTestUserRegistry::new());

        let foreign = TokenCodec::new(b"other_secret_at_least_32_bytes_long!", Duration::minutes(5));
        let token = foreign.issue(&UserId::new().to_string(), Utc::now()).unwrap();

        let validation = service.validate(&token).await;
        assert_eq!(
            validation,
            TokenValidation::Invalid {
                reason: InvalidTokenReason::SignatureInvalid
            }
        );
    }

    #[tokio::test]
    async fn test_validate_expired_token() {
        let service = service_with(MockTestUserRegistry::new());

        // Same secret, negative validity: well-signed but already past exp
        let expired_issuer = TokenCodec::new(SECRET, Duration::seconds(-10));
        let token = expired_issuer
            .issue(&UserId::new().to_string(), Utc::now())
            .unwrap();

        let validation = service.validate(&token).await;
        assert_eq!(
            validation,
            TokenValidation::Invalid {
                reason: InvalidTokenReason::Expired
            }
        );
    }

    #[tokio::test]
    async fn test_validate_non_uuid_subject_is_malformed() {
        let service = service_with(MockTestUserRegistry::new());

        // Correctly signed, but the subject is not one of our ids
        let issuer = TokenCodec::new(SECRET, Duration::minutes(5));
        let token = issuer.issue("42", Utc::now()).unwrap();

        let validation = service.validate(&token).await;
        assert_eq!(
            validation,
            TokenValidation::Invalid {
                reason: InvalidTokenReason::Malformed
            }
        );
    }
}
