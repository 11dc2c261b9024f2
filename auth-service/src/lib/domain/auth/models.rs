use std::fmt;

use auth_core::TokenError;
use uuid::Uuid;

use crate::auth::errors::PasswordPolicyError;
use crate::auth::errors::UserIdError;
use crate::auth::errors::UsernameError;

/// User unique identifier type.
///
/// Opaque and immutable: assigned once at registration, never derived
/// from the username, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Generate a new random user ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a user ID from string.
    ///
    /// Used to turn a token's subject claim back into an identifier;
    /// anything that is not a UUID is rejected rather than passed
    /// through.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, UserIdError> {
        Uuid::parse_str(s)
            .map(UserId)
            .map_err(|e| UserIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Username value type.
///
/// Case-sensitive login key. Validation is deliberately light: the
/// username is only ever used as a lookup key, so the constraints are
/// non-empty and a length cap.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    const MAX_LENGTH: usize = 128;

    /// Create a new valid username.
    ///
    /// # Errors
    /// * `Empty` - Username is empty
    /// * `TooLong` - Username exceeds 128 characters
    pub fn new(username: String) -> Result<Self, UsernameError> {
        if username.is_empty() {
            return Err(UsernameError::Empty);
        }
        let length = username.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(UsernameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }
        Ok(Self(username))
    }

    /// Get username as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// What the registry stores per username.
///
/// The hash is the PHC string produced by the password hasher; the
/// plaintext password never reaches the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: UserId,
    pub password_hash: String,
}

/// Command to register a new user with validated fields.
#[derive(Debug)]
pub struct RegisterCommand {
    pub username: Username,
    pub password: String,
}

impl RegisterCommand {
    /// Construct a register command.
    ///
    /// # Errors
    /// * `PasswordPolicyError::Empty` - Password is empty
    pub fn new(username: Username, password: String) -> Result<Self, PasswordPolicyError> {
        if password.is_empty() {
            return Err(PasswordPolicyError::Empty);
        }
        Ok(Self { username, password })
    }
}

/// Outcome of token validation.
///
/// Validation never fails as an error: an invalid token is a normal
/// answer. The reason is carried for diagnostics only and is not
/// exposed to remote callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenValidation {
    Valid { subject: UserId },
    Invalid { reason: InvalidTokenReason },
}

impl TokenValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, TokenValidation::Valid { .. })
    }
}

/// Why a token failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidTokenReason {
    Malformed,
    SignatureInvalid,
    Expired,
}

impl From<TokenError> for InvalidTokenReason {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::SignatureInvalid => InvalidTokenReason::SignatureInvalid,
            TokenError::Expired => InvalidTokenReason::Expired,
            // CreationFailed cannot come out of verification
            TokenError::Malformed | TokenError::CreationFailed(_) => InvalidTokenReason::Malformed,
        }
    }
}
