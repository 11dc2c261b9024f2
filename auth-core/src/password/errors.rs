use thiserror::Error;

/// Error type for password operations.
///
/// Verification has no error variant on purpose: a mismatch, a
/// malformed stored hash, and an internal failure are all reported as
/// "does not verify" so callers cannot distinguish them.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Invalid hashing parameters: {0}")]
    InvalidParams(String),
}
