use thiserror::Error;

/// Error type for token operations.
///
/// The three verification variants are deliberately distinct: callers
/// decide whether to surface the kind (diagnostics) or collapse it
/// into a plain "not valid".
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Failed to create token: {0}")]
    CreationFailed(String),

    #[error("Token is malformed")]
    Malformed,

    #[error("Token signature is invalid")]
    SignatureInvalid,

    #[error("Token is expired")]
    Expired,
}
