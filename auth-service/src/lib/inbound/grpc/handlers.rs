use tonic::Status;

use crate::auth::errors::AuthError;

pub mod login;
pub mod register;
pub mod validate;

/// Map a domain error onto a gRPC status.
///
/// Client mistakes become client statuses; infrastructure failures are
/// logged in full and surfaced as a bare internal status. A raw
/// `UserNotFound` should have been collapsed by the service already,
/// but if one slips through it is surfaced exactly like a wrong
/// password.
pub(crate) fn status_from_error(err: AuthError) -> Status {
    match err {
        AuthError::InvalidUsername(_) | AuthError::InvalidPassword(_) => {
            Status::invalid_argument(err.to_string())
        }
        AuthError::UsernameTaken(_) => Status::already_exists(err.to_string()),
        AuthError::InvalidCredentials | AuthError::UserNotFound(_) => {
            Status::unauthenticated("Invalid credentials")
        }
        AuthError::HashingFailed(_) | AuthError::TokenCreationFailed(_) => {
            tracing::error!(error = %err, "Internal authentication failure");
            Status::internal("Internal error")
        }
    }
}
