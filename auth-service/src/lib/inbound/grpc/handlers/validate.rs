use std::sync::Arc;

use crate::auth::models::TokenValidation;
use crate::auth::ports::AuthServicePort;
use crate::auth::service::AuthService;
use crate::outbound::registry::InMemoryUserRegistry;
use crate::proto::ValidateRequest;
use crate::proto::ValidateResponse;

/// Validate never returns a gRPC error: an invalid token is a normal
/// answer, and the reason stays in the logs.
pub async fn validate(
    service: Arc<AuthService<InMemoryUserRegistry>>,
    request: ValidateRequest,
) -> ValidateResponse {
    match service.validate(&request.token).await {
        TokenValidation::Valid { subject } => ValidateResponse {
            is_valid: true,
            user_id: subject.to_string(),
        },
        TokenValidation::Invalid { .. } => ValidateResponse {
            is_valid: false,
            user_id: String::new(),
        },
    }
}
