use std::sync::Arc;

use tonic::Status;

use super::status_from_error;
use crate::auth::errors::AuthError;
use crate::auth::models::RegisterCommand;
use crate::auth::models::Username;
use crate::auth::ports::AuthServicePort;
use crate::auth::service::AuthService;
use crate::outbound::registry::InMemoryUserRegistry;
use crate::proto::RegisterRequest;
use crate::proto::RegisterResponse;

pub async fn register(
    service: Arc<AuthService<InMemoryUserRegistry>>,
    request: RegisterRequest,
) -> Result<RegisterResponse, Status> {
    let username = Username::new(request.username)
        .map_err(|e| status_from_error(AuthError::InvalidUsername(e)))?;

    let command = RegisterCommand::new(username, request.password)
        .map_err(|e| status_from_error(AuthError::InvalidPassword(e)))?;

    let user_id = service
        .register(command)
        .await
        .map_err(status_from_error)?;

    Ok(RegisterResponse {
        user_id: user_id.to_string(),
    })
}
