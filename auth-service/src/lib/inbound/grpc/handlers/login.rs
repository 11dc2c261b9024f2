use std::sync::Arc;

use tonic::Status;

use super::status_from_error;
use crate::auth::ports::AuthServicePort;
use crate::auth::service::AuthService;
use crate::outbound::registry::InMemoryUserRegistry;
use crate::proto::LoginRequest;
use crate::proto::LoginResponse;

pub async fn login(
    service: Arc<AuthService<InMemoryUserRegistry>>,
    request: LoginRequest,
) -> Result<LoginResponse, Status> {
    // No field validation here: any malformed credential must fail the
    // same way as a wrong one, and the service guarantees that.
    let token = service
        .login(&request.username, &request.password)
        .await
        .map_err(status_from_error)?;

    Ok(LoginResponse { token })
}
