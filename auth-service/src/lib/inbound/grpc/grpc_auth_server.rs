use std::sync::Arc;

use tonic::Request;
use tonic::Response;
use tonic::Status;

use super::handlers::login;
use super::handlers::register;
use super::handlers::validate;
use crate::domain::auth::service::AuthService;
use crate::outbound::registry::InMemoryUserRegistry;
use crate::proto::auth_service_server::AuthService as AuthServiceProto;
use crate::proto::LoginRequest;
use crate::proto::LoginResponse;
use crate::proto::RegisterRequest;
use crate::proto::RegisterResponse;
use crate::proto::ValidateRequest;
use crate::proto::ValidateResponse;

pub struct AuthGrpcService {
    service: Arc<AuthService<InMemoryUserRegistry>>,
}

impl AuthGrpcService {
    pub fn new(service: Arc<AuthService<InMemoryUserRegistry>>) -> Self {
        Self { service }
    }
}

#[tonic::async_trait]
impl AuthServiceProto for AuthGrpcService {
    async fn register(
        &self,
        request: Request<RegisterRequest>,
    ) -> Result<Response<RegisterResponse>, Status> {
        let response = register::register(self.service.clone(), request.into_inner()).await?;
        Ok(Response::new(response))
    }

    async fn login(
        &self,
        request: Request<LoginRequest>,
    ) -> Result<Response<LoginResponse>, Status> {
        let response = login::login(self.service.clone(), request.into_inner()).await?;
        Ok(Response::new(response))
    }

    async fn validate(
        &self,
        request: Request<ValidateRequest>,
    ) -> Result<Response<ValidateResponse>, Status> {
        let response = validate::validate(self.service.clone(), request.into_inner()).await;
        Ok(Response::new(response))
    }
}
