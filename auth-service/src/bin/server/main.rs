use std::sync::Arc;

use auth_core::PasswordHasher;
use auth_core::TokenCodec;
use auth_service::config::Config;
use auth_service::domain::auth::service::AuthService;
use auth_service::inbound::grpc::AuthGrpcService;
use auth_service::outbound::registry::InMemoryUserRegistry;
use auth_service::proto::auth_service_server::AuthServiceServer;
use chrono::Duration;
use tonic::transport::Server;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "auth_service=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "auth-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    // Secret stays out of the logs
    tracing::info!(
        grpc_port = config.server.grpc_port,
        token_validity_secs = config.token.validity_secs,
        "Configuration loaded"
    );

    let password_hasher = PasswordHasher::with_params(
        config.password.memory_kib,
        config.password.iterations,
        config.password.parallelism,
    )?;
    let token_codec = TokenCodec::new(
        config.token.secret.as_bytes(),
        Duration::seconds(config.token.validity_secs),
    );

    let registry = Arc::new(InMemoryUserRegistry::new());
    let auth_service = Arc::new(AuthService::new(registry, password_hasher, token_codec));

    let grpc_address = format!("0.0.0.0:{}", config.server.grpc_port).parse()?;
    let grpc_service = AuthGrpcService::new(auth_service);
    tracing::info!(
        address = %grpc_address,
        protocol = "grpc",
        "gRpc server listening"
    );

    Server::builder()
        .add_service(AuthServiceServer::new(grpc_service))
        .serve(grpc_address)
        .await?;

    Ok(())
}
