use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;

use sg_api::app::create_app;
use sg_api::routes::auth::AppState;
use sg_api::telemetry::init_tracing;
use sg_core::services::auth::{AuthService, AuthServiceConfig};
use sg_core::services::password::{BcryptPasswordEncoder, CredentialVerifier};
use sg_core::services::token::TokenService;
use sg_infra::{DatabasePool, MySqlTokenRepository, MySqlUserRepository};
use sg_shared::config::{AppConfig, Environment, LoggingConfig};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Logging comes up before the rest of the configuration so load failures are reported
    init_tracing(&LoggingConfig::from_env(Environment::from_env()));

    let config = AppConfig::from_env().context("Failed to load configuration")?;
    tracing::info!(
        environment = %config.environment,
        access_ttl_millis = config.jwt.access_ttl_millis,
        refresh_ttl_millis = config.jwt.refresh_ttl_millis,
        "Starting SessionGate API server"
    );

    let token_service = Arc::new(
        TokenService::from_config(&config.jwt).context("Invalid token signing configuration")?,
    );

    let pool = DatabasePool::new(&config.database)
        .await
        .context("Failed to connect to the database")?;
    pool.run_migrations()
        .await
        .context("Failed to run database migrations")?;
    tracing::info!(stats = %pool.get_statistics(), "Database ready");

    let user_repository = Arc::new(MySqlUserRepository::new(pool.get_pool().clone()));
    let token_repository = Arc::new(MySqlTokenRepository::new(pool.get_pool().clone()));
    let credential_verifier = CredentialVerifier::new(BcryptPasswordEncoder::default())
        .context("Failed to initialise password hashing")?;

    let auth_service = Arc::new(AuthService::new(
        user_repository,
        token_repository,
        credential_verifier,
        token_service,
        AuthServiceConfig::default(),
    ));
    let app_state = web::Data::new(AppState::new(auth_service));

    let bind_address = config.server.bind_address();
    tracing::info!(address = %bind_address, "Binding HTTP server");

    let mut server = HttpServer::new(move || create_app(app_state.clone()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run()
        .await
        .context("HTTP server terminated with an error")?;

    pool.close().await;
    tracing::info!("Server stopped");

    Ok(())
}
