use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;

use rcp_api::app::create_app;
use rcp_api::routes::auth::AppState;
use rcp_api::telemetry;
use rcp_core::{AuthService, AuthUser, InMemoryUserRepository, SessionAuthority};
use rcp_shared::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;
    telemetry::init_tracing(&config.logging)?;

    tracing::info!(environment = %config.environment, "Starting RecipeShare API server");

    let users = InMemoryUserRepository::with_users(
        config.auth.users.iter().cloned().map(AuthUser::from),
    );
    if users.is_empty().await {
        tracing::warn!("No users configured under auth.users; every login will fail");
    } else {
        tracing::info!(count = users.len().await, "Loaded user accounts");
    }

    let authority = SessionAuthority::from_config(&config.auth.session)
        .context("invalid session configuration")?;

    let auth_service = Arc::new(AuthService::new(Arc::new(users), Arc::new(authority)));
    let app_state = web::Data::new(
        AppState::new(auth_service).with_max_payload_size(config.server.max_payload_size),
    );

    let bind_address = config.server.bind_address();
    tracing::info!(address = %bind_address, "Server will bind");

    let mut server = HttpServer::new(move || create_app(app_state.clone()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}
