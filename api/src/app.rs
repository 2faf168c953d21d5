//! Application factory
//!
//! Builds the Actix-web application from a prepared [`AppState`].

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, Error, HttpResponse,
};
use tracing_actix_web::TracingLogger;

use rcp_core::UserRepository;
use rcp_shared::{error_codes, ErrorResponse, HealthResponse};

use crate::handlers::error::json_error_handler;
use crate::middleware::auth::{SessionAuthenticator, SessionGuard};
use crate::routes::auth::{
    login::login, logout::logout, session::current_session, AppState,
};

/// Service name reported by the health endpoint
pub const SERVICE_NAME: &str = "recipe-share-api";

/// Create and configure the application with all dependencies
pub fn create_app<U>(
    app_state: web::Data<AppState<U>>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
{
    let authenticator: Arc<dyn SessionAuthenticator> = app_state.auth_service.clone();
    let json_config = web::JsonConfig::default()
        .limit(app_state.max_payload_size)
        .error_handler(json_error_handler);

    App::new()
        .app_data(app_state)
        .app_data(web::Data::new(authenticator))
        .app_data(json_config)
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/users")
                .route("/login", web::post().to(login::<U>))
                .route("/logout", web::get().to(logout::<U>))
                .route("/logout", web::post().to(logout::<U>))
                .service(
                    web::resource("/session")
                        .wrap(SessionGuard::new())
                        .route(web::get().to(current_session)),
                ),
        )
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::healthy(
        SERVICE_NAME,
        env!("CARGO_PKG_VERSION"),
    ))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
