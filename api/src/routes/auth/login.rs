use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::{LoginData, LoginRequest};
use crate::dto::ApiResponse;
use crate::handlers::error::{handle_domain_error, validation_error_response};

use rcp_core::UserRepository;

use super::AppState;

/// Handler for POST /users/login
///
/// # Request Body
///
/// ```json
/// { "username": "alice", "password": "..." }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "status_code": 200,
///     "message": "Login successful",
///     "data": { "user": { "username": "alice", "email": null }, "token": "..." },
///     "timestamp": "2025-08-14T10:00:00Z"
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Missing username or password
/// - 401 Unauthorized: Unknown user or wrong password
/// - 403 Forbidden: Account disabled
pub async fn login<U>(
    state: web::Data<AppState<U>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
{
    if let Err(errors) = request.validate() {
        tracing::warn!(username = %request.username, "Rejected login request: validation failed");
        return validation_error_response(&errors);
    }

    match state
        .auth_service
        .login(&request.username, &request.password)
        .await
    {
        Ok(outcome) => {
            HttpResponse::Ok().json(ApiResponse::ok("Login successful", LoginData::from(outcome)))
        }
        Err(error) => handle_domain_error(&error),
    }
}
