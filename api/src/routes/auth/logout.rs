use actix_web::{web, HttpRequest, HttpResponse};

use crate::dto::ApiResponse;
use crate::handlers::error::unauthorized_response;
use crate::middleware::auth::extract_bearer_token;

use rcp_core::UserRepository;

use super::AppState;

/// Handler for GET and POST /users/logout
///
/// Revokes the bearer token from the Authorization header. The token does
/// not have to be valid; revoking twice is harmless.
///
/// # Headers
///
/// ```text
/// Authorization: Bearer {token}
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "status_code": 200, "message": "Logged out successfully", "timestamp": "..." }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: Missing or non-bearer Authorization header
pub async fn logout<U>(req: HttpRequest, state: web::Data<AppState<U>>) -> HttpResponse
where
    U: UserRepository + 'static,
{
    let token = match extract_bearer_token(req.headers()) {
        Some(token) => token,
        None => return unauthorized_response(),
    };

    state.auth_service.logout(token);

    HttpResponse::Ok().json(ApiResponse::message(200, "Logged out successfully"))
}
