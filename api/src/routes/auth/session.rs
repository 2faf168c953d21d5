use actix_web::HttpResponse;

use crate::dto::auth::SessionData;
use crate::dto::ApiResponse;
use crate::middleware::auth::AuthContext;

/// Handler for GET /users/session, behind the session guard
pub async fn current_session(auth: AuthContext) -> HttpResponse {
    let data = SessionData {
        username: auth.username,
        expires_at: auth.expires_at,
    };

    HttpResponse::Ok().json(ApiResponse::ok("Session active", data))
}
