use actix_web::{post, web, Responder};
use serde::Serialize;
use tracing::{error, info};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminSession;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct LogoutResponseBody {
    #[schema(example = "Signed out")]
    message: String,
}

/// Admin sign-out
///
/// Revokes the bearer token used for this request.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "auth",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Signed out", body = inline(SuccessResponse<LogoutResponseBody>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    )
)]
#[post("/api/auth/logout")]
pub async fn logout_handler(admin: AdminSession, data: web::Data<AppState>) -> impl Responder {
    match data.identity.sign_out(&admin.token) {
        Ok(()) => {
            info!(session_id = %admin.session.session_id, "Admin session closed");
            ApiResponse::success(LogoutResponseBody {
                message: "Signed out".to_string(),
            })
        }
        Err(e) => {
            error!(error = %e, "Sign-out failed");
            ApiResponse::internal_error()
        }
    }
}
