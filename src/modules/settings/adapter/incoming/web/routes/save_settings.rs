use actix_web::{put, web, Responder};
use tracing::error;

use super::parse_document_id;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminSession;
use crate::modules::document_store::application::domain::entities::Fields;
use crate::modules::settings::application::ports::incoming::use_cases::{
    LoadedSettings, SaveSettingsError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Save a settings document
///
/// Merge-write: only the fields in the body change; the document is created
/// on first save. Responds with the document as stored afterwards.
#[utoipa::path(
    put,
    path = "/api/settings/{document_id}",
    tag = "settings",
    security(("BearerAuth" = [])),
    params(("document_id" = String, Path, description = "Well-known settings id, e.g. generalSettings")),
    request_body(content = Object, description = "Partial settings object"),
    responses(
        (status = 200, description = "Saved", body = inline(SuccessResponse<LoadedSettings>)),
        (status = 400, description = "Field has the wrong type or value", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Unknown settings document", body = ErrorResponse),
        (status = 500, description = "Backend failure", body = ErrorResponse),
    )
)]
#[put("/api/settings/{document_id}")]
pub async fn save_settings_handler(
    admin: AdminSession,
    path: web::Path<String>,
    body: web::Json<Fields>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = match parse_document_id(&path) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match data.settings.save.execute(id, body.into_inner()).await {
        Ok(()) => {
            tracing::info!(document = %id, by = %admin.session.email, "settings updated");
            ApiResponse::success(data.settings.load.execute(id).await)
        }
        Err(SaveSettingsError::Validation(msg)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }
        Err(SaveSettingsError::RepositoryError(msg)) => {
            error!(document = %id, error = %msg, "settings save failed");
            ApiResponse::internal_error()
        }
    }
}
