use actix_web::{web, HttpResponse};
use tracing::info;

use super::{record_error_response, RecordRoutes};
use crate::modules::auth::adapter::incoming::web::extractors::AdminSession;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Full overwrite; the body must carry every field to keep.
pub async fn update_record_handler<R: RecordRoutes>(
    admin: AdminSession,
    path: web::Path<String>,
    body: web::Json<R::Draft>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let id = path.into_inner();

    match R::use_cases(&data).update.execute(&id, body.into_inner()).await {
        Ok(updated) => {
            info!(
                collection = R::COLLECTION,
                id = %id,
                by = %admin.session.email,
                "record updated"
            );
            ApiResponse::success(updated)
        }
        Err(e) => record_error_response::<R>(e),
    }
}
