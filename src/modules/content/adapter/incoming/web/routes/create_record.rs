use actix_web::{web, HttpResponse};
use tracing::info;

use super::{record_error_response, RecordRoutes};
use crate::modules::auth::adapter::incoming::web::extractors::AdminSession;
use crate::shared::api::ApiResponse;
use crate::AppState;

pub async fn create_record_handler<R: RecordRoutes>(
    admin: AdminSession,
    body: web::Json<R::Draft>,
    data: web::Data<AppState>,
) -> HttpResponse {
    match R::use_cases(&data).create.execute(body.into_inner()).await {
        Ok(created) => {
            info!(
                collection = R::COLLECTION,
                id = %created.id,
                by = %admin.session.email,
                "record added"
            );
            ApiResponse::created(created)
        }
        Err(e) => record_error_response::<R>(e),
    }
}
