use actix_web::{web, HttpResponse};

use super::{record_error_response, RecordRoutes};
use crate::modules::auth::adapter::incoming::web::extractors::AdminSession;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Admin list view, in presentation order.
pub async fn list_records_handler<R: RecordRoutes>(
    _admin: AdminSession,
    data: web::Data<AppState>,
) -> HttpResponse {
    match R::use_cases(&data).list.execute().await {
        Ok(records) => ApiResponse::success(records),
        Err(e) => record_error_response::<R>(e),
    }
}
