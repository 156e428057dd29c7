use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::info;

use super::{record_error_response, RecordRoutes};
use crate::modules::auth::adapter::incoming::web::extractors::AdminSession;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct DeleteQuery {
    pub confirm: Option<String>,
}

impl DeleteQuery {
    fn confirmed(&self) -> bool {
        self.confirm.as_deref() == Some("true")
    }
}

/// Irreversible, so the caller has to pass `?confirm=true`.
pub async fn delete_record_handler<R: RecordRoutes>(
    admin: AdminSession,
    path: web::Path<String>,
    query: web::Query<DeleteQuery>,
    data: web::Data<AppState>,
) -> HttpResponse {
    if !query.confirmed() {
        return ApiResponse::bad_request(
            "CONFIRMATION_REQUIRED",
            "Deleting a record cannot be undone; repeat the request with ?confirm=true",
        );
    }

    let id = path.into_inner();
    match R::use_cases(&data).delete.execute(&id).await {
        Ok(()) => {
            info!(
                collection = R::COLLECTION,
                id = %id,
                by = %admin.session.email,
                "record removed"
            );
            HttpResponse::NoContent().finish()
        }
        Err(e) => record_error_response::<R>(e),
    }
}
