mod create_record;
mod delete_record;
mod list_records;
mod update_record;

pub use create_record::create_record_handler;
pub use delete_record::{delete_record_handler, DeleteQuery};
pub use list_records::list_records_handler;
pub use update_record::update_record_handler;

use actix_web::{web, HttpResponse};
use tracing::error;

use crate::modules::content::application::domain::{CollectionRecord, Experience, Project, Skill};
use crate::modules::content::application::ports::incoming::use_cases::RecordError;
use crate::modules::content::application::record_use_cases::RecordUseCases;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// A record kind that is exposed over the admin record routes.
pub trait RecordRoutes: CollectionRecord {
    fn use_cases(state: &AppState) -> &RecordUseCases<Self>;
}

impl RecordRoutes for Project {
    fn use_cases(state: &AppState) -> &RecordUseCases<Self> {
        &state.projects
    }
}

impl RecordRoutes for Skill {
    fn use_cases(state: &AppState) -> &RecordUseCases<Self> {
        &state.skills
    }
}

impl RecordRoutes for Experience {
    fn use_cases(state: &AppState) -> &RecordUseCases<Self> {
        &state.experiences
    }
}

/// `GET/POST /api/{collection}` and `PUT/DELETE /api/{collection}/{id}`.
pub fn configure<R: RecordRoutes>(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(format!("/api/{}", R::COLLECTION))
            .route(web::get().to(list_records_handler::<R>))
            .route(web::post().to(create_record_handler::<R>)),
    )
    .service(
        web::resource(format!("/api/{}/{{id}}", R::COLLECTION))
            .route(web::put().to(update_record_handler::<R>))
            .route(web::delete().to(delete_record_handler::<R>)),
    );
}

fn record_error_response<R: CollectionRecord>(err: RecordError) -> HttpResponse {
    match err {
        RecordError::Validation(msg) => ApiResponse::bad_request("VALIDATION_ERROR", &msg),
        RecordError::NotFound(id) => ApiResponse::not_found(
            "RECORD_NOT_FOUND",
            &format!("No record '{}' in {}", id, R::COLLECTION),
        ),
        RecordError::RepositoryError(msg) => {
            error!(collection = R::COLLECTION, error = %msg, "record operation failed");
            ApiResponse::internal_error()
        }
    }
}
