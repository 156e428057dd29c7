use actix_web::{get, web, Responder};
use tracing::warn;

use super::parse_document_id;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminSession;
use crate::modules::settings::application::ports::incoming::use_cases::LoadedSettings;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Load a settings document
///
/// Every recognized field is present. A document that was never saved comes
/// back with its defaults; a backend failure does too, with a `warning`.
#[utoipa::path(
    get,
    path = "/api/settings/{document_id}",
    tag = "settings",
    security(("BearerAuth" = [])),
    params(("document_id" = String, Path, description = "Well-known settings id, e.g. generalSettings")),
    responses(
        (status = 200, description = "Settings document", body = inline(SuccessResponse<LoadedSettings>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Unknown settings document", body = ErrorResponse),
    )
)]
#[get("/api/settings/{document_id}")]
pub async fn get_settings_handler(
    _admin: AdminSession,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = match parse_document_id(&path) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    let loaded = data.settings.load.execute(id).await;
    if let Some(warning) = &loaded.warning {
        warn!(document = %id, "{}", warning);
    }

    ApiResponse::success(loaded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{admin_token, test_identity};
    use crate::tests::support::stubs::FailingDocumentStore;
    use actix_web::{test, App};
    use std::sync::Arc;

    #[actix_web::test]
    async fn test_unsaved_document_returns_defaults() {
        let identity = test_identity();
        let token = admin_token(&identity).await;
        let app_state = TestAppStateBuilder::default()
            .with_identity(identity)
            .build();
        let app =
            test::init_service(App::new().app_data(app_state).service(get_settings_handler)).await;

        let req = test::TestRequest::get()
            .uri("/api/settings/themeSettings")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["id"], "themeSettings");
        assert_eq!(body["data"]["fields"]["primaryColor"], "#00f0ff");
        assert_eq!(body["data"]["fields"]["defaultTheme"], "dark");
        assert!(body["data"].get("warning").is_none());
    }

    #[actix_web::test]
    async fn test_backend_failure_returns_defaults_with_warning() {
        let identity = test_identity();
        let token = admin_token(&identity).await;
        let app_state = TestAppStateBuilder::default()
            .with_store(Arc::new(FailingDocumentStore))
            .with_identity(identity)
            .build();
        let app =
            test::init_service(App::new().app_data(app_state).service(get_settings_handler)).await;

        let req = test::TestRequest::get()
            .uri("/api/settings/generalSettings")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["fields"]["maintenanceMode"], false);
        assert_eq!(body["data"]["fields"]["defaultLang"], "ar");
        assert!(body["data"]["warning"].is_string());
    }

    #[actix_web::test]
    async fn test_unknown_document_is_404() {
        let identity = test_identity();
        let token = admin_token(&identity).await;
        let app_state = TestAppStateBuilder::default()
            .with_identity(identity)
            .build();
        let app =
            test::init_service(App::new().app_data(app_state).service(get_settings_handler)).await;

        let req = test::TestRequest::get()
            .uri("/api/settings/heroContent")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 404);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "UNKNOWN_SETTINGS_DOCUMENT");
    }

    #[actix_web::test]
    async fn test_requires_admin() {
        let app_state = TestAppStateBuilder::default().build();
        let app =
            test::init_service(App::new().app_data(app_state).service(get_settings_handler)).await;

        let req = test::TestRequest::get()
            .uri("/api/settings/generalSettings")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 401);
    }
}
