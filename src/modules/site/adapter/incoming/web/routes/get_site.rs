use actix_web::{get, web, Responder};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::modules::localization::Lang;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LangQuery {
    /// `ar`, `en` or `de`. Anything else is treated as absent.
    pub lang: Option<String>,
}

impl LangQuery {
    pub fn requested(&self) -> Option<Lang> {
        self.lang.as_deref().and_then(Lang::parse)
    }
}

/// Public page model
///
/// Either `{"state":"maintenance", ...}` or the full localized page. Never
/// fails; backend problems degrade to defaults and empty lists.
#[utoipa::path(
    get,
    path = "/api/public/site",
    tag = "public",
    params(LangQuery),
    responses(
        (status = 200, description = "Resolved page or maintenance notice", content_type = "application/json"),
    )
)]
#[get("/api/public/site")]
pub async fn get_site_handler(
    query: web::Query<LangQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    ApiResponse::success(data.public_site.execute(query.requested()).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::document_store::adapter::outgoing::InMemoryDocumentStore;
    use crate::modules::document_store::application::domain::entities::{collections, WriteMode};
    use crate::modules::document_store::application::ports::outgoing::DocumentStore;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::fixtures::fields;
    use actix_web::{test, App};
    use serde_json::{json, Value};
    use std::sync::Arc;

    #[actix_web::test]
    async fn test_public_site_needs_no_token() {
        let app_state = TestAppStateBuilder::default().build();
        let app =
            test::init_service(App::new().app_data(app_state).service(get_site_handler)).await;

        let req = test::TestRequest::get().uri("/api/public/site?lang=en").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["state"], "normal");
        assert_eq!(body["data"]["lang"], "en");
        assert_eq!(body["data"]["dir"], "ltr");
        assert_eq!(body["data"]["navigation"][0]["label"], "Home");
    }

    #[actix_web::test]
    async fn test_maintenance_notice() {
        let store = Arc::new(InMemoryDocumentStore::new());
        store
            .set(
                collections::SETTINGS,
                "generalSettings",
                fields(json!({ "maintenanceMode": true })),
                WriteMode::Merge,
            )
            .await
            .unwrap();
        let app_state = TestAppStateBuilder::default().with_store(store).build();
        let app =
            test::init_service(App::new().app_data(app_state).service(get_site_handler)).await;

        let req = test::TestRequest::get().uri("/api/public/site?lang=xx").to_request();
        let resp = test::call_service(&app, req).await;

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["state"], "maintenance");
        assert_eq!(body["data"]["lang"], "ar");
        assert_eq!(body["data"]["dir"], "rtl");
        assert!(body["data"].get("navigation").is_none());
    }
}
