use actix_web::{post, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::localization::translate;
use crate::modules::outreach::application::domain::ContactMessage;
use crate::modules::outreach::application::ports::incoming::use_cases::SendContactError;
use crate::modules::site::adapter::incoming::web::routes::LangQuery;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct ContactSentBody {
    pub message: String,
}

/// Send the contact form
///
/// Relays `{name, email, message}` to the configured form endpoint.
#[utoipa::path(
    post,
    path = "/api/public/contact",
    tag = "public",
    params(LangQuery),
    request_body = ContactMessage,
    responses(
        (status = 200, description = "Relayed", body = inline(SuccessResponse<ContactSentBody>)),
        (status = 400, description = "Missing field or malformed email", body = ErrorResponse),
        (status = 502, description = "Relay rejected the message", body = ErrorResponse),
        (status = 503, description = "No relay endpoint configured", body = ErrorResponse),
    )
)]
#[post("/api/public/contact")]
pub async fn contact_handler(
    query: web::Query<LangQuery>,
    body: web::Json<ContactMessage>,
    data: web::Data<AppState>,
) -> impl Responder {
    let lang = data.public_site.active_lang(query.requested()).await;

    match data.outreach.contact.execute(body.into_inner()).await {
        Ok(()) => ApiResponse::success(ContactSentBody {
            message: translate("form_success_msg", lang).to_string(),
        }),
        Err(SendContactError::Validation(msg)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }
        Err(SendContactError::NotConfigured) => {
            error!("contact form submitted but no relay endpoint is configured");
            ApiResponse::service_unavailable(
                "RELAY_NOT_CONFIGURED",
                translate("form_error_msg", lang),
            )
        }
        Err(SendContactError::RelayFailed(_)) => {
            ApiResponse::bad_gateway("RELAY_FAILED", translate("form_error_msg", lang))
        }
    }
}
