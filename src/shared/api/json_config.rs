use crate::shared::api::ApiResponse;
use actix_web::web::JsonConfig;

/// Largest JSON body accepted by any endpoint.
pub const JSON_BODY_LIMIT: usize = 256 * 1024;

/// Rejects undecodable bodies with the standard `VALIDATION_ERROR` envelope
/// instead of actix's plain-text 400.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default()
        .limit(JSON_BODY_LIMIT)
        .error_handler(|err, _req| {
            let message = err.to_string();
            tracing::debug!("Rejected JSON body: {}", message);
            actix_web::error::InternalError::from_response(
                err,
                ApiResponse::bad_request("VALIDATION_ERROR", &message),
            )
            .into()
        })
}
