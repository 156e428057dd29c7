use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::future::{ready, Ready};

use crate::modules::auth::application::domain::entities::SessionInfo;
use crate::modules::auth::application::ports::incoming::IdentityError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// A request carrying a live admin bearer token.
///
/// Adding this extractor to a handler is what makes the route admin-only.
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub session: SessionInfo,
    pub token: String,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AdminSession {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = match req.app_data::<web::Data<AppState>>() {
            Some(state) => state,
            None => {
                tracing::error!("AppState missing from request; cannot authorize");
                return ready(Err(create_api_error(ApiResponse::internal_error())));
            }
        };

        let token = match extract_token_from_header(req) {
            Some(t) => t,
            None => {
                return ready(Err(create_api_error(ApiResponse::unauthorized(
                    "MISSING_AUTH_HEADER",
                    "Missing or invalid authorization header",
                ))));
            }
        };

        match state.identity.authorize(&token) {
            Ok(session) => ready(Ok(AdminSession { session, token })),
            Err(IdentityError::TokenExpired) => ready(Err(create_api_error(
                ApiResponse::unauthorized("TOKEN_EXPIRED", "Session has expired"),
            ))),
            Err(IdentityError::Revoked) => ready(Err(create_api_error(ApiResponse::unauthorized(
                "TOKEN_REVOKED",
                "Session has been signed out",
            )))),
            Err(IdentityError::Internal(msg)) => {
                tracing::error!("Identity provider failure during authorization: {}", msg);
                ready(Err(create_api_error(ApiResponse::internal_error())))
            }
            Err(_) => ready(Err(create_api_error(ApiResponse::unauthorized(
                "INVALID_TOKEN",
                "Invalid or expired token",
            )))),
        }
    }
}

pub fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
