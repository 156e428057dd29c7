use actix_web::{get, web, Responder};
use futures::{future, stream, StreamExt};
use std::sync::Arc;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminSession;
use crate::modules::auth::application::domain::entities::SessionInfo;
use crate::shared::api::{sse_event, sse_response, ApiResponse};
use crate::AppState;

/// Current admin session
#[utoipa::path(
    get,
    path = "/api/auth/session",
    tag = "auth",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Session of the bearer token", body = inline(SuccessResponse<SessionInfo>)),
        (status = 401, description = "Missing, expired or revoked token", body = ErrorResponse),
    )
)]
#[get("/api/auth/session")]
pub async fn session_handler(admin: AdminSession) -> impl Responder {
    ApiResponse::success(admin.session)
}

/// Pushes the caller's session whenever the admin session state changes,
/// then `null` once it has been signed out, after which the stream ends.
#[get("/api/auth/session/stream")]
pub async fn session_stream_handler(
    admin: AdminSession,
    data: web::Data<AppState>,
) -> impl Responder {
    let identity = Arc::clone(&data.identity);
    let changes = identity.sessions();
    let token = admin.token;

    let initial = stream::once(future::ready(sse_event(&Some(admin.session))));
    let updates = stream::unfold(Some(changes), move |state| {
        let identity = Arc::clone(&identity);
        let token = token.clone();
        async move {
            let mut changes = state?;
            changes.changed().await.ok()?;

            let current: Option<SessionInfo> = identity.authorize(&token).ok();
            let next = current.is_some().then_some(changes);
            Some((sse_event(&current), next))
        }
    });

    sse_response(initial.chain(updates))
}
