use actix_web::{get, web, HttpResponse, Responder};
use futures::{future, stream, StreamExt};
use tracing::{debug, error};

use super::LangQuery;
use crate::modules::content::application::domain::{Experience, Project, Skill};
use crate::modules::content::application::service::CollectionSync;
use crate::modules::localization::Lang;
use crate::modules::site::application::domain::{Presentable, SiteView};
use crate::modules::site::application::ports::incoming::use_cases::LiveAccess;
use crate::shared::api::{sse_event, sse_response, ApiResponse};
use crate::AppState;

/// Live view of one public collection as Server-Sent Events: one `data:`
/// frame of resolved, ordered records per snapshot. The store subscription
/// is released when the client goes away.
///
/// In maintenance mode the stream is a single maintenance frame and no
/// subscription is opened. A section hidden from the navigation is 404.
#[get("/api/public/{collection}/stream")]
pub async fn stream_collection_handler(
    path: web::Path<String>,
    query: web::Query<LangQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let requested = query.requested();

    match path.as_str() {
        "projects" => stream_records::<Project>(&data, requested).await,
        "experiences" => stream_records::<Experience>(&data, requested).await,
        "skills" => stream_records::<Skill>(&data, requested).await,
        other => ApiResponse::not_found(
            "UNKNOWN_COLLECTION",
            &format!("No public collection named '{}'", other),
        ),
    }
}

async fn stream_records<R: Presentable>(
    data: &AppState,
    requested: Option<Lang>,
) -> HttpResponse {
    let lang = match data.public_site.live_access(requested, R::SECTION).await {
        LiveAccess::Open(lang) => lang,
        LiveAccess::Maintenance(notice) => {
            debug!(collection = R::COLLECTION, "maintenance mode, stream not opened");
            let frame = sse_event(&SiteView::Maintenance(notice));
            return sse_response(stream::once(future::ready(frame)));
        }
        LiveAccess::Hidden => {
            return ApiResponse::not_found(
                "SECTION_HIDDEN",
                &format!("The {} section is not shown", R::COLLECTION),
            );
        }
    };

    let sync = match CollectionSync::<R>::open(data.documents.as_ref()).await {
        Ok(sync) => sync,
        Err(e) => {
            error!(collection = R::COLLECTION, error = %e, "live query could not be opened");
            return ApiResponse::service_unavailable(
                "STORE_UNAVAILABLE",
                "Live updates are not available right now",
            );
        }
    };
    debug!(collection = R::COLLECTION, lang = lang.code(), "public stream opened");

    let initial = stream::once(future::ready(sse_event(&R::present(&sync.current(), lang))));
    let updates = stream::unfold(sync, move |mut sync| async move {
        let records = sync.changed().await?;
        Some((sse_event(&R::present(&records, lang)), sync))
    });

    sse_response(initial.chain(updates))
}
