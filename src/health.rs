use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

use crate::modules::document_store::application::ports::outgoing::DocumentStore;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    store: &'static str,
}

/// LIVENESS PROBE
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Pings the document store
#[get("/ready")]
pub async fn readiness(store: web::Data<Arc<dyn DocumentStore>>) -> impl Responder {
    match store.ping().await {
        Ok(()) => HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            store: "ok",
        }),
        Err(e) => {
            warn!(error = %e, "readiness check failed");
            HttpResponse::ServiceUnavailable().json(ReadinessResponse {
                status: "unhealthy",
                store: "unhealthy",
            })
        }
    }
}
