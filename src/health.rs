use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::warn;

use crate::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReadinessResponse {
    status: &'static str,
    document_store: &'static str,
    media_storage: &'static str,
}

fn probe<T, E: std::fmt::Display>(name: &str, result: Result<T, E>) -> &'static str {
    match result {
        Ok(_) => "ok",
        Err(e) => {
            warn!("Readiness check failed for {}: {}", name, e);
            "unhealthy"
        }
    }
}

/// LIVENESS PROBE
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Portfolio document can be read
/// - Upload directory can be listed
#[get("/ready")]
pub async fn readiness(data: web::Data<AppState>) -> impl Responder {
    let document_store = probe("document store", data.portfolio.get.execute().await);
    let media_storage = probe("media storage", data.media.list.execute().await);

    if document_store == "ok" && media_storage == "ok" {
        HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            document_store,
            media_storage,
        })
    } else {
        HttpResponse::ServiceUnavailable().json(ReadinessResponse {
            status: "unhealthy",
            document_store,
            media_storage,
        })
    }
}
