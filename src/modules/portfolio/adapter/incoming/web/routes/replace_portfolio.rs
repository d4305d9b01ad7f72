use actix_web::{put, web, Responder};
use tracing::info;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::portfolio::application::domain::entities::PortfolioDocument;
use crate::portfolio::application::ports::incoming::use_cases::ReplacePortfolioError;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::error_mapping::persistence_error_response;

/// Replace the whole portfolio
///
/// Validates the document and stores it in canonical order.
#[utoipa::path(
    put,
    path = "/api/admin/portfolio",
    tag = "portfolio-admin",
    security(("BearerAuth" = [])),
    request_body = PortfolioDocument,
    responses(
        (status = 200, description = "Document as stored", body = inline(SuccessResponse<PortfolioDocument>)),
        (status = 400, description = "Invalid document", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 500, description = "Store could not be written", body = ErrorResponse),
    )
)]
#[put("/api/admin/portfolio")]
pub async fn replace_portfolio_handler(
    admin: AdminUser,
    req: web::Json<PortfolioDocument>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.portfolio.replace.execute(req.into_inner()).await {
        Ok(stored) => {
            info!(admin = %admin.username, "Portfolio replaced");
            ApiResponse::success(stored)
        }
        Err(ReplacePortfolioError::Validation(e)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }
        Err(ReplacePortfolioError::Persistence(e)) => {
            persistence_error_response("replacing portfolio", &e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::shared::api::custom_json_config;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, token_provider};
    use crate::tests::support::document_store_mock::InMemoryDocumentStore;
    use crate::tests::support::fixtures::sample_document;
    use crate::tests::support::stubs::FailingDocumentStore;

    #[actix_web::test]
    async fn test_replace_stores_sorted_document() {
        let store = InMemoryDocumentStore::default();
        let app = test::init_service(
            App::new()
                .app_data(
                    TestAppStateBuilder::default()
                        .with_portfolio_store(store.clone())
                        .build(),
                )
                .app_data(web::Data::new(token_provider()))
                .service(replace_portfolio_handler),
        )
        .await;

        let mut doc = sample_document();
        doc.projects.reverse();

        let req = test::TestRequest::put()
            .uri("/api/admin/portfolio")
            .insert_header(bearer())
            .set_json(&doc)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["projects"][0]["id"], "p-2024");

        let stored = store.snapshot().await;
        assert_eq!(stored.projects[0].id, "p-2024");
        assert_eq!(stored.personal_info.name, "Ada Builder");
    }

    #[actix_web::test]
    async fn test_replace_rejects_out_of_range_skill() {
        let store = InMemoryDocumentStore::default();
        let app = test::init_service(
            App::new()
                .app_data(
                    TestAppStateBuilder::default()
                        .with_portfolio_store(store.clone())
                        .build(),
                )
                .app_data(web::Data::new(token_provider()))
                .service(replace_portfolio_handler),
        )
        .await;

        let mut doc = sample_document();
        doc.skill_categories[0].skills[0].level = 120;

        let req = test::TestRequest::put()
            .uri("/api/admin/portfolio")
            .insert_header(bearer())
            .set_json(&doc)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_ne!(store.snapshot().await.personal_info.name, "Ada Builder");
    }

    #[actix_web::test]
    async fn test_replace_malformed_json_is_validation_error() {
        let app = test::init_service(
            App::new()
                .app_data(custom_json_config())
                .app_data(TestAppStateBuilder::default().build())
                .app_data(web::Data::new(token_provider()))
                .service(replace_portfolio_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/admin/portfolio")
            .insert_header(bearer())
            .insert_header(("Content-Type", "application/json"))
            .set_payload("{ not json")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn test_replace_write_failure_is_persistence_error() {
        let app = test::init_service(
            App::new()
                .app_data(
                    TestAppStateBuilder::default()
                        .with_portfolio_store(FailingDocumentStore::read_only())
                        .build(),
                )
                .app_data(web::Data::new(token_provider()))
                .service(replace_portfolio_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/admin/portfolio")
            .insert_header(bearer())
            .set_json(sample_document())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "PERSISTENCE_ERROR");
    }
}
