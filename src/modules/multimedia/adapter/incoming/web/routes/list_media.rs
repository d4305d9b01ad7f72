use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::multimedia::application::domain::entities::StoredMedia;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct ListMediaResponse {
    files: Vec<StoredMedia>,
}

/// List uploaded files
#[utoipa::path(
    get,
    path = "/api/admin/uploads",
    tag = "uploads",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Every stored upload", body = inline(SuccessResponse<ListMediaResponse>)),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 500, description = "Upload directory could not be read", body = ErrorResponse),
    )
)]
#[get("/api/admin/uploads")]
pub async fn list_media_handler(_admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    match data.media.list.execute().await {
        Ok(files) => ApiResponse::success(ListMediaResponse { files }),
        Err(e) => {
            error!("Failed to list uploads: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::multimedia::application::domain::entities::{MediaCategory, MediaReference};
    use crate::multimedia::application::domain::policies::upload_policy::UploadPolicy;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, token_provider};
    use crate::tests::support::media_storage_mock::InMemoryMediaStorage;

    #[actix_web::test]
    async fn test_list_uploads() {
        let storage = InMemoryMediaStorage::default();
        storage
            .insert(
                MediaReference::new(MediaCategory::Code, "1-app.js"),
                b"let a = 1;",
            )
            .await;

        let app = test::init_service(
            App::new()
                .app_data(
                    TestAppStateBuilder::default()
                        .with_media_storage(storage, UploadPolicy::default())
                        .build(),
                )
                .app_data(web::Data::new(token_provider()))
                .service(list_media_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/admin/uploads")
            .insert_header(bearer())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["files"][0]["url"], "/uploads/code/1-app.js");
        assert_eq!(body["data"]["files"][0]["sizeBytes"], 10);
        assert_eq!(body["data"]["files"][0]["category"], "code");
    }
}
