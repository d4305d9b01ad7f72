use actix_web::{get, Responder};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    #[schema(example = "admin")]
    username: String,
    issued_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

/// Current admin session
///
/// Lets the admin client check whether its stored token is still accepted.
#[utoipa::path(
    get,
    path = "/api/auth/session",
    tag = "auth",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Token is valid", body = inline(SuccessResponse<SessionResponse>)),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorResponse),
    )
)]
#[get("/api/auth/session")]
pub async fn session_handler(admin: AdminUser) -> impl Responder {
    ApiResponse::success(SessionResponse {
        username: admin.username,
        issued_at: admin.issued_at,
        expires_at: admin.expires_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App};
    use serde_json::Value;

    use crate::tests::support::auth_helper::{admin_token, token_provider};

    #[actix_web::test]
    async fn test_session_echoes_admin() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(token_provider()))
                .service(session_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/auth/session")
            .insert_header(("Authorization", format!("Bearer {}", admin_token())))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["username"], "admin");
        assert!(body["data"]["expiresAt"].is_string());
    }

    #[actix_web::test]
    async fn test_session_without_token_is_unauthorized() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(token_provider()))
                .service(session_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/auth/session")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
