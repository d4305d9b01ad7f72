use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use chrono::{DateTime, TimeZone, Utc};
use std::{
    future::{ready, Ready},
    sync::Arc,
};
use tracing::debug;

use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::shared::api::ApiResponse;

/// The authenticated admin. Taking this as a handler argument gates the
/// route behind a valid session token.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub username: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AdminUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token_provider = match req.app_data::<web::Data<Arc<dyn TokenProvider + Send + Sync>>>()
        {
            Some(provider) => provider,
            None => {
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

        match token_provider.verify_token(&token) {
            Ok(claims) => ready(Ok(AdminUser {
                username: claims.sub,
                issued_at: Utc
                    .timestamp_opt(claims.iat, 0)
                    .single()
                    .unwrap_or_default(),
                expires_at: Utc
                    .timestamp_opt(claims.exp, 0)
                    .single()
                    .unwrap_or_default(),
            })),
            Err(e) => {
                debug!("Rejected session token: {}", e);
                ready(Err(create_api_error(ApiResponse::unauthorized(
                    "INVALID_TOKEN",
                    "Invalid or expired token",
                ))))
            }
        }
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{get, http::StatusCode, test, App, HttpResponse, Responder};
    use serde_json::Value;

    use crate::tests::support::auth_helper::{admin_token, token_provider};

    #[get("/gated")]
    async fn gated(admin: AdminUser) -> impl Responder {
        HttpResponse::Ok().body(admin.username)
    }

    #[actix_web::test]
    async fn test_valid_token_passes() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(token_provider()))
                .service(gated),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/gated")
            .insert_header(("Authorization", format!("Bearer {}", admin_token())))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        assert_eq!(body, "admin");
    }

    #[actix_web::test]
    async fn test_missing_header_is_unauthorized() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(token_provider()))
                .service(gated),
        )
        .await;

        let req = test::TestRequest::get().uri("/gated").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "MISSING_AUTH_HEADER");
    }

    #[actix_web::test]
    async fn test_garbage_token_is_unauthorized() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(token_provider()))
                .service(gated),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/gated")
            .insert_header(("Authorization", "Bearer nope"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_TOKEN");
    }
}
