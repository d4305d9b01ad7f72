use crate::shared::api::ApiResponse;
use actix_web::web::JsonConfig;
use tracing::debug;

/// Large enough for a whole portfolio document sent in one PUT.
pub const JSON_BODY_LIMIT_BYTES: usize = 4 * 1024 * 1024;

/// Malformed or oversized JSON bodies answer with the standard envelope.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default()
        .limit(JSON_BODY_LIMIT_BYTES)
        .error_handler(|err, _req| {
            let message = err.to_string();
            debug!("Rejected JSON body: {}", message);
            actix_web::error::InternalError::from_response(
                err,
                ApiResponse::bad_request("VALIDATION_ERROR", &message),
            )
            .into()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, post, test, web, App, HttpResponse, Responder};
    use serde::Deserialize;
    use serde_json::Value;

    #[derive(Deserialize)]
    struct Echo {
        #[allow(dead_code)]
        name: String,
    }

    #[post("/echo")]
    async fn echo(_body: web::Json<Echo>) -> impl Responder {
        HttpResponse::NoContent().finish()
    }

    #[actix_web::test]
    async fn test_malformed_json_uses_envelope() {
        let app = test::init_service(App::new().app_data(custom_json_config()).service(echo)).await;

        let req = test::TestRequest::post()
            .uri("/echo")
            .insert_header(("Content-Type", "application/json"))
            .set_payload("{\"name\":")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn test_well_formed_json_passes() {
        let app = test::init_service(App::new().app_data(custom_json_config()).service(echo)).await;

        let req = test::TestRequest::post()
            .uri("/echo")
            .set_json(serde_json::json!({ "name": "ok" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    }
}
