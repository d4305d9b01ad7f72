use actix_web::{http::header, post, web, HttpRequest, HttpResponse, Responder};
use futures::StreamExt;
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::IntoParams;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::multimedia::application::domain::policies::upload_policy::{UploadError, UploadPolicy};
use crate::multimedia::application::ports::incoming::use_cases::{
    UploadMediaCommand, UploadMediaError, UploadedMedia,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct UploadQuery {
    /// `image` (default), `document` or `code`
    #[param(example = "image")]
    pub file_type: Option<String>,

    /// Original file name, without any path
    #[param(example = "diagram.png")]
    pub file_name: String,
}

fn declared_mime(req: &HttpRequest) -> String {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|v| v.trim().to_string())
        .unwrap_or_default()
}

fn too_large(err: &UploadError) -> HttpResponse {
    ApiResponse::payload_too_large("FILE_TOO_LARGE", &err.to_string())
}

/// Read the body, stopping as soon as it passes the size ceiling.
async fn read_limited(
    mut payload: web::Payload,
    policy: &UploadPolicy,
) -> Result<Vec<u8>, HttpResponse> {
    let mut body = Vec::new();
    while let Some(chunk) = payload.next().await {
        let chunk = chunk.map_err(|e| {
            warn!("Upload body could not be read: {}", e);
            ApiResponse::bad_request("INVALID_PAYLOAD", "Upload body could not be read")
        })?;

        let total = (body.len() + chunk.len()) as u64;
        policy.check_size(total).map_err(|e| too_large(&e))?;
        body.extend_from_slice(&chunk);
    }
    Ok(body)
}

fn rejected_response(err: &UploadError) -> HttpResponse {
    let message = err.to_string();
    match err {
        UploadError::PayloadTooLarge { .. } => too_large(err),
        UploadError::UnsupportedType { .. } => {
            ApiResponse::unsupported_media_type("UNSUPPORTED_FILE_TYPE", &message)
        }
        UploadError::UnsupportedKind(_) => {
            ApiResponse::bad_request("UNSUPPORTED_FILE_KIND", &message)
        }
        UploadError::InvalidFileName => ApiResponse::bad_request("INVALID_FILE_NAME", &message),
        UploadError::EmptyPayload => ApiResponse::bad_request("EMPTY_FILE", &message),
    }
}

/// Upload a file
///
/// The raw file is the request body and `Content-Type` is its declared MIME type.
/// Images go to `/uploads/images`, documents and code to their own folders.
#[utoipa::path(
    post,
    path = "/api/admin/uploads",
    tag = "uploads",
    security(("BearerAuth" = [])),
    params(UploadQuery),
    request_body(content = Vec<u8>, content_type = "application/octet-stream"),
    responses(
        (
            status = 200,
            description = "Stored file reference and attachment metadata",
            body = inline(SuccessResponse<UploadedMedia>)
        ),
        (status = 400, description = "Invalid file name, kind or empty body", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 413, description = "File larger than the upload ceiling", body = ErrorResponse),
        (status = 415, description = "MIME type not allowed for the declared kind", body = ErrorResponse),
        (status = 500, description = "File could not be written", body = ErrorResponse),
    )
)]
#[post("/api/admin/uploads")]
pub async fn upload_media_handler(
    _admin: AdminUser,
    req: HttpRequest,
    query: web::Query<UploadQuery>,
    payload: web::Payload,
    data: web::Data<AppState>,
) -> impl Responder {
    let policy = &data.media.policy;

    // Early refusal when the client announces the size.
    let announced = req
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok());
    if let Some(Err(e)) = announced.map(|len| policy.check_size(len)) {
        return too_large(&e);
    }

    let bytes = match read_limited(payload, policy).await {
        Ok(bytes) => bytes,
        Err(resp) => return resp,
    };

    let UploadQuery {
        file_type,
        file_name,
    } = query.into_inner();
    let command = UploadMediaCommand {
        declared_kind: file_type.unwrap_or_else(|| "image".to_string()),
        file_name,
        mime_type: declared_mime(&req),
        bytes,
    };

    match data.media.upload.execute(command).await {
        Ok(uploaded) => {
            info!(url = %uploaded.file_url, "Upload accepted");
            ApiResponse::success(uploaded)
        }
        Err(UploadMediaError::Rejected(e)) => {
            warn!("Upload rejected: {}", e);
            rejected_response(&e)
        }
        Err(UploadMediaError::Storage(e)) => {
            error!("Upload could not be stored: {}", e);
            ApiResponse::internal_error()
        }
    }
}
