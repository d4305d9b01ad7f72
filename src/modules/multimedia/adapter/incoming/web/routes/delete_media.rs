use actix_web::{delete, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::multimedia::application::ports::incoming::use_cases::DeleteMediaError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteMediaRequest {
    #[schema(example = "/uploads/images/1714557600000-diagram.png")]
    pub file_url: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteMediaResponse {
    #[schema(example = "File deleted successfully")]
    message: &'static str,
}

/// Delete an uploaded file
///
/// Records that still reference the file are not touched.
#[utoipa::path(
    delete,
    path = "/api/admin/uploads",
    tag = "uploads",
    security(("BearerAuth" = [])),
    request_body = DeleteMediaRequest,
    responses(
        (status = 200, description = "File removed", body = inline(SuccessResponse<DeleteMediaResponse>)),
        (status = 400, description = "Not an upload reference", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 404, description = "No such file", body = ErrorResponse),
        (status = 500, description = "File could not be removed", body = ErrorResponse),
    )
)]
#[delete("/api/admin/uploads")]
pub async fn delete_media_handler(
    _admin: AdminUser,
    req: web::Json<DeleteMediaRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let file_url = req.into_inner().file_url;
    if file_url.trim().is_empty() {
        return ApiResponse::bad_request("MISSING_FILE_URL", "No file URL provided");
    }

    match data.media.delete.execute(&file_url).await {
        Ok(()) => ApiResponse::success(DeleteMediaResponse {
            message: "File deleted successfully",
        }),
        Err(DeleteMediaError::InvalidReference(e)) => {
            ApiResponse::bad_request("INVALID_FILE_URL", &e)
        }
        Err(DeleteMediaError::NotFound(_)) => {
            ApiResponse::not_found("FILE_NOT_FOUND", "File not found")
        }
        Err(DeleteMediaError::Storage(e)) => {
            error!("Failed to delete {}: {}", file_url, e);
            ApiResponse::internal_error()
        }
    }
}
