use actix_web::{post, web, Responder};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::portfolio::application::domain::content_repository::Direction;
use crate::portfolio::application::domain::entities::PortfolioDocument;
use crate::portfolio::application::ports::incoming::use_cases::ReorderItemError;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::error_mapping::{content_error_response, parse_kind, persistence_error_response};

#[derive(Debug, Deserialize, ToSchema)]
pub struct MoveItemRequest {
    pub direction: Direction,
}

/// Move a record one place up or down
///
/// Only projects, experiences and timeline events can be moved. Moving past
/// either end is a no-op. The stored order is re-sorted newest first on save.
#[utoipa::path(
    post,
    path = "/api/admin/portfolio/items/{kind}/{id}/move",
    tag = "portfolio-admin",
    security(("BearerAuth" = [])),
    params(
        ("kind" = String, Path, description = "`project`, `experience` or `timeline`"),
        ("id" = String, Path, description = "Record id"),
    ),
    request_body = MoveItemRequest,
    responses(
        (status = 200, description = "Document as stored", body = inline(SuccessResponse<PortfolioDocument>)),
        (status = 400, description = "Kind cannot be reordered", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 500, description = "Store could not be written", body = ErrorResponse),
    )
)]
#[post("/api/admin/portfolio/items/{kind}/{id}/move")]
pub async fn reorder_item_handler(
    _admin: AdminUser,
    path: web::Path<(String, String)>,
    req: web::Json<MoveItemRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (kind, id) = path.into_inner();
    let kind = match parse_kind(&kind) {
        Ok(kind) => kind,
        Err(resp) => return resp,
    };

    match data
        .portfolio
        .reorder_item
        .execute(kind, id, req.into_inner().direction)
        .await
    {
        Ok(document) => ApiResponse::success(document),
        Err(ReorderItemError::Content(e)) => content_error_response(&e),
        Err(ReorderItemError::Persistence(e)) => persistence_error_response("moving item", &e),
    }
}
