use actix_web::{put, web, Responder};
use serde_json::Value;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::portfolio::application::domain::entities::PortfolioDocument;
use crate::portfolio::application::ports::incoming::use_cases::CommitItemError;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::error_mapping::{
    parse_item, parse_kind, persistence_error_response, session_error_response,
};
use super::ParentQuery;

/// Commit a draft
///
/// Inserts the record or replaces the stored record with the same id, then saves
/// the whole document. Skills go to the category named by their `category`
/// field, falling back to `parentId`.
#[utoipa::path(
    put,
    path = "/api/admin/portfolio/items/{kind}",
    tag = "portfolio-admin",
    security(("BearerAuth" = [])),
    params(
        ("kind" = String, Path, description = "Item kind"),
        ParentQuery,
    ),
    request_body(content = Object, description = "The draft record"),
    responses(
        (status = 200, description = "Document as stored", body = inline(SuccessResponse<PortfolioDocument>)),
        (status = 400, description = "Unknown kind or invalid record", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 404, description = "Skill category not found", body = ErrorResponse),
        (status = 500, description = "Store could not be written", body = ErrorResponse),
    )
)]
#[put("/api/admin/portfolio/items/{kind}")]
pub async fn commit_item_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    query: web::Query<ParentQuery>,
    req: web::Json<Value>,
    data: web::Data<AppState>,
) -> impl Responder {
    let kind = match parse_kind(&path.into_inner()) {
        Ok(kind) => kind,
        Err(resp) => return resp,
    };
    let draft = match parse_item(kind, req.into_inner()) {
        Ok(item) => item,
        Err(resp) => return resp,
    };
    match data
        .portfolio
        .commit_item
        .execute(draft, query.into_inner().parent_id)
        .await
    {
        Ok(document) => ApiResponse::success(document),
        Err(CommitItemError::Session(e)) => session_error_response(&e),
        Err(CommitItemError::Persistence(e)) => persistence_error_response("committing item", &e),
    }
}
