use actix_web::{delete, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::portfolio::application::domain::entities::PortfolioDocument;
use crate::portfolio::application::ports::incoming::use_cases::RemoveItemError;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::error_mapping::{parse_kind, persistence_error_response};
use super::ParentQuery;

/// Delete a record
///
/// Removing a skill category removes its skills. Removing an id that does not
/// exist leaves the document unchanged.
#[utoipa::path(
    delete,
    path = "/api/admin/portfolio/items/{kind}/{id}",
    tag = "portfolio-admin",
    security(("BearerAuth" = [])),
    params(
        ("kind" = String, Path, description = "Item kind"),
        ("id" = String, Path, description = "Record id"),
        ParentQuery,
    ),
    responses(
        (status = 200, description = "Document as stored", body = inline(SuccessResponse<PortfolioDocument>)),
        (status = 400, description = "Unknown item kind", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 500, description = "Store could not be written", body = ErrorResponse),
    )
)]
#[delete("/api/admin/portfolio/items/{kind}/{id}")]
pub async fn remove_item_handler(
    _admin: AdminUser,
    path: web::Path<(String, String)>,
    query: web::Query<ParentQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (kind, id) = path.into_inner();
    let kind = match parse_kind(&kind) {
        Ok(kind) => kind,
        Err(resp) => return resp,
    };

    match data
        .portfolio
        .remove_item
        .execute(kind, id, query.into_inner().parent_id)
        .await
    {
        Ok(document) => ApiResponse::success(document),
        Err(RemoveItemError::Persistence(e)) => persistence_error_response("removing item", &e),
    }
}
