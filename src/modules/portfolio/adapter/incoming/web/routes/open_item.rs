use actix_web::{get, web, Responder};

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::portfolio::application::ports::incoming::use_cases::OpenItemError;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::error_mapping::{content_error_response, parse_kind, persistence_error_response};
use super::ParentQuery;

/// Open a stored record for editing
///
/// Returns a copy of the record; the client edits it as a draft and commits it back.
#[utoipa::path(
    get,
    path = "/api/admin/portfolio/items/{kind}/{id}",
    tag = "portfolio-admin",
    security(("BearerAuth" = [])),
    params(
        ("kind" = String, Path, description = "Item kind"),
        ("id" = String, Path, description = "Record id"),
        ParentQuery,
    ),
    responses(
        (status = 200, description = "Copy of the stored record"),
        (status = 400, description = "Unknown item kind", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 404, description = "No record with that id", body = ErrorResponse),
        (status = 500, description = "Store could not be read", body = ErrorResponse),
    )
)]
#[get("/api/admin/portfolio/items/{kind}/{id}")]
pub async fn open_item_handler(
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
        .open_item
        .execute(kind, id, query.into_inner().parent_id)
        .await
    {
        Ok(item) => ApiResponse::success(item),
        Err(OpenItemError::Content(e)) => content_error_response(&e),
        Err(OpenItemError::Persistence(e)) => persistence_error_response("opening item", &e),
    }
}
