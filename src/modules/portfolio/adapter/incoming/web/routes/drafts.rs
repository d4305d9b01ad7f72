use actix_web::{delete, post, web, HttpResponse, Responder};
use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::portfolio::application::domain::entities::FileAttachment;
use crate::portfolio::application::ports::incoming::use_cases::{DraftEdit, EditDraftError};
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::error_mapping::{parse_item, parse_kind, session_error_response};
use super::ParentQuery;

//
// ──────────────────────────────────────────────────────────
// Request DTOs
// ──────────────────────────────────────────────────────────
//

/// A draft kept by the admin client between requests.
#[derive(Debug, Deserialize, ToSchema)]
pub struct DraftRequest {
    #[schema(value_type = Object)]
    pub draft: Value,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ListValueRequest {
    #[schema(value_type = Object)]
    pub draft: Value,

    /// Trimmed before it is appended; blank values are ignored
    #[schema(example = "Rust")]
    pub value: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AttachFileRequest {
    #[schema(value_type = Object)]
    pub draft: Value,

    pub file: FileAttachment,
}

async fn apply_edit(
    data: &AppState,
    raw_kind: &str,
    draft: Value,
    edit: DraftEdit,
) -> HttpResponse {
    let kind = match parse_kind(raw_kind) {
        Ok(kind) => kind,
        Err(resp) => return resp,
    };
    let draft = match parse_item(kind, draft) {
        Ok(item) => item,
        Err(resp) => return resp,
    };

    match data.portfolio.edit_draft.execute(draft, edit).await {
        Ok(edited) => ApiResponse::success(edited),
        Err(EditDraftError::Session(e)) => session_error_response(&e),
    }
}

//
// ──────────────────────────────────────────────────────────
// Handlers
// ──────────────────────────────────────────────────────────
//

/// Start a new draft
///
/// Returns a blank record of the requested kind with a fresh id. Nothing is stored.
#[utoipa::path(
    post,
    path = "/api/admin/portfolio/drafts/{kind}",
    tag = "portfolio-admin",
    security(("BearerAuth" = [])),
    params(
        ("kind" = String, Path, description = "Item kind, e.g. `project` or `skillCategory`"),
        ParentQuery,
    ),
    responses(
        (status = 200, description = "Blank draft of the requested kind"),
        (status = 400, description = "Unknown item kind", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
    )
)]
#[post("/api/admin/portfolio/drafts/{kind}")]
pub async fn create_draft_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    query: web::Query<ParentQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let kind = match parse_kind(&path.into_inner()) {
        Ok(kind) => kind,
        Err(resp) => return resp,
    };

    let draft = data
        .portfolio
        .create_draft
        .execute(kind, query.into_inner().parent_id)
        .await;
    ApiResponse::success(draft)
}

/// Append a value to a list field of a draft
#[utoipa::path(
    post,
    path = "/api/admin/portfolio/drafts/{kind}/lists/{field}",
    tag = "portfolio-admin",
    security(("BearerAuth" = [])),
    params(
        ("kind" = String, Path, description = "Item kind"),
        ("field" = String, Path, description = "List field, e.g. `technologies`"),
    ),
    request_body = ListValueRequest,
    responses(
        (status = 200, description = "Edited draft"),
        (status = 400, description = "Unknown kind or list field", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
    )
)]
#[post("/api/admin/portfolio/drafts/{kind}/lists/{field}")]
pub async fn append_list_value_handler(
    _admin: AdminUser,
    path: web::Path<(String, String)>,
    req: web::Json<ListValueRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (kind, field) = path.into_inner();
    let ListValueRequest { draft, value } = req.into_inner();

    apply_edit(
        &data,
        &kind,
        draft,
        DraftEdit::AppendToList { field, value },
    )
    .await
}

/// Remove one entry from a list field of a draft
#[utoipa::path(
    delete,
    path = "/api/admin/portfolio/drafts/{kind}/lists/{field}/{index}",
    tag = "portfolio-admin",
    security(("BearerAuth" = [])),
    params(
        ("kind" = String, Path, description = "Item kind"),
        ("field" = String, Path, description = "List field"),
        ("index" = usize, Path, description = "Zero-based entry index; out of range is a no-op"),
    ),
    request_body = DraftRequest,
    responses(
        (status = 200, description = "Edited draft"),
        (status = 400, description = "Unknown kind or list field", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
    )
)]
#[delete("/api/admin/portfolio/drafts/{kind}/lists/{field}/{index}")]
pub async fn remove_list_value_handler(
    _admin: AdminUser,
    path: web::Path<(String, String, usize)>,
    req: web::Json<DraftRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (kind, field, index) = path.into_inner();

    apply_edit(
        &data,
        &kind,
        req.into_inner().draft,
        DraftEdit::RemoveFromList { field, index },
    )
    .await
}

/// Attach an uploaded file to a draft
#[utoipa::path(
    post,
    path = "/api/admin/portfolio/drafts/{kind}/files",
    tag = "portfolio-admin",
    security(("BearerAuth" = [])),
    params(("kind" = String, Path, description = "Item kind")),
    request_body = AttachFileRequest,
    responses(
        (status = 200, description = "Edited draft"),
        (status = 400, description = "Kind does not carry attachments", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
    )
)]
#[post("/api/admin/portfolio/drafts/{kind}/files")]
pub async fn attach_file_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    req: web::Json<AttachFileRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let AttachFileRequest { draft, file } = req.into_inner();

    apply_edit(
        &data,
        &path.into_inner(),
        draft,
        DraftEdit::AttachFile(file),
    )
    .await
}

/// Detach a file from a draft
///
/// Only the reference is dropped; the stored file is deleted separately.
#[utoipa::path(
    delete,
    path = "/api/admin/portfolio/drafts/{kind}/files/{index}",
    tag = "portfolio-admin",
    security(("BearerAuth" = [])),
    params(
        ("kind" = String, Path, description = "Item kind"),
        ("index" = usize, Path, description = "Zero-based attachment index"),
    ),
    request_body = DraftRequest,
    responses(
        (status = 200, description = "Edited draft"),
        (status = 400, description = "Kind does not carry attachments", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
    )
)]
#[delete("/api/admin/portfolio/drafts/{kind}/files/{index}")]
pub async fn detach_file_handler(
    _admin: AdminUser,
    path: web::Path<(String, usize)>,
    req: web::Json<DraftRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (kind, index) = path.into_inner();

    apply_edit(
        &data,
        &kind,
        req.into_inner().draft,
        DraftEdit::DetachFile { index },
    )
    .await
}
