use actix_web::HttpResponse;
use serde_json::Value;
use tracing::{error, warn};

use crate::portfolio::application::domain::content_repository::ContentError;
use crate::portfolio::application::domain::edit_session::EditSessionError;
use crate::portfolio::application::domain::item::{Item, ItemKind};
use crate::shared::api::ApiResponse;

pub(super) fn parse_kind(raw: &str) -> Result<ItemKind, HttpResponse> {
    raw.parse::<ItemKind>().map_err(|e| {
        warn!("Rejected item kind: {}", raw);
        ApiResponse::bad_request("UNKNOWN_ITEM_KIND", &e.to_string())
    })
}

/// A record posted by the admin client, parsed as the kind named in the path.
pub(super) fn parse_item(kind: ItemKind, value: Value) -> Result<Item, HttpResponse> {
    Item::from_value(kind, value).map_err(|e| {
        ApiResponse::bad_request(
            "VALIDATION_ERROR",
            &format!("Invalid {} record: {}", kind, e),
        )
    })
}

pub(super) fn content_error_response(err: &ContentError) -> HttpResponse {
    let message = err.to_string();
    match err {
        ContentError::UnknownItemKind(_) => ApiResponse::bad_request("UNKNOWN_ITEM_KIND", &message),
        ContentError::OrphanSkillReference(_) => {
            ApiResponse::not_found("SKILL_CATEGORY_NOT_FOUND", &message)
        }
        ContentError::NotFound { .. } => ApiResponse::not_found("ITEM_NOT_FOUND", &message),
        ContentError::Validation(_) => ApiResponse::bad_request("VALIDATION_ERROR", &message),
        ContentError::UnknownListField { .. } => {
            ApiResponse::bad_request("UNKNOWN_LIST_FIELD", &message)
        }
        ContentError::AttachmentsNotSupported(_) => {
            ApiResponse::bad_request("ATTACHMENTS_NOT_SUPPORTED", &message)
        }
    }
}

pub(super) fn session_error_response(err: &EditSessionError) -> HttpResponse {
    match err {
        EditSessionError::Content(inner) => content_error_response(inner),
        EditSessionError::NoDraft => ApiResponse::bad_request("NO_DRAFT", &err.to_string()),
    }
}

pub(super) fn persistence_error_response(context: &str, message: &str) -> HttpResponse {
    error!("Persistence error while {}: {}", context, message);
    ApiResponse::persistence_error()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use serde_json::json;

    use crate::portfolio::application::domain::validation::ValidationError;

    #[test]
    fn unknown_kind_is_bad_request() {
        let resp = parse_kind("blogPost").unwrap_err();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            parse_kind("skillCategory").unwrap(),
            ItemKind::SkillCategory
        );
    }

    #[test]
    fn malformed_record_is_bad_request() {
        let resp = parse_item(ItemKind::Skill, json!({ "id": 7 })).unwrap_err();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn content_errors_map_to_status() {
        let cases = [
            (
                ContentError::OrphanSkillReference("nope".to_string()),
                StatusCode::NOT_FOUND,
            ),
            (
                ContentError::NotFound {
                    kind: ItemKind::Award,
                    id: "a1".to_string(),
                },
                StatusCode::NOT_FOUND,
            ),
            (
                ContentError::Validation(ValidationError::RatingOutOfRange {
                    testimonial_id: "t1".to_string(),
                    rating: 9,
                }),
                StatusCode::BAD_REQUEST,
            ),
            (
                ContentError::UnknownListField {
                    kind: ItemKind::Award,
                    field: "tags".to_string(),
                },
                StatusCode::BAD_REQUEST,
            ),
            (
                ContentError::AttachmentsNotSupported(ItemKind::Skill),
                StatusCode::BAD_REQUEST,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(content_error_response(&err).status(), status, "{err}");
        }
    }

    #[test]
    fn session_error_unwraps_content_error() {
        let err = EditSessionError::Content(ContentError::NotFound {
            kind: ItemKind::Project,
            id: "p1".to_string(),
        });
        assert_eq!(session_error_response(&err).status(), StatusCode::NOT_FOUND);
    }
}
