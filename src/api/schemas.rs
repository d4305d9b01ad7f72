//! OpenAPI shapes of the response envelope. Handlers build the body through
//! `shared::api::ApiResponse`; these types only describe it.
use serde::Serialize;
use utoipa::ToSchema;

/// `success: true` with the route's payload under `data`
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    #[schema(example = true)]
    pub success: bool,
    pub data: T,
}

/// `success: false` with a machine-readable code and a message
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Stable code, e.g. `VALIDATION_ERROR`, `ITEM_NOT_FOUND`, `PERSISTENCE_ERROR`
    #[schema(example = "ITEM_NOT_FOUND")]
    pub code: String,

    #[schema(example = "award not found: a1")]
    pub message: String,
}
