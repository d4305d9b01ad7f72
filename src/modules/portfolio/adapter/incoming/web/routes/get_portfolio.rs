use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::portfolio::application::domain::entities::PortfolioDocument;
use crate::portfolio::application::ports::incoming::use_cases::GetPortfolioError;
use crate::shared::api::ApiResponse;
use crate::AppState;

async fn load(data: &AppState) -> actix_web::HttpResponse {
    match data.portfolio.get.execute().await {
        Ok(document) => ApiResponse::success(document),
        Err(GetPortfolioError::Persistence(e)) => {
            error!("Failed to load portfolio: {}", e);
            ApiResponse::persistence_error()
        }
    }
}

/// Public portfolio
///
/// The document rendered by the public site.
#[utoipa::path(
    get,
    path = "/api/portfolio",
    tag = "portfolio",
    responses(
        (status = 200, description = "Current portfolio", body = inline(SuccessResponse<PortfolioDocument>)),
        (status = 500, description = "Store could not be read", body = ErrorResponse),
    )
)]
#[get("/api/portfolio")]
pub async fn get_portfolio_handler(data: web::Data<AppState>) -> impl Responder {
    load(&data).await
}

/// Admin copy of the portfolio
#[utoipa::path(
    get,
    path = "/api/admin/portfolio",
    tag = "portfolio-admin",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Editable portfolio", body = inline(SuccessResponse<PortfolioDocument>)),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 500, description = "Store could not be read", body = ErrorResponse),
    )
)]
#[get("/api/admin/portfolio")]
pub async fn get_admin_portfolio_handler(
    admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    tracing::debug!(admin = %admin.username, "Admin portfolio requested");
    load(&data).await
}
