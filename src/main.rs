pub mod api;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::auth;
pub use modules::multimedia;
pub use modules::portfolio;

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::admin_account_config::AdminAccountConfig;
use crate::auth::adapter::outgoing::security::Argon2Hasher;
use crate::auth::adapter::outgoing::session_token::{SessionTokenConfig, SessionTokenService};
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider};
use crate::auth::application::use_cases::login_admin::{ILoginAdminUseCase, LoginAdminUseCase};
use crate::multimedia::adapter::outgoing::local_storage::{
    LocalMediaStorage, LocalMediaStorageConfig,
};
use crate::multimedia::application::domain::policies::upload_policy::UploadPolicy;
use crate::multimedia::application::media_use_cases::MultimediaUseCases;
use crate::portfolio::adapter::outgoing::{DocumentStoreConfig, JsonFileDocumentStore};
use crate::portfolio::application::portfolio_use_cases::PortfolioUseCases;
use crate::shared::api::custom_json_config;
use crate::shared::config::{load_dotenv, parse_or, required};

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub portfolio: PortfolioUseCases,
    pub media: MultimediaUseCases,
    pub login_admin_use_case: Arc<dyn ILoginAdminUseCase + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    load_dotenv();

    // Load Env. variables
    let host = required("HOST")?;
    let port: u16 = parse_or("PORT", 8080)?;
    let server_url = format!("{host}:{port}");

    // Admin identity and session tokens
    let password_hasher = Argon2Hasher::from_env();
    let admin = AdminAccountConfig::from_env()?
        .into_account(&password_hasher)
        .await
        .context("preparing admin password")?;
    let session_tokens =
        SessionTokenService::new(SessionTokenConfig::from_env()?, admin.username.clone());
    info!("Admin account: {}", admin.username);

    let password_hasher_arc: Arc<dyn PasswordHasher + Send + Sync> = Arc::new(password_hasher);
    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(session_tokens);
    let login_admin_use_case =
        LoginAdminUseCase::new(admin, password_hasher_arc, Arc::clone(&token_provider_arc));

    // Portfolio document
    let store_config = DocumentStoreConfig::from_env();
    info!("Portfolio document: {}", store_config.data_file.display());
    let portfolio = PortfolioUseCases::from_store(JsonFileDocumentStore::new(store_config));

    // Uploads
    let upload_policy = UploadPolicy::from_env()?;
    let media_config = LocalMediaStorageConfig::from_env();
    info!(
        "Uploads stored under {} (max {} bytes)",
        media_config.root.display(),
        upload_policy.max_file_size_bytes
    );
    let media =
        MultimediaUseCases::from_storage(LocalMediaStorage::new(media_config), upload_policy);

    let state = AppState {
        portfolio,
        media,
        login_admin_use_case: Arc::new(login_admin_use_case),
    };

    println!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(custom_json_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .configure(init_routes)
    })
    .bind(&server_url)
    .with_context(|| format!("binding {server_url}"))?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::login_admin_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::session_handler);
    // Portfolio
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_portfolio_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_admin_portfolio_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::replace_portfolio_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::create_draft_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::append_list_value_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::remove_list_value_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::attach_file_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::detach_file_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::open_item_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::commit_item_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::remove_item_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::reorder_item_handler);
    // Uploads
    cfg.service(crate::multimedia::adapter::incoming::web::routes::upload_media_handler);
    cfg.service(crate::multimedia::adapter::incoming::web::routes::list_media_handler);
    cfg.service(crate::multimedia::adapter::incoming::web::routes::delete_media_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
