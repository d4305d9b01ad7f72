use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

// Auth
use crate::auth::adapter::incoming::web::routes::{
    LoginRequestDto, LoginResponse, SessionResponse,
};

// Portfolio
use crate::portfolio::adapter::incoming::web::routes::{
    AttachFileRequest, DraftRequest, ListValueRequest, MoveItemRequest,
};
use crate::portfolio::application::domain::content_repository::Direction;
use crate::portfolio::application::domain::entities::{
    Activity, ActivityType, Award, Competition, CompetitionStatus, Course, CourseStatus,
    Experience, FileAttachment, PersonalInfo, PortfolioDocument, Project, ProjectStatus, Skill,
    SkillCategory, Testimonial, TimelineEvent, TimelineEventType, Volunteering,
};
use crate::portfolio::application::domain::item::ItemKind;

// Uploads
use crate::multimedia::adapter::incoming::web::routes::{
    DeleteMediaRequest, DeleteMediaResponse, ListMediaResponse,
};
use crate::multimedia::application::domain::entities::{MediaCategory, StoredMedia};
use crate::multimedia::application::ports::incoming::use_cases::UploadedMedia;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio CMS API",
        version = "1.0.0",
        description = "Public read access and single-admin editing of a portfolio document",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::login_admin_handler,
        crate::auth::adapter::incoming::web::routes::session_handler,

        // Public portfolio
        crate::portfolio::adapter::incoming::web::routes::get_portfolio_handler,

        // Portfolio administration
        crate::portfolio::adapter::incoming::web::routes::get_admin_portfolio_handler,
        crate::portfolio::adapter::incoming::web::routes::replace_portfolio_handler,
        crate::portfolio::adapter::incoming::web::routes::create_draft_handler,
        crate::portfolio::adapter::incoming::web::routes::append_list_value_handler,
        crate::portfolio::adapter::incoming::web::routes::remove_list_value_handler,
        crate::portfolio::adapter::incoming::web::routes::attach_file_handler,
        crate::portfolio::adapter::incoming::web::routes::detach_file_handler,
        crate::portfolio::adapter::incoming::web::routes::open_item_handler,
        crate::portfolio::adapter::incoming::web::routes::commit_item_handler,
        crate::portfolio::adapter::incoming::web::routes::remove_item_handler,
        crate::portfolio::adapter::incoming::web::routes::reorder_item_handler,

        // Upload endpoints
        crate::multimedia::adapter::incoming::web::routes::upload_media_handler,
        crate::multimedia::adapter::incoming::web::routes::list_media_handler,
        crate::multimedia::adapter::incoming::web::routes::delete_media_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<PortfolioDocument>,
            ErrorResponse,
            ErrorDetail,

            // Auth DTOs
            LoginRequestDto,
            LoginResponse,
            SessionResponse,

            // Portfolio document
            PortfolioDocument,
            PersonalInfo,
            SkillCategory,
            Skill,
            Project,
            ProjectStatus,
            Experience,
            TimelineEvent,
            TimelineEventType,
            Course,
            CourseStatus,
            Volunteering,
            Activity,
            ActivityType,
            Competition,
            CompetitionStatus,
            Award,
            Testimonial,
            FileAttachment,
            ItemKind,

            // Editing DTOs
            DraftRequest,
            ListValueRequest,
            AttachFileRequest,
            MoveItemRequest,
            Direction,

            // Upload DTOs
            UploadedMedia,
            StoredMedia,
            MediaCategory,
            ListMediaResponse,
            DeleteMediaRequest,
            DeleteMediaResponse
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Admin sign-in"),
        (name = "portfolio", description = "Public portfolio"),
        (name = "portfolio-admin", description = "Portfolio editing"),
        (name = "uploads", description = "Uploaded media files"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Session token from /api/auth/login"))
                        .build(),
                ),
            )
        }
    }
}
