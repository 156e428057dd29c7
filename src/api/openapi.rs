use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::modules::auth::adapter::incoming::web::routes::{LoginRequestDto, LogoutResponseBody};
use crate::modules::auth::application::domain::entities::SessionInfo;
use crate::modules::auth::application::ports::incoming::SignedIn;
use crate::modules::outreach::adapter::incoming::web::routes::{
    ContactSentBody, IdeaRequestDto, PlanBody,
};
use crate::modules::outreach::application::domain::ContactMessage;
use crate::modules::settings::application::domain::SettingsDocId;
use crate::modules::settings::application::ports::incoming::use_cases::LoadedSettings;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "Admin content management and public page model for the portfolio site",
    ),
    paths(
        crate::modules::auth::adapter::incoming::web::routes::login::login_handler,
        crate::modules::auth::adapter::incoming::web::routes::logout::logout_handler,
        crate::modules::auth::adapter::incoming::web::routes::session::session_handler,

        crate::modules::settings::adapter::incoming::web::routes::get_settings::get_settings_handler,
        crate::modules::settings::adapter::incoming::web::routes::save_settings::save_settings_handler,

        crate::modules::site::adapter::incoming::web::routes::get_site::get_site_handler,

        crate::modules::outreach::adapter::incoming::web::routes::contact::contact_handler,
        crate::modules::outreach::adapter::incoming::web::routes::ideas::ideas_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,

            LoginRequestDto,
            SignedIn,
            SessionInfo,
            LogoutResponseBody,

            SettingsDocId,
            LoadedSettings,

            ContactMessage,
            ContactSentBody,
            IdeaRequestDto,
            PlanBody,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Admin sign-in and sessions"),
        (name = "settings", description = "Site settings documents"),
        (name = "public", description = "Unauthenticated site endpoints"),
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
                        .description(Some("Access token from /api/auth/login"))
                        .build(),
                ),
            )
        }
    }
}
