pub mod get_settings;
pub mod save_settings;

pub use get_settings::get_settings_handler;
pub use save_settings::save_settings_handler;

use crate::modules::settings::application::domain::SettingsDocId;
use crate::shared::api::ApiResponse;
use actix_web::HttpResponse;

fn parse_document_id(raw: &str) -> Result<SettingsDocId, HttpResponse> {
    SettingsDocId::parse(raw).ok_or_else(|| {
        ApiResponse::not_found(
            "UNKNOWN_SETTINGS_DOCUMENT",
            &format!("No settings document named '{}'", raw),
        )
    })
}
