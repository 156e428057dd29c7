mod load_settings_service;
mod save_settings_service;
mod settings_store;

pub use load_settings_service::LoadSettingsService;
pub use save_settings_service::SaveSettingsService;
pub use settings_store::{SettingsSnapshot, SettingsStore};
