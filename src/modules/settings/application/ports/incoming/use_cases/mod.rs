mod load_settings;
mod save_settings;

pub use load_settings::{LoadSettingsUseCase, LoadedSettings};
pub use save_settings::{SaveSettingsError, SaveSettingsUseCase};
