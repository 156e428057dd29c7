use std::sync::Arc;

use crate::modules::settings::application::ports::incoming::use_cases::{
    LoadSettingsUseCase, SaveSettingsUseCase,
};

#[derive(Clone)]
pub struct SettingsUseCases {
    pub load: Arc<dyn LoadSettingsUseCase + Send + Sync>,
    pub save: Arc<dyn SaveSettingsUseCase + Send + Sync>,
}
