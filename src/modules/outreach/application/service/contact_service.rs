use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::modules::outreach::application::domain::ContactMessage;
use crate::modules::outreach::application::ports::incoming::use_cases::{
    SendContactError, SendContactUseCase,
};
use crate::modules::outreach::application::ports::outgoing::ContactRelay;
use crate::modules::settings::application::domain::GeneralSettings;
use crate::modules::settings::application::service::SettingsStore;

pub struct ContactService<R>
where
    R: ContactRelay,
{
    relay: R,
    settings: Arc<SettingsStore>,
    fallback_endpoint: Option<String>,
}

impl<R> ContactService<R>
where
    R: ContactRelay,
{
    pub fn new(relay: R, settings: Arc<SettingsStore>, fallback_endpoint: Option<String>) -> Self {
        Self {
            relay,
            settings,
            fallback_endpoint,
        }
    }

    /// `generalSettings.formspreeUrl` when set, else the configured fallback.
    async fn endpoint(&self) -> Option<String> {
        let configured = self
            .settings
            .snapshot()
            .await
            .get::<GeneralSettings>()
            .formspree_url;

        let configured = configured.trim();
        if configured.is_empty() {
            self.fallback_endpoint.clone()
        } else {
            Some(configured.to_string())
        }
    }
}

#[async_trait]
impl<R> SendContactUseCase for ContactService<R>
where
    R: ContactRelay + Send + Sync,
{
    async fn execute(&self, message: ContactMessage) -> Result<(), SendContactError> {
        message.validate().map_err(SendContactError::Validation)?;

        let endpoint = self.endpoint().await.ok_or(SendContactError::NotConfigured)?;

        self.relay
            .relay(&endpoint, &message)
            .await
            .map_err(|e| {
                warn!(error = %e, "contact message not relayed");
                SendContactError::RelayFailed(e.to_string())
            })?;

        info!("contact message relayed");
        Ok(())
    }
}
