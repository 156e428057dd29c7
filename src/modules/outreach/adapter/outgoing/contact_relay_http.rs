use async_trait::async_trait;
use reqwest::header::ACCEPT;

use crate::modules::outreach::application::domain::ContactMessage;
use crate::modules::outreach::application::ports::outgoing::{ContactRelay, RelayError};

/// Posts the form as JSON; any 2xx counts as delivered.
#[derive(Clone, Default)]
pub struct HttpContactRelay {
    client: reqwest::Client,
}

impl HttpContactRelay {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ContactRelay for HttpContactRelay {
    async fn relay(&self, endpoint: &str, message: &ContactMessage) -> Result<(), RelayError> {
        let response = self
            .client
            .post(endpoint)
            .header(ACCEPT, "application/json")
            .json(message)
            .send()
            .await
            .map_err(|e| RelayError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(RelayError::Rejected(status.as_u16()))
        }
    }
}
