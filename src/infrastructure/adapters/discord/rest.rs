//! Discord REST client for bulk application command registration

use async_trait::async_trait;
use reqwest::Client;

use crate::application::errors::BotError;
use crate::domain::entities::RegistrationPayload;
use crate::domain::traits::CommandRegistrar;
use crate::infrastructure::config::DEFAULT_API_BASE;

/// Registers slash commands with `PUT /applications/{id}/commands`
pub struct RestRegistrar {
    token: String,
    client: Client,
    api_base: String,
}

impl RestRegistrar {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            client: Client::new(),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Get the URL of the application's global command list
    fn commands_url(&self, client_id: &str) -> String {
        format!(
            "{}/applications/{}/commands",
            self.api_base.trim_end_matches('/'),
            client_id
        )
    }
}

#[async_trait]
impl CommandRegistrar for RestRegistrar {
    async fn register(&self, client_id: &str, batch: &[RegistrationPayload]) -> Result<(), BotError> {
        let url = self.commands_url(client_id);

        let response = self.client
            .put(&url)
            .header("Authorization", format!("Bot {}", self.token))
            .json(batch)
            .send()
            .await
            .map_err(|e| BotError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error = response.text().await.unwrap_or_default();
            return Err(BotError::Network(format!(
                "Failed to register commands ({}): {}",
                status, error
            )));
        }

        tracing::debug!("Registered {} application commands for {}", batch.len(), client_id);
        Ok(())
    }
}
