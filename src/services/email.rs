use reqwest::Client;
use serde::Serialize;

use crate::config::RelayConfig;
use crate::models::ContactSubmission;
use crate::relay::{EmailRelay, RelayError};

/// EmailJS REST relay
pub struct EmailJs {
    client: Client,
    config: RelayConfig,
}

#[derive(Debug, Serialize, PartialEq)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
    template_params: &'a ContactSubmission,
}

impl EmailJs {
    pub fn new(config: RelayConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &RelayConfig {
        &self.config
    }

    fn request<'a>(&'a self, submission: &'a ContactSubmission) -> SendRequest<'a> {
        SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            access_token: self.config.private_key.as_deref(),
            template_params: submission,
        }
    }
}

impl EmailRelay for EmailJs {
    async fn send(&self, submission: ContactSubmission) -> Result<(), RelayError> {
        if self.config.public_key.is_empty() {
            // Log but don't fail in development
            tracing::info!(
                from = %submission.email,
                "email relay disabled, message from {} not sent",
                submission.name
            );
            return Ok(());
        }

        let res = self
            .client
            .post(&self.config.api_url)
            .json(&self.request(&submission))
            .send()
            .await
            .map_err(|e| RelayError::Transport(e.to_string()))?;

        let status = res.status();
        if status.is_success() {
            tracing::debug!(service = %self.config.service_id, "email relay accepted message");
            Ok(())
        } else {
            Err(RelayError::Rejected {
                status: status.as_u16(),
                body: res.text().await.unwrap_or_default(),
            })
        }
    }
}
