//! HTTP client for the transactional email service
//!
//! The service renders a stored template with the submitted fields and mails
//! the result to the practice inbox.

use super::traits::{DeliveryAdapter, DeliveryChannel, DeliveryError};
use crate::config::EmailServiceConfig;
use crate::state::SubmissionPayload;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

/// Default API base URL
const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com";
/// Path of the send call below the base URL
const SEND_PATH: &str = "/api/v1.0/email/send";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

#[derive(Debug, Serialize)]
struct TemplateParams<'a> {
    from_name: &'a str,
    from_email: &'a str,
    phone: &'a str,
    message: &'a str,
    to_email: &'a str,
}

impl<'a> From<&'a SubmissionPayload> for TemplateParams<'a> {
    fn from(payload: &'a SubmissionPayload) -> Self {
        Self {
            from_name: &payload.name,
            from_email: &payload.email,
            phone: &payload.phone,
            message: &payload.message,
            to_email: &payload.recipient,
        }
    }
}

/// Client for the transactional email service
pub struct EmailServiceClient {
    http: reqwest::Client,
    url: String,
    service_id: String,
    template_id: String,
    public_key: String,
}

impl EmailServiceClient {
    /// Create a client from the configured credentials
    pub fn new(config: &EmailServiceConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        let base = config
            .endpoint
            .as_deref()
            .unwrap_or(DEFAULT_ENDPOINT)
            .trim_end_matches('/');

        Ok(Self {
            http,
            url: format!("{base}{SEND_PATH}"),
            service_id: config.service_id.clone(),
            template_id: config.template_id.clone(),
            public_key: config.public_key.clone(),
        })
    }
}

#[async_trait]
impl DeliveryAdapter for EmailServiceClient {
    fn channel(&self) -> DeliveryChannel {
        DeliveryChannel::EmailService
    }

    async fn send(&self, payload: &SubmissionPayload) -> Result<(), DeliveryError> {
        let body = SendRequest {
            service_id: &self.service_id,
            template_id: &self.template_id,
            user_id: &self.public_key,
            template_params: payload.into(),
        };

        let response = self
            .http
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .map_err(|e| DeliveryError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            tracing::info!("Email service accepted message from {}", payload.email);
            return Ok(());
        }

        let text = response.text().await.unwrap_or_default();
        let reason = if text.trim().is_empty() {
            status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string()
        } else {
            text.trim().to_string()
        };

        Err(DeliveryError::Rejected {
            status: status.as_u16(),
            reason,
        })
    }
}
