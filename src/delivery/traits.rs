//! Trait abstraction for message delivery to enable mocking in tests

use crate::state::SubmissionPayload;
use async_trait::async_trait;
use thiserror::Error;

/// Reasons a delivery attempt can fail
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DeliveryError {
    /// The email service could not be reached
    #[error("could not reach the email service: {0}")]
    Transport(String),
    /// The email service answered with a non-success status
    #[error("email service rejected the message ({status}): {reason}")]
    Rejected { status: u16, reason: String },
}

/// Which path a delivery adapter sends through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryChannel {
    /// Transactional email service
    EmailService,
    /// Pre-filled compose window in the user's mail client
    MailCompose,
}

/// Sends a contact form submission somewhere a human will read it
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DeliveryAdapter: Send + Sync {
    /// Path this adapter uses
    fn channel(&self) -> DeliveryChannel;

    /// Deliver the payload. Resolves once the outcome is known.
    async fn send(&self, payload: &SubmissionPayload) -> Result<(), DeliveryError>;
}
