//! Mail-compose fallback used when no email service is configured
//!
//! Opens a pre-filled message in the user's mail client. Whether the user
//! actually sends it cannot be observed, so the attempt is reported as a
//! success once the compose action has been triggered.

use super::traits::{DeliveryAdapter, DeliveryChannel, DeliveryError};
use crate::state::SubmissionPayload;
use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::io;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

/// Characters left as-is by `encodeURIComponent`; everything else is escaped
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Build the `mailto:` URI for a payload
pub fn mailto_uri(payload: &SubmissionPayload) -> String {
    let subject = format!("New Contact Form Submission from {}", payload.name);
    let body = format!(
        "Name: {}\nEmail: {}\nPhone: {}\n\nMessage:\n{}",
        payload.name, payload.email, payload.phone, payload.message
    );

    format!(
        "mailto:{}?subject={}&body={}",
        payload.recipient,
        utf8_percent_encode(&subject, URI_COMPONENT),
        utf8_percent_encode(&body, URI_COMPONENT)
    )
}

/// Hands a URI to whatever handles it on this machine
#[cfg_attr(test, mockall::automock)]
pub trait ComposeLauncher: Send + Sync {
    fn launch(&self, uri: &str) -> io::Result<()>;
}

/// Launcher backed by the platform URL opener
pub struct SystemLauncher;

impl SystemLauncher {
    fn command(uri: &str) -> Command {
        let (program, args) = crate::platform::URL_OPENER;
        let mut command = Command::new(program);
        command
            .args(args)
            .arg(uri)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        command
    }
}

impl ComposeLauncher for SystemLauncher {
    /// Must run inside the tokio runtime; the dropped child is reaped there
    fn launch(&self, uri: &str) -> io::Result<()> {
        Self::command(uri).spawn().map(|_| ())
    }
}

/// Delivery through the user's own mail client
pub struct MailtoFallback {
    launcher: Box<dyn ComposeLauncher>,
    delay: Duration,
}

impl MailtoFallback {
    pub fn new(launcher: Box<dyn ComposeLauncher>, delay: Duration) -> Self {
        Self { launcher, delay }
    }
}

#[async_trait]
impl DeliveryAdapter for MailtoFallback {
    fn channel(&self) -> DeliveryChannel {
        DeliveryChannel::MailCompose
    }

    async fn send(&self, payload: &SubmissionPayload) -> Result<(), DeliveryError> {
        let uri = mailto_uri(payload);
        if let Err(e) = self.launcher.launch(&uri) {
            tracing::warn!("Failed to open mail client: {}", e);
        } else {
            tracing::info!("Opened mail compose for {}", payload.recipient);
        }

        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}
