//! Delivery of contact form submissions

mod email_service;
mod mailto;
mod traits;

pub use email_service::EmailServiceClient;
pub use mailto::{MailtoFallback, SystemLauncher};
pub use traits::{DeliveryAdapter, DeliveryChannel, DeliveryError};

#[cfg(test)]
pub use mailto::MockComposeLauncher;
#[cfg(test)]
pub use traits::MockDeliveryAdapter;

use crate::config::SiteConfig;
use anyhow::Result;
use std::sync::Arc;

/// Pick the delivery path for this session.
///
/// A configured email service is preferred; without one the mail-compose
/// fallback is used. A missing service is not an error.
pub fn build_adapter(config: &SiteConfig) -> Result<Arc<dyn DeliveryAdapter>> {
    match &config.email_service {
        Some(service) => {
            tracing::info!("Using email service {}", service.service_id);
            Ok(Arc::new(EmailServiceClient::new(service)?))
        }
        None => {
            tracing::info!("No email service configured, using mail compose fallback");
            Ok(Arc::new(MailtoFallback::new(
                Box::new(SystemLauncher),
                config.fallback_delay(),
            )))
        }
    }
}
