//! Delivery: hand composed payloads to a transport.
//!
//! Retry and backoff are the transport's business; `Notifier` posts once.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};
use url::Url;

use crate::compose::MessageComposer;
use crate::error::NotifyResult;
use crate::model::RunResult;
use crate::options::{resolve_endpoint, NotifyOptions};
use crate::payload::NotificationPayload;

mod http;

pub use http::WebhookTransport;

/// Outcome of a successful post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReceipt {
    pub status: u16,
    pub body: String,
}

/// Posts a payload to an endpoint.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post(&self, url: &Url, payload: &NotificationPayload)
        -> NotifyResult<DeliveryReceipt>;
}

/// Composes and delivers notifications.
#[derive(Clone)]
pub struct Notifier {
    composer: MessageComposer,
    transport: Arc<dyn Transport>,
}

impl Notifier {
    pub fn new(composer: MessageComposer, transport: Arc<dyn Transport>) -> Self {
        Self {
            composer,
            transport,
        }
    }

    /// Compose and post. `Ok(None)` when there was nothing to send; no I/O
    /// happens in that case.
    pub async fn send(
        &self,
        options: &NotifyOptions,
        results: &[RunResult],
    ) -> NotifyResult<Option<DeliveryReceipt>> {
        let payload = match self.composer.compose_for(options, results).await? {
            Some(p) => p,
            None => {
                debug!("no notification to send");
                return Ok(None);
            }
        };

        let url = resolve_endpoint(options)?;
        let receipt = self.transport.post(&url, &payload).await?;
        info!(
            host = url.host_str().unwrap_or_default(),
            status = receipt.status,
            attachments = payload.attachments.len(),
            "notification delivered"
        );
        Ok(Some(receipt))
    }
}
