//! Webhook transport over reqwest. The only place webhook statuses are read.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use tracing::debug;
use url::Url;

use super::{DeliveryReceipt, Transport};
use crate::error::{NotifyError, NotifyResult};
use crate::options::TransportConfig;
use crate::payload::NotificationPayload;
use crate::USER_AGENT_VALUE;

/// Posts payloads as JSON to incoming webhooks.
#[derive(Debug, Clone)]
pub struct WebhookTransport {
    client: reqwest::Client,
}

impl WebhookTransport {
    pub fn new(config: &TransportConfig) -> NotifyResult<Self> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(default_headers)
            .build()
            .map_err(|e| NotifyError::Network {
                message: format!("failed to create HTTP client: {}", e),
            })?;

        Ok(Self { client })
    }

    pub fn from_env() -> NotifyResult<Self> {
        Self::new(&TransportConfig::from_env())
    }
}

#[async_trait]
impl Transport for WebhookTransport {
    async fn post(
        &self,
        url: &Url,
        payload: &NotificationPayload,
    ) -> NotifyResult<DeliveryReceipt> {
        debug!(host = url.host_str().unwrap_or_default(), "posting notification");

        let response = self.client.post(url.clone()).json(payload).send().await?;
        let status = response.status();
        let body = response.text().await.map_err(|e| NotifyError::Network {
            message: format!("failed to read response body: {}", e),
        })?;

        if status.is_success() {
            Ok(DeliveryReceipt {
                status: status.as_u16(),
                body,
            })
        } else {
            Err(NotifyError::Rejected {
                status: status.as_u16(),
                message: if body.is_empty() {
                    status.to_string()
                } else {
                    body.chars().take(200).collect()
                },
            })
        }
    }
}
