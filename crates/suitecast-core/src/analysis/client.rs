//! Report Portal HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, USER_AGENT};
use tracing::debug;

use super::defects::{defects_summary, LaunchDetails};
use super::DefectAnalyzer;
use crate::error::AnalysisError;
use crate::options::{ReportPortalConfig, TransportConfig};
use crate::USER_AGENT_VALUE;

/// Fetches launch statistics from Report Portal.
#[derive(Debug, Clone)]
pub struct ReportPortalClient {
    client: reqwest::Client,
}

impl ReportPortalClient {
    pub fn new(config: &TransportConfig) -> Result<Self, AnalysisError> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(default_headers)
            .build()
            .map_err(|e| AnalysisError::Config {
                message: format!("failed to create HTTP client: {}", e),
            })?;

        Ok(Self { client })
    }

    /// GET the launch and decode the statistics we read.
    pub async fn fetch_launch(
        &self,
        config: &ReportPortalConfig,
    ) -> Result<LaunchDetails, AnalysisError> {
        let url = launch_url(config);
        debug!(url = %url, "fetching report portal launch");

        let response = self
            .client
            .get(&url)
            .header(AUTHORIZATION, format!("Bearer {}", config.api_key))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .map(|body| body.chars().take(200).collect::<String>())
                .unwrap_or_else(|_| status.to_string());
            return Err(AnalysisError::Status {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json()
            .await
            .map_err(|e| AnalysisError::InvalidResponse {
                message: format!("failed to parse launch details: {}", e),
            })
    }
}

#[async_trait]
impl DefectAnalyzer for ReportPortalClient {
    async fn fetch_defect_summary(
        &self,
        config: &ReportPortalConfig,
    ) -> Result<Option<Vec<String>>, AnalysisError> {
        let launch = self.fetch_launch(config).await?;
        Ok(launch.defects().map(defects_summary))
    }
}

fn launch_url(config: &ReportPortalConfig) -> String {
    format!(
        "{}/api/v1/{}/launch/{}",
        config.url.trim_end_matches('/'),
        config.project,
        config.launch_id
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launch_url() {
        let config = ReportPortalConfig {
            url: "https://rp.example.com/".into(),
            api_key: "k".into(),
            project: "web".into(),
            launch_id: "17".into(),
        };
        assert_eq!(
            launch_url(&config),
            "https://rp.example.com/api/v1/web/launch/17"
        );
    }
}
