//! Notification options and transport configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{NotifyError, NotifyResult};

/// Mode used when `report_type` is not set.
pub const DEFAULT_REPORT_TYPE: &str = "test-summary";

/// Caller-supplied options for one notification.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotifyOptions {
    /// Incoming webhook URL.
    #[serde(default)]
    pub url: Option<String>,

    /// Title; falls back to the run name.
    #[serde(default)]
    pub title: Option<String>,

    /// Appended to the title after a space.
    #[serde(default)]
    pub title_suffix: Option<String>,

    /// Footer links, in display order.
    #[serde(default)]
    pub links: Option<Vec<Link>>,

    /// Report mode name (e.g. "failure-details").
    #[serde(default)]
    pub report_type: Option<String>,

    /// Report Portal launch to pull defect analysis from.
    #[serde(default)]
    pub report_portal_analysis: Option<ReportPortalConfig>,
}

/// Footer link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
    pub text: String,
}

/// Report Portal launch query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportPortalConfig {
    /// Base URL of the Report Portal instance.
    pub url: String,

    /// API token.
    pub api_key: String,

    pub project: String,

    pub launch_id: String,
}

impl NotifyOptions {
    /// Apply environment overrides.
    ///
    /// | Variable | Description |
    /// |----------|-------------|
    /// | `SUITECAST_WEBHOOK_URL` | Webhook URL |
    /// | `SUITECAST_REPORT_TYPE` | Report mode name |
    /// | `SUITECAST_TITLE` | Title |
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(url) = non_empty_env("SUITECAST_WEBHOOK_URL") {
            self.url = Some(url);
        }
        if let Some(report_type) = non_empty_env("SUITECAST_REPORT_TYPE") {
            self.report_type = Some(report_type);
        }
        if let Some(title) = non_empty_env("SUITECAST_TITLE") {
            self.title = Some(title);
        }
        self
    }

    /// Mode name, defaulting to `test-summary`.
    pub fn report_type(&self) -> &str {
        self.report_type.as_deref().unwrap_or(DEFAULT_REPORT_TYPE)
    }

    /// Links, treating an empty list as absent.
    pub fn links(&self) -> Option<&[Link]> {
        self.links.as_deref().filter(|l| !l.is_empty())
    }

    /// Set the webhook URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set the report mode name.
    pub fn with_report_type(mut self, report_type: impl Into<String>) -> Self {
        self.report_type = Some(report_type.into());
        self
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

/// Resolve the webhook endpoint from options.
pub fn resolve_endpoint(options: &NotifyOptions) -> NotifyResult<Url> {
    let raw = options
        .url
        .as_deref()
        .ok_or_else(|| NotifyError::config("webhook url is not set"))?;
    let url = Url::parse(raw)
        .map_err(|e| NotifyError::config(format!("invalid webhook url '{}': {}", raw, e)))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(NotifyError::config(format!(
            "webhook url must be http(s), got scheme '{}'",
            other
        ))),
    }
}

/// Read options from a YAML (or JSON) file and apply env overrides.
pub fn load_options(path: &Path) -> NotifyResult<NotifyOptions> {
    let raw = std::fs::read_to_string(path).map_err(|e| NotifyError::Io {
        message: format!("failed to read config {}: {}", path.display(), e),
    })?;
    let options: NotifyOptions = serde_yaml::from_str(&raw)
        .map_err(|e| NotifyError::config(format!("failed to parse config: {}", e)))?;
    Ok(options.with_env_overrides())
}

/// HTTP transport configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransportConfig {
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_timeout() -> u64 {
    30
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout(),
        }
    }
}

impl TransportConfig {
    /// Create config from environment variables (`SUITECAST_TIMEOUT`).
    pub fn from_env() -> Self {
        Self {
            timeout_secs: std::env::var("SUITECAST_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_timeout),
        }
    }

    /// Set the timeout.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    #[test]
    fn test_resolve_endpoint() {
        let opts = NotifyOptions::default().with_url("https://hooks.slack.com/services/T/B/X");
        let url = resolve_endpoint(&opts).unwrap();
        assert_eq!(url.host_str(), Some("hooks.slack.com"));
    }

    #[test]
    fn test_resolve_endpoint_missing_or_invalid() {
        assert!(matches!(
            resolve_endpoint(&NotifyOptions::default()),
            Err(NotifyError::Config { .. })
        ));
        let opts = NotifyOptions::default().with_url("not a url");
        assert!(resolve_endpoint(&opts).is_err());
        let opts = NotifyOptions::default().with_url("ftp://example.com/hook");
        assert!(resolve_endpoint(&opts).is_err());
    }

    #[test]
    fn test_report_type_default() {
        assert_eq!(NotifyOptions::default().report_type(), "test-summary");
        let opts = NotifyOptions::default().with_report_type("failure-details");
        assert_eq!(opts.report_type(), "failure-details");
    }

    #[test]
    fn test_empty_links_treated_as_absent() {
        let opts = NotifyOptions {
            links: Some(vec![]),
            ..Default::default()
        };
        assert!(opts.links().is_none());
    }

    #[test]
    #[serial]
    fn test_load_options_yaml() {
        std::env::remove_var("SUITECAST_WEBHOOK_URL");
        std::env::remove_var("SUITECAST_REPORT_TYPE");
        std::env::remove_var("SUITECAST_TITLE");

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
url: https://hooks.example.com/abc
title: Nightly
title_suffix: "(staging)"
report_type: failure-details-slim
links:
  - url: https://ci.example.com/42
    text: Build
report_portal_analysis:
  url: https://rp.example.com
  api_key: secret
  project: web
  launch_id: "17"
"#
        )
        .unwrap();

        let opts = load_options(file.path()).unwrap();
        assert_eq!(opts.title.as_deref(), Some("Nightly"));
        assert_eq!(opts.report_type(), "failure-details-slim");
        assert_eq!(opts.links().unwrap()[0].text, "Build");
        assert_eq!(opts.report_portal_analysis.unwrap().launch_id, "17");
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        std::env::set_var("SUITECAST_WEBHOOK_URL", "https://override.example.com/hook");
        std::env::set_var("SUITECAST_REPORT_TYPE", "failure-summary");
        std::env::remove_var("SUITECAST_TITLE");

        let opts = NotifyOptions::default()
            .with_url("https://hooks.example.com/abc")
            .with_env_overrides();

        std::env::remove_var("SUITECAST_WEBHOOK_URL");
        std::env::remove_var("SUITECAST_REPORT_TYPE");

        assert_eq!(
            opts.url.as_deref(),
            Some("https://override.example.com/hook")
        );
        assert_eq!(opts.report_type(), "failure-summary");
        assert!(opts.title.is_none());
    }

    #[test]
    fn test_load_options_missing_file() {
        let err = load_options(Path::new("/nonexistent/suitecast.yaml")).unwrap_err();
        assert!(matches!(err, NotifyError::Io { .. }));
    }

    #[test]
    #[serial]
    fn test_transport_config_from_env() {
        std::env::set_var("SUITECAST_TIMEOUT", "5");
        assert_eq!(TransportConfig::from_env().timeout_secs, 5);
        std::env::set_var("SUITECAST_TIMEOUT", "soon");
        assert_eq!(TransportConfig::from_env().timeout_secs, 30);
        std::env::remove_var("SUITECAST_TIMEOUT");
    }
}
