//! Test result notifications for chat webhooks.
//!
//! This crate turns a test run (run → suites → cases) into a Slack-style
//! attachment payload and posts it to an incoming webhook:
//!
//! - Six report modes, from a one-block summary to per-case failure details
//! - Optional defect analysis pulled from Report Portal
//! - Footer links supplied by the caller
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use suitecast_core::{
//!     load_options, load_results, MessageComposer, Notifier, ReportPortalClient,
//!     TransportConfig, WebhookTransport,
//! };
//!
//! # async fn example() -> anyhow::Result<()> {
//! let options = load_options("suitecast.yaml".as_ref())?;
//! let results = load_results("results.json".as_ref())?;
//!
//! let config = TransportConfig::from_env();
//! let composer = MessageComposer::new(Arc::new(ReportPortalClient::new(&config)?));
//! let notifier = Notifier::new(composer, Arc::new(WebhookTransport::new(&config)?));
//!
//! if notifier.send(&options, &results).await?.is_none() {
//!     println!("nothing to send");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! | Environment Variable | Description |
//! |---------------------|-------------|
//! | `SUITECAST_WEBHOOK_URL` | Webhook URL (overrides config file) |
//! | `SUITECAST_REPORT_TYPE` | Report mode name (overrides config file) |
//! | `SUITECAST_TITLE` | Title (overrides config file) |
//! | `SUITECAST_TIMEOUT` | Request timeout in seconds (default: 30) |

pub mod analysis;
pub mod annotate;
pub mod compose;
pub mod diagnostics;
pub mod delivery;
pub mod error;
pub mod failure;
pub mod format;
pub mod mode;
pub mod model;
pub mod options;
pub mod payload;
pub mod summary;

/// User agent sent with every outbound request.
pub const USER_AGENT_VALUE: &str = concat!("suitecast/", env!("CARGO_PKG_VERSION"));

// Re-export main types
pub use analysis::{DefectAnalyzer, ReportPortalClient};
pub use compose::MessageComposer;
pub use diagnostics::{ComposeEvent, DiagnosticSink};
pub use delivery::{DeliveryReceipt, Notifier, Transport, WebhookTransport};
pub use error::{AnalysisError, NotifyError, NotifyResult};
pub use mode::{resolve_mode, ReportMode};
pub use model::{load_results, parse_results, CaseResult, RunResult, Status, SuiteResult};
pub use options::{
    load_options, resolve_endpoint, Link, NotifyOptions, ReportPortalConfig, TransportConfig,
};
pub use payload::{Attachment, Color, Field, NotificationPayload};
