//! Message composition: mode dispatch and payload assembly.
//!
//! Attachment order is fixed: run summary, suite summaries (suite order),
//! defect analysis, links footer.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::analysis::DefectAnalyzer;
use crate::annotate::{defect_analysis_attachment, links_attachment};
use crate::diagnostics::{ComposeEvent, DiagnosticSink};
use crate::error::{NotifyError, NotifyResult};
use crate::failure::failure_fields;
use crate::mode::{resolve_mode, ReportMode, SuiteBlocks};
use crate::model::{RunResult, SuiteResult};
use crate::options::NotifyOptions;
use crate::payload::{Attachment, NotificationPayload};
use crate::summary::{main_summary, suite_summary, title_text};

/// Builds notification payloads from run results.
///
/// Holds no per-call state; one composer can serve any number of calls.
#[derive(Clone, Default)]
pub struct MessageComposer {
    analyzer: Option<Arc<dyn DefectAnalyzer>>,
    sink: Option<DiagnosticSink>,
}

impl std::fmt::Debug for MessageComposer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageComposer")
            .field("analyzer", &self.analyzer.is_some())
            .field("sink", &self.sink.is_some())
            .finish()
    }
}

impl MessageComposer {
    /// Composer that enriches failed runs through `analyzer`.
    pub fn new(analyzer: Arc<dyn DefectAnalyzer>) -> Self {
        Self {
            analyzer: Some(analyzer),
            sink: None,
        }
    }

    /// Composer without defect analysis.
    pub fn without_analysis() -> Self {
        Self::default()
    }

    /// Report compose events to `sink`.
    pub fn with_sink(mut self, sink: DiagnosticSink) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Resolve the mode from `options` and compose.
    ///
    /// An unsupported mode name is logged and yields `Ok(None)`.
    pub async fn compose_for(
        &self,
        options: &NotifyOptions,
        results: &[RunResult],
    ) -> NotifyResult<Option<NotificationPayload>> {
        match resolve_mode(options) {
            Ok(mode) => self.compose(mode, results, options).await,
            Err(NotifyError::UnsupportedMode { name }) => {
                warn!(report_type = %name, "unsupported report type");
                self.emit(&ComposeEvent::UnsupportedMode { name });
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Compose a payload for the first run in `results`.
    ///
    /// `Ok(None)` means nothing should be sent: the run passed and `mode`
    /// only reports failures.
    pub async fn compose(
        &self,
        mode: ReportMode,
        results: &[RunResult],
        options: &NotifyOptions,
    ) -> NotifyResult<Option<NotificationPayload>> {
        let result = results
            .first()
            .ok_or_else(|| NotifyError::malformed("no run results to report"))?;
        if results.len() > 1 {
            debug!(runs = results.len(), "only the first run is reported");
        }
        result.validate()?;

        let policy = mode.policy();
        if result.status.is_pass() && !policy.notify_on_pass {
            debug!(mode = %mode, run = %result.name, "run passed; nothing to report");
            self.emit(&ComposeEvent::Skipped { mode });
            return Ok(None);
        }

        let mut main = main_summary(result);
        let mut suite_blocks = Vec::new();

        if result.suites.len() > 1 {
            let shown: Vec<&SuiteResult> = match policy.suite_blocks {
                SuiteBlocks::None => Vec::new(),
                SuiteBlocks::All => result.suites.iter().collect(),
                SuiteBlocks::FailedOnly => result.failed_suites().collect(),
            };
            for suite in shown {
                let mut block = suite_summary(suite);
                if policy.failure_details && suite.status.is_fail() {
                    block.fields.extend(failure_fields(suite));
                }
                suite_blocks.push(block);
            }
        } else if policy.failure_details {
            // A single suite is reported through the run-level block.
            let suite = result.suites.first().ok_or_else(|| {
                NotifyError::malformed(format!(
                    "run '{}' has no suites to report failure details for",
                    result.name
                ))
            })?;
            main.fields.extend(failure_fields(suite));
        }

        let mut payload = NotificationPayload {
            text: title_text(result, options),
            attachments: Vec::with_capacity(suite_blocks.len() + 3),
        };
        payload.attachments.push(main);
        payload.attachments.extend(suite_blocks);

        if let Some(att) = self.defect_analysis(result, options).await {
            payload.attachments.push(att);
        }
        if let Some(att) = links_attachment(options) {
            payload.attachments.push(att);
        }

        debug!(
            mode = %mode,
            attachments = payload.attachments.len(),
            "composed notification"
        );
        self.emit(&ComposeEvent::Composed {
            mode,
            attachments: payload.attachments.len(),
        });
        Ok(Some(payload))
    }

    async fn defect_analysis(
        &self,
        result: &RunResult,
        options: &NotifyOptions,
    ) -> Option<Attachment> {
        let analyzer = self.analyzer.as_ref()?;
        match defect_analysis_attachment(analyzer.as_ref(), result, options).await {
            Ok(att) => att,
            Err(e) => {
                warn!(error = %e, "failed to get report portal analysis");
                self.emit(&ComposeEvent::EnrichmentFailed {
                    message: e.to_string(),
                });
                None
            }
        }
    }

    fn emit(&self, event: &ComposeEvent) {
        if let Some(sink) = &self.sink {
            sink(event);
        }
    }
}
