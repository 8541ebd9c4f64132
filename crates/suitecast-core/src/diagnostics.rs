//! Composition diagnostics. The composer reports decisions here in addition
//! to its `tracing` output, so callers and tests can observe them directly.

use std::sync::Arc;

use crate::mode::ReportMode;

/// Something the composer decided or tolerated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposeEvent {
    /// Mode name not recognized; nothing composed.
    UnsupportedMode { name: String },
    /// Passing run under a failure-only mode; nothing composed.
    Skipped { mode: ReportMode },
    /// Defect analysis failed; payload composed without it.
    EnrichmentFailed { message: String },
    /// Payload composed.
    Composed { mode: ReportMode, attachments: usize },
}

/// Sink for compose events.
pub type DiagnosticSink = Arc<dyn Fn(&ComposeEvent) + Send + Sync>;

/// Sink that records every event into a shared vector.
///
/// Lets a caller inspect the composer's decisions after the fact, for example
/// to report a skipped notification or failed enrichment from a CI step:
///
/// ```
/// use suitecast_core::diagnostics::{collecting_sink, ComposeEvent};
/// use suitecast_core::{parse_results, MessageComposer, NotifyOptions, ReportMode};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> anyhow::Result<()> {
/// let (sink, events) = collecting_sink();
/// let composer = MessageComposer::without_analysis().with_sink(sink);
///
/// let runs = parse_results(r#"{"name":"nightly","status":"PASS","passed":1,"total":1}"#)?;
/// let payload = composer
///     .compose(ReportMode::FailureSummary, &runs, &NotifyOptions::default())
///     .await?;
///
/// assert!(payload.is_none());
/// let recorded = events.lock().map(|evs| evs.clone()).unwrap_or_default();
/// assert_eq!(recorded, vec![ComposeEvent::Skipped { mode: ReportMode::FailureSummary }]);
/// # Ok(())
/// # }
/// ```
pub fn collecting_sink() -> (DiagnosticSink, Arc<std::sync::Mutex<Vec<ComposeEvent>>>) {
    let events = Arc::new(std::sync::Mutex::new(Vec::new()));
    let captured = Arc::clone(&events);
    let sink: DiagnosticSink = Arc::new(move |ev: &ComposeEvent| {
        if let Ok(mut guard) = captured.lock() {
            guard.push(ev.clone());
        }
    });
    (sink, events)
}
