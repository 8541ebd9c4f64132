//! External defect analysis (Report Portal).
//!
//! Analysis is best-effort enrichment. Callers get a `Result` back and decide
//! what to do with failures; the composer logs and drops them.

use async_trait::async_trait;

use crate::error::AnalysisError;
use crate::options::ReportPortalConfig;

mod client;
mod defects;

pub use client::ReportPortalClient;
pub use defects::{defects_summary, DefectCategory, Defects, LaunchDetails, Statistics};

/// Source of formatted defect summaries for a launch.
#[async_trait]
pub trait DefectAnalyzer: Send + Sync {
    /// Formatted defect summaries, or `None` when the launch has no defect
    /// breakdown.
    async fn fetch_defect_summary(
        &self,
        config: &ReportPortalConfig,
    ) -> Result<Option<Vec<String>>, AnalysisError>;
}
