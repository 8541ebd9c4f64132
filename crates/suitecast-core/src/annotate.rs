//! Enrichment blocks appended after the summaries: defect analysis, then links.

use crate::analysis::DefectAnalyzer;
use crate::error::AnalysisError;
use crate::format::{link_token, BAR_SEPARATOR};
use crate::model::RunResult;
use crate::options::NotifyOptions;
use crate::payload::{Attachment, Field};

pub const ANALYSIS_TITLE: &str = "Report Portal Analysis";

/// Defect analysis block for a failed run with analysis configured.
///
/// `Ok(None)` when the run passed, analysis is not configured, or the launch
/// has no defect breakdown.
pub async fn defect_analysis_attachment(
    analyzer: &dyn DefectAnalyzer,
    result: &RunResult,
    options: &NotifyOptions,
) -> Result<Option<Attachment>, AnalysisError> {
    if result.status.is_pass() {
        return Ok(None);
    }
    let config = match &options.report_portal_analysis {
        Some(c) => c,
        None => return Ok(None),
    };

    let summary = analyzer.fetch_defect_summary(config).await?;
    Ok(summary.map(|items| Attachment {
        mrkdwn_in: vec!["fields".to_string()],
        fields: vec![Field::titled(
            ANALYSIS_TITLE,
            items.join(BAR_SEPARATOR),
            false,
        )],
        ..Default::default()
    }))
}

/// Footer block of `<url|text>` links, or `None` without links.
pub fn links_attachment(options: &NotifyOptions) -> Option<Attachment> {
    let links = options.links()?;
    let footer = links
        .iter()
        .map(|l| link_token(&l.url, &l.text))
        .collect::<Vec<_>>()
        .join(BAR_SEPARATOR);
    Some(Attachment {
        fallback: Some("links".to_string()),
        footer: Some(footer),
        ..Default::default()
    })
}
