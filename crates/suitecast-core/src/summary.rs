//! Title and summary blocks for a run or a suite.

use crate::format::{bold, format_duration, percentage};
use crate::model::{RunResult, Status, SuiteResult};
use crate::options::NotifyOptions;
use crate::payload::{Attachment, Color, Field};

pub const RESULTS_TITLE: &str = "Results";
pub const DURATION_TITLE: &str = "Duration";

/// Bold title: options title (or run name) plus optional suffix.
pub fn title_text(result: &RunResult, options: &NotifyOptions) -> String {
    let title = options.title.as_deref().unwrap_or(&result.name);
    match options.title_suffix.as_deref() {
        Some(suffix) => bold(&format!("{} {}", title, suffix)),
        None => bold(title),
    }
}

/// Run-level summary block.
pub fn main_summary(result: &RunResult) -> Attachment {
    summary_block(result.status, result.passed, result.total, result.duration)
}

/// Suite-level summary block, headed by the suite name.
pub fn suite_summary(suite: &SuiteResult) -> Attachment {
    Attachment {
        text: Some(bold(&suite.name)),
        ..summary_block(suite.status, suite.passed, suite.total, suite.duration)
    }
}

fn summary_block(status: Status, passed: u64, total: u64, duration_secs: u64) -> Attachment {
    let color = match status {
        Status::Pass => Color::Good,
        Status::Fail => Color::Danger,
    };
    Attachment {
        mrkdwn_in: vec!["text".to_string(), "fields".to_string()],
        color: Some(color),
        fields: vec![
            Field::titled(
                RESULTS_TITLE,
                format!(
                    "{} / {} Passed ({}%)",
                    passed,
                    total,
                    percentage(passed, total)
                ),
                true,
            ),
            Field::titled(DURATION_TITLE, format_duration(duration_secs), true),
        ],
        ..Default::default()
    }
}
