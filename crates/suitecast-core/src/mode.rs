//! Report modes and the block-selection policy each one applies.

use std::fmt;
use std::str::FromStr;

use crate::error::NotifyError;
use crate::options::NotifyOptions;

/// Verbosity/filter policy for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportMode {
    TestSummary,
    FailureSummary,
    TestSummarySlim,
    FailureSummarySlim,
    FailureDetails,
    FailureDetailsSlim,
}

/// Which per-suite blocks are emitted when a run has more than one suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuiteBlocks {
    None,
    All,
    FailedOnly,
}

/// What a mode includes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModePolicy {
    /// Compose for passing runs too.
    pub notify_on_pass: bool,
    pub suite_blocks: SuiteBlocks,
    /// Append per-case failure fields.
    pub failure_details: bool,
}

impl ReportMode {
    pub const ALL: [ReportMode; 6] = [
        ReportMode::TestSummary,
        ReportMode::FailureSummary,
        ReportMode::TestSummarySlim,
        ReportMode::FailureSummarySlim,
        ReportMode::FailureDetails,
        ReportMode::FailureDetailsSlim,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::TestSummary => "test-summary",
            Self::FailureSummary => "failure-summary",
            Self::TestSummarySlim => "test-summary-slim",
            Self::FailureSummarySlim => "failure-summary-slim",
            Self::FailureDetails => "failure-details",
            Self::FailureDetailsSlim => "failure-details-slim",
        }
    }

    pub fn policy(self) -> ModePolicy {
        match self {
            Self::TestSummary => ModePolicy {
                notify_on_pass: true,
                suite_blocks: SuiteBlocks::All,
                failure_details: false,
            },
            Self::FailureSummary => ModePolicy {
                notify_on_pass: false,
                suite_blocks: SuiteBlocks::FailedOnly,
                failure_details: false,
            },
            Self::TestSummarySlim => ModePolicy {
                notify_on_pass: true,
                suite_blocks: SuiteBlocks::None,
                failure_details: false,
            },
            Self::FailureSummarySlim => ModePolicy {
                notify_on_pass: false,
                suite_blocks: SuiteBlocks::None,
                failure_details: false,
            },
            Self::FailureDetails => ModePolicy {
                notify_on_pass: false,
                suite_blocks: SuiteBlocks::All,
                failure_details: true,
            },
            Self::FailureDetailsSlim => ModePolicy {
                notify_on_pass: false,
                suite_blocks: SuiteBlocks::FailedOnly,
                failure_details: true,
            },
        }
    }
}

impl fmt::Display for ReportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportMode {
    type Err = NotifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReportMode::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| NotifyError::UnsupportedMode { name: s.to_string() })
    }
}

/// Map the options' report type to a mode.
pub fn resolve_mode(options: &NotifyOptions) -> Result<ReportMode, NotifyError> {
    options.report_type().parse()
}
