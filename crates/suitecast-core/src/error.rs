//! Error types for composition and delivery.

/// Notification errors.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    /// Report mode name not recognized.
    #[error("unsupported report type: {name}")]
    UnsupportedMode { name: String },

    /// Result tree violates the data model (e.g. passed > total).
    #[error("malformed result: {message}")]
    MalformedResult { message: String },

    /// Configuration error.
    #[error("configuration error: {message}")]
    Config { message: String },

    /// Network error.
    #[error("network error: {message}")]
    Network { message: String },

    /// Webhook answered with a non-success status.
    #[error("webhook rejected payload: HTTP {status}: {message}")]
    Rejected { status: u16, message: String },

    /// Invalid response from a remote endpoint.
    #[error("invalid response: {message}")]
    InvalidResponse { message: String },

    /// Reading an input file failed.
    #[error("io error: {message}")]
    Io { message: String },
}

impl NotifyError {
    /// Exit code for CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            // Input / config issues
            Self::UnsupportedMode { .. } => 1,
            Self::Config { .. } => 1,
            Self::Io { .. } => 1,
            Self::MalformedResult { .. } => 3,

            // Network/transient
            Self::Network { .. } => 5,
            Self::Rejected { .. } => 5,

            // Other
            Self::InvalidResponse { .. } => 6,
        }
    }

    /// Whether the error is retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network { .. } => true,
            Self::Rejected { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResult {
            message: message.into(),
        }
    }

    pub(crate) fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for NotifyError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network {
            message: err.to_string(),
        }
    }
}

/// Result type for notification operations.
pub type NotifyResult<T> = Result<T, NotifyError>;

/// Failure of the defect-analysis enrichment step.
///
/// Never propagated out of composition: the composer logs it and carries on
/// without the analysis block.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("analysis request failed: {message}")]
    Network { message: String },

    #[error("analysis service returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("invalid analysis response: {message}")]
    InvalidResponse { message: String },

    #[error("analysis configuration error: {message}")]
    Config { message: String },
}

impl From<reqwest::Error> for AnalysisError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network {
            message: err.to_string(),
        }
    }
}
