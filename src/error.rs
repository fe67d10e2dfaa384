use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Everything that can go wrong between "the user pressed send" and
/// "the endpoint acknowledged the feedback".
///
/// None of these are fatal: the owning widget or hook stays usable and a new
/// submit may be attempted immediately.
#[derive(Debug, Error)]
pub enum FeedbackError {
    // ── Caller-side guard ────────────────────────────────────────────────
    #[error("{0}")]
    Validation(String),

    // ── Endpoint answered with a non-2xx status ─────────────────────────
    #[error("{message}")]
    RemoteRejected {
        status: u16,
        message: String,
        details: Option<Value>,
    },

    // ── No response at all ──────────────────────────────────────────────
    #[error("failed to reach feedback endpoint: {0}")]
    TransportFailed(#[source] reqwest::Error),

    // ── 2xx with a body we cannot read ──────────────────────────────────
    #[error("unexpected response from feedback endpoint: {0}")]
    InvalidResponse(String),

    // ── Pre-submit hook ─────────────────────────────────────────────────
    #[error("{0}")]
    TransformRejected(String),

    // ── Attachments ─────────────────────────────────────────────────────
    #[error(transparent)]
    Attachment(#[from] AttachmentError),

    #[error("a submission is already in progress")]
    Busy,

    #[error("feedback owner has been disposed")]
    Disposed,

    #[error("config: {0}")]
    Config(#[from] ConfigError),
}

impl FeedbackError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::RemoteRejected { .. } => ErrorKind::RemoteRejected,
            Self::TransportFailed(_) => ErrorKind::TransportFailed,
            Self::InvalidResponse(_) => ErrorKind::InvalidResponse,
            Self::TransformRejected(_) => ErrorKind::TransformRejected,
            Self::Attachment(_) => ErrorKind::Attachment,
            Self::Busy => ErrorKind::Busy,
            Self::Disposed => ErrorKind::Disposed,
            Self::Config(_) => ErrorKind::Config,
        }
    }
}

// ─── Attachment errors ───────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum AttachmentError {
    #[error("Please upload an image file")]
    NotAnImage { mime_type: String },

    #[error("Image must be less than {}MB", .max_bytes / (1_024 * 1_024))]
    TooLarge { size: u64, max_bytes: u64 },

    #[error("failed to read attachment: {0}")]
    Io(#[from] std::io::Error),
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config: {0}")]
    Load(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

// ─── State-machine facing error value ────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    Validation,
    RemoteRejected,
    TransportFailed,
    InvalidResponse,
    TransformRejected,
    Attachment,
    Busy,
    Disposed,
    Config,
}

/// The error half of a settled submission, as held by the state machine and
/// handed to error callbacks.
///
/// `message` is what end users see, rendered verbatim. `details` is whatever
/// the endpoint attached to its rejection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionError {
    pub kind: ErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl SubmissionError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            details: None,
        }
    }
}

impl std::fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for SubmissionError {}

impl From<FeedbackError> for SubmissionError {
    fn from(err: FeedbackError) -> Self {
        let kind = err.kind();
        let message = err.to_string();
        let details = match err {
            FeedbackError::RemoteRejected { details, .. } => details,
            _ => None,
        };
        Self {
            kind,
            message,
            details,
        }
    }
}

/// Shorthand result type for the crate.
pub type Result<T> = std::result::Result<T, FeedbackError>;
