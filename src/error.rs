use std::path::PathBuf;
use std::time::Duration;

use itertools::Itertools;

use crate::model::FormField;

/// All errors that can occur while driving the portal controllers.
#[derive(thiserror::Error, Debug)]
pub enum PortalError {
    /// A gated action was attempted without a signed-in session.
    #[error("sign-in required")]
    AuthRequired,

    /// One or more required profile fields are empty.
    #[error("missing required fields: {}", .missing.iter().join(", "))]
    Validation { missing: Vec<FormField> },

    /// A field name coming from the rendering layer is not part of the form.
    #[error("unknown form field: {0}")]
    UnknownField(String),

    /// A submission is already waiting on the network.
    #[error("a profile submission is already in flight")]
    SubmitInFlight,

    /// The profile was submitted earlier and the form is closed.
    #[error("profile already submitted")]
    AlreadySubmitted,

    /// The identity provider could not issue a bearer token.
    #[error("could not acquire a session token: {0}")]
    TokenUnavailable(String),

    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Server returned a non-success HTTP status code.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Failed to read the response body as JSON.
    #[error("failed to read response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// The underlying HTTP client could not be constructed.
    #[error("failed to build http client: {0}")]
    ClientBuild(reqwest::Error),

    /// The token request and POST did not finish in time.
    #[error("submission timed out after {}s", .after.as_secs())]
    Timeout { after: Duration },

    /// Reading or writing the durable session file failed.
    #[error("session storage error at {path}: {source}")]
    Storage {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Bundled data or a stored document is not valid JSON.
    #[error("invalid json: {0}")]
    Data(#[from] serde_json::Error),
}

/// User-facing failure classes. Everything is recoverable without restarting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "snake_case")]
pub enum FailureKind {
    AuthRequired,
    ValidationFailed,
    SubmissionFailed,
    TokenAcquisitionFailed,
    Local,
}

impl PortalError {
    pub fn failure_kind(&self) -> FailureKind {
        match self {
            PortalError::AuthRequired => FailureKind::AuthRequired,
            PortalError::Validation { .. } => FailureKind::ValidationFailed,
            PortalError::TokenUnavailable(_) => FailureKind::TokenAcquisitionFailed,
            PortalError::Http { .. }
            | PortalError::UnexpectedStatus { .. }
            | PortalError::ResponseBody { .. }
            | PortalError::Timeout { .. } => FailureKind::SubmissionFailed,
            PortalError::UnknownField(_)
            | PortalError::SubmitInFlight
            | PortalError::AlreadySubmitted
            | PortalError::ClientBuild(_)
            | PortalError::Storage { .. }
            | PortalError::Data(_) => FailureKind::Local,
        }
    }

    /// Whether the error came out of the network half of a submission.
    pub fn is_submission_failure(&self) -> bool {
        matches!(
            self.failure_kind(),
            FailureKind::SubmissionFailed | FailureKind::TokenAcquisitionFailed
        )
    }
}

pub type Result<T> = std::result::Result<T, PortalError>;
