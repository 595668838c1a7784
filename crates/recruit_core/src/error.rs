use thiserror::Error;

pub const MISSING_MATCH_INPUT: &str = "Provide a job description and at least one resume";
pub const MISSING_GENERATOR_INPUT: &str = "Fill job title and company name";
pub const PROTOCOL_FAILURE: &str = "Unexpected response from server";

/// Failure of one submission attempt. `Display` is the user-facing text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Required input missing; no request was sent.
    #[error("{0}")]
    Validation(String),
    /// Non-2xx status or transport failure.
    #[error("{0}")]
    Request(String),
    /// The response decoded but broke a structural invariant.
    #[error("Unexpected response from server")]
    Protocol(String),
}

impl SessionError {
    pub fn validation(message: impl Into<String>) -> Self {
        SessionError::Validation(message.into())
    }

    pub fn request(message: impl Into<String>) -> Self {
        SessionError::Request(message.into())
    }

    /// `reason` is for logs only; users see a generic message.
    pub fn protocol(reason: impl Into<String>) -> Self {
        SessionError::Protocol(reason.into())
    }
}

/// How a request failed, as reported by whoever executed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestFailure {
    /// The server answered with a non-2xx status.
    Rejected { status: u16, detail: Option<String> },
    /// No usable response (connect failure, timeout, ...).
    Transport { reason: String },
    /// A 2xx response whose body could not be decoded.
    Malformed { reason: String },
}

/// Which request a failure belongs to; selects the fallback wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Match,
    Generate,
}

impl RequestKind {
    fn rejected_fallback(self) -> &'static str {
        match self {
            RequestKind::Match => "Failed to process",
            RequestKind::Generate => "Failed to generate",
        }
    }

    fn transport_fallback(self) -> &'static str {
        match self {
            RequestKind::Match => "Error processing. Check backend logs.",
            RequestKind::Generate => "Error generating JD. Check backend logs.",
        }
    }
}

impl RequestFailure {
    pub fn into_session_error(self, kind: RequestKind) -> SessionError {
        match self {
            RequestFailure::Rejected { detail, .. } => match detail {
                Some(detail) if !detail.trim().is_empty() => SessionError::request(detail),
                _ => SessionError::request(kind.rejected_fallback()),
            },
            RequestFailure::Transport { .. } => SessionError::request(kind.transport_fallback()),
            RequestFailure::Malformed { reason } => SessionError::protocol(reason),
        }
    }
}
