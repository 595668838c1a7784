use std::fmt;

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tag echoed back with every completion so callers can drop stale answers.
pub type RequestGeneration = u64;

/// A file to upload as one multipart part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub name: String,
    pub bytes: Bytes,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }
}

/// Multipart body of `POST /api/match`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatchRequest {
    pub jd_file: Option<UploadFile>,
    /// Only sent when `jd_file` is `None`.
    pub jd_text: Option<String>,
    pub resumes: Vec<UploadFile>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmploymentType {
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    #[serde(rename = "Contract")]
    Contract,
}

/// JSON body of `POST /api/generate_jd`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateJdRequest {
    pub job_title: String,
    pub years_experience: u32,
    pub must_have_skills: String,
    pub company_name: String,
    pub employment_type: EmploymentType,
    pub industry: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GenerateJdResponse {
    pub jd_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailData {
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateResult {
    pub filename: String,
    /// The backend may send fractional scores.
    pub score: f64,
    #[serde(default)]
    pub missing_skills: Vec<String>,
    #[serde(default)]
    pub remarks: String,
    pub email: EmailData,
    pub is_selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResponse {
    pub jd_text: String,
    pub candidates: Vec<CandidateResult>,
    pub best_index: i64,
}

/// Error body convention shared by both endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    MatchCompleted {
        generation: RequestGeneration,
        result: Result<MatchResponse, ApiError>,
    },
    GenerateCompleted {
        generation: RequestGeneration,
        result: Result<String, ApiError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct ApiError {
    pub kind: ApiFailureKind,
    pub message: String,
    /// Server-supplied `detail`, when the error body carried one.
    pub detail: Option<String>,
}

impl ApiError {
    pub(crate) fn new(kind: ApiFailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            detail: None,
        }
    }

    pub(crate) fn with_detail(mut self, detail: Option<String>) -> Self {
        self.detail = detail;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiFailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    Network,
    /// 2xx response with a body that did not decode.
    Decode,
}

impl fmt::Display for ApiFailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiFailureKind::InvalidUrl => write!(f, "invalid url"),
            ApiFailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            ApiFailureKind::Timeout => write!(f, "timeout"),
            ApiFailureKind::Network => write!(f, "network error"),
            ApiFailureKind::Decode => write!(f, "undecodable response"),
        }
    }
}
