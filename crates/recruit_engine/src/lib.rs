//! Recruiter engine: HTTP access to the matching backend and request execution.
mod client;
mod engine;
mod settings;
mod types;

pub use client::{
    guess_mime, RecruitApi, ReqwestApiClient, GENERATE_JD_PATH, HEALTH_PATH, MATCH_PATH,
};
pub use engine::EngineHandle;
pub use settings::{ApiSettings, API_BASE_ENV, DEFAULT_API_BASE};
pub use types::{
    ApiError, ApiFailureKind, CandidateResult, EmailData, EmploymentType, EngineEvent,
    GenerateJdRequest, GenerateJdResponse, MatchRequest, MatchResponse, RequestGeneration,
    UploadFile,
};
