use std::time::Duration;

/// Environment variable holding the backend base address.
pub const API_BASE_ENV: &str = "RECRUIT_API_BASE";
/// Local-development backend.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    /// Matching runs several model calls per resume, so this is generous.
    pub request_timeout: Duration,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(120),
        }
    }
}

impl ApiSettings {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Reads [`API_BASE_ENV`], falling back to [`DEFAULT_API_BASE`] when unset
    /// or blank.
    pub fn from_env() -> Self {
        match std::env::var(API_BASE_ENV) {
            Ok(value) if !value.trim().is_empty() => Self::with_base_url(value.trim()),
            _ => Self::default(),
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
