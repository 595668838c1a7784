use reqwest::multipart::{Form, Part};
use reqwest::{Response, Url};
use serde::de::DeserializeOwned;

use recruit_logging::{recruit_debug, recruit_warn};

use crate::types::ErrorBody;
use crate::{
    ApiError, ApiFailureKind, ApiSettings, GenerateJdRequest, GenerateJdResponse, MatchRequest,
    MatchResponse, UploadFile,
};

pub const MATCH_PATH: &str = "/api/match";
pub const GENERATE_JD_PATH: &str = "/api/generate_jd";
pub const HEALTH_PATH: &str = "/health";

/// The two backend operations, plus a liveness check.
#[async_trait::async_trait]
pub trait RecruitApi: Send + Sync {
    async fn match_resumes(&self, request: MatchRequest) -> Result<MatchResponse, ApiError>;

    /// Returns the generated job description text.
    async fn generate_jd(&self, request: GenerateJdRequest) -> Result<String, ApiError>;

    async fn health(&self) -> Result<(), ApiError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestApiClient {
    settings: ApiSettings,
    client: reqwest::Client,
}

impl ReqwestApiClient {
    pub fn new(settings: ApiSettings) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ApiError::new(ApiFailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    pub fn settings(&self) -> &ApiSettings {
        &self.settings
    }

    fn url(&self, path: &str) -> Result<Url, ApiError> {
        let endpoint = self.settings.endpoint(path);
        Url::parse(&endpoint)
            .map_err(|err| ApiError::new(ApiFailureKind::InvalidUrl, format!("{endpoint}: {err}")))
    }
}

#[async_trait::async_trait]
impl RecruitApi for ReqwestApiClient {
    async fn match_resumes(&self, request: MatchRequest) -> Result<MatchResponse, ApiError> {
        let url = self.url(MATCH_PATH)?;
        let resume_count = request.resumes.len();
        let form = build_match_form(request)?;
        recruit_debug!("POST {} resumes={}", url, resume_count);

        let response = self
            .client
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        read_json(response).await
    }

    async fn generate_jd(&self, request: GenerateJdRequest) -> Result<String, ApiError> {
        let url = self.url(GENERATE_JD_PATH)?;
        recruit_debug!("POST {} job_title={}", url, request.job_title);

        let response = self
            .client
            .post(url)
            .json(&request)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let body: GenerateJdResponse = read_json(response).await?;
        Ok(body.jd_text)
    }

    async fn health(&self) -> Result<(), ApiError> {
        let url = self.url(HEALTH_PATH)?;
        let response = self.client.get(url).send().await.map_err(map_reqwest_error)?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ApiError::new(
                ApiFailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ))
        }
    }
}

/// `jd_file` wins over `jd_text`; every resume goes under the repeated
/// `resumes` field.
fn build_match_form(request: MatchRequest) -> Result<Form, ApiError> {
    let MatchRequest {
        jd_file,
        jd_text,
        resumes,
    } = request;

    let mut form = Form::new();
    match (jd_file, jd_text) {
        (Some(file), _) => form = form.part("jd_file", file_part(file)?),
        (None, Some(text)) => form = form.text("jd_text", text),
        (None, None) => {}
    }
    for resume in resumes {
        form = form.part("resumes", file_part(resume)?);
    }
    Ok(form)
}

fn file_part(file: UploadFile) -> Result<Part, ApiError> {
    let mime = guess_mime(&file.name);
    Part::bytes(file.bytes.to_vec())
        .file_name(file.name)
        .mime_str(mime)
        .map_err(|err| ApiError::new(ApiFailureKind::Network, err.to_string()))
}

/// Content type for the document formats the backend extracts text from.
pub fn guess_mime(filename: &str) -> &'static str {
    let extension = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase());
    match extension.as_deref() {
        Some("pdf") => "application/pdf",
        Some("docx") => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        Some("doc") => "application/msword",
        Some("txt") => "text/plain",
        _ => "application/octet-stream",
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response.bytes().await.map_err(map_reqwest_error)?;

    if !status.is_success() {
        let detail = serde_json::from_slice::<ErrorBody>(&body)
            .ok()
            .and_then(|body| body.detail);
        recruit_warn!("backend returned {} detail={:?}", status, detail);
        return Err(ApiError::new(
            ApiFailureKind::HttpStatus(status.as_u16()),
            status.to_string(),
        )
        .with_detail(detail));
    }

    serde_json::from_slice(&body)
        .map_err(|err| ApiError::new(ApiFailureKind::Decode, err.to_string()))
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::new(ApiFailureKind::Timeout, err.to_string());
    }
    ApiError::new(ApiFailureKind::Network, err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_is_guessed_from_extension() {
        assert_eq!(guess_mime("cv.PDF"), "application/pdf");
        assert_eq!(guess_mime("cv.doc"), "application/msword");
        assert!(guess_mime("cv.docx").contains("wordprocessingml"));
        assert_eq!(guess_mime("README"), "application/octet-stream");
    }
}
