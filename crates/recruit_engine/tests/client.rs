use std::time::Duration;

use pretty_assertions::assert_eq;
use recruit_engine::{
    ApiFailureKind, ApiSettings, EmploymentType, GenerateJdRequest, MatchRequest, RecruitApi,
    ReqwestApiClient, UploadFile,
};
use serde_json::json;
use wiremock::matchers::{body_json, body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ReqwestApiClient {
    ReqwestApiClient::new(ApiSettings::with_base_url(server.uri())).expect("client")
}

fn resume(name: &str) -> UploadFile {
    UploadFile::new(name, format!("resume body of {name}").into_bytes())
}

fn match_body() -> serde_json::Value {
    json!({
        "jd_text": "Looking for a backend engineer",
        "candidates": [
            {
                "filename": "a.pdf",
                "score": 72.0,
                "missing_skills": ["Kubernetes"],
                "remarks": "Solid backend experience",
                "email": {"subject": "Interview invitation", "body": "Dear candidate"},
                "is_selected": true
            },
            {
                "filename": "b.pdf",
                "score": 40,
                "missing_skills": [],
                "remarks": "Mostly frontend",
                "email": {"subject": "Your application", "body": "Thank you"},
                "is_selected": false
            }
        ],
        "best_index": 0
    })
}

fn generate_request() -> GenerateJdRequest {
    GenerateJdRequest {
        job_title: "Backend Engineer".into(),
        years_experience: 4,
        must_have_skills: "Rust, PostgreSQL".into(),
        company_name: "Acme".into(),
        employment_type: EmploymentType::FullTime,
        industry: "Fintech".into(),
        location: "Remote".into(),
    }
}

#[tokio::test]
async fn match_posts_multipart_and_decodes_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/match"))
        .and(body_string_contains("name=\"jd_text\""))
        .and(body_string_contains("Looking for a backend engineer"))
        .and(body_string_contains("filename=\"a.pdf\""))
        .and(body_string_contains("filename=\"b.pdf\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(match_body()))
        .expect(1)
        .mount(&server)
        .await;

    let request = MatchRequest {
        jd_file: None,
        jd_text: Some("Looking for a backend engineer".into()),
        resumes: vec![resume("a.pdf"), resume("b.pdf")],
    };
    let response = client_for(&server)
        .match_resumes(request)
        .await
        .expect("match ok");

    assert_eq!(response.best_index, 0);
    assert_eq!(response.candidates.len(), 2);
    assert_eq!(response.candidates[0].filename, "a.pdf");
    assert_eq!(response.candidates[0].score, 72.0);
    assert_eq!(response.candidates[0].missing_skills, vec!["Kubernetes"]);
    assert!(!response.candidates[1].is_selected);
    assert_eq!(response.candidates[1].email.subject, "Your application");
}

#[tokio::test]
async fn match_sends_file_instead_of_text_when_both_present() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/match"))
        .respond_with(ResponseTemplate::new(200).set_body_json(match_body()))
        .mount(&server)
        .await;

    let request = MatchRequest {
        jd_file: Some(UploadFile::new("jd.pdf", b"%PDF jd".to_vec())),
        jd_text: Some("ignored text".into()),
        resumes: vec![resume("a.pdf"), resume("b.pdf"), resume("c.docx")],
    };
    client_for(&server)
        .match_resumes(request)
        .await
        .expect("match ok");

    let received = server.received_requests().await.expect("recording enabled");
    assert_eq!(received.len(), 1);
    let body = String::from_utf8_lossy(&received[0].body);
    assert!(body.contains("name=\"jd_file\"; filename=\"jd.pdf\""));
    assert!(body.contains("application/pdf"));
    assert!(!body.contains("name=\"jd_text\""));
    assert!(!body.contains("ignored text"));
    assert_eq!(body.matches("name=\"resumes\"").count(), 3);
}

#[tokio::test]
async fn error_detail_is_extracted() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/match"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({"detail": "Provide jd_text or jd_file"})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .match_resumes(MatchRequest::default())
        .await
        .unwrap_err();
    assert_eq!(err.kind, ApiFailureKind::HttpStatus(400));
    assert_eq!(err.detail.as_deref(), Some("Provide jd_text or jd_file"));
}

#[tokio::test]
async fn unparseable_error_body_has_no_detail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate_jd"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .generate_jd(generate_request())
        .await
        .unwrap_err();
    assert_eq!(err.kind, ApiFailureKind::HttpStatus(502));
    assert_eq!(err.detail, None);
}

#[tokio::test]
async fn non_string_detail_is_treated_as_missing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate_jd"))
        .respond_with(ResponseTemplate::new(422).set_body_json(
            json!({"detail": [{"loc": ["body", "job_title"], "msg": "field required"}]}),
        ))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .generate_jd(generate_request())
        .await
        .unwrap_err();
    assert_eq!(err.kind, ApiFailureKind::HttpStatus(422));
    assert_eq!(err.detail, None);
}

#[tokio::test]
async fn malformed_success_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/match"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"jd_text": "x"})))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .match_resumes(MatchRequest {
            jd_text: Some("jd".into()),
            resumes: vec![resume("a.pdf")],
            ..MatchRequest::default()
        })
        .await
        .unwrap_err();
    assert_eq!(err.kind, ApiFailureKind::Decode);
}

#[tokio::test]
async fn generate_posts_json_with_employment_label() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate_jd"))
        .and(body_json(json!({
            "job_title": "Backend Engineer",
            "years_experience": 4,
            "must_have_skills": "Rust, PostgreSQL",
            "company_name": "Acme",
            "employment_type": "Full-time",
            "industry": "Fintech",
            "location": "Remote"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"jd_text": "# Backend Engineer"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let text = client_for(&server)
        .generate_jd(generate_request())
        .await
        .expect("generate ok");
    assert_eq!(text, "# Backend Engineer");
}

#[tokio::test]
async fn slow_backend_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate_jd"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!({"jd_text": "late"})),
        )
        .mount(&server)
        .await;

    let settings = ApiSettings {
        request_timeout: Duration::from_millis(50),
        ..ApiSettings::with_base_url(server.uri())
    };
    let client = ReqwestApiClient::new(settings).expect("client");

    let err = client.generate_jd(generate_request()).await.unwrap_err();
    assert_eq!(err.kind, ApiFailureKind::Timeout);
}

#[tokio::test]
async fn unreachable_backend_is_network_error() {
    let client =
        ReqwestApiClient::new(ApiSettings::with_base_url("http://127.0.0.1:9")).expect("client");
    let err = client.health().await.unwrap_err();
    assert!(matches!(
        err.kind,
        ApiFailureKind::Network | ApiFailureKind::Timeout
    ));
}

#[tokio::test]
async fn health_check_reports_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .mount(&server)
        .await;

    client_for(&server).health().await.expect("healthy");
}

#[test]
fn invalid_base_url_is_reported() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let client = ReqwestApiClient::new(ApiSettings::with_base_url("not a url")).unwrap();
    let err = runtime.block_on(client.health()).unwrap_err();
    assert_eq!(err.kind, ApiFailureKind::InvalidUrl);
}
