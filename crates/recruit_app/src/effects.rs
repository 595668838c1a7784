use std::sync::mpsc;

use recruit_core::{
    normalize_score, Candidate, EmailDraft, Effect, EmploymentType, FileBlob, GeneratorFields,
    JdSource, MatchPayload, MatchSubmission, Msg, RequestFailure,
};
use recruit_engine::{
    ApiError, ApiFailureKind, EngineEvent, EngineHandle, GenerateJdRequest, MatchRequest,
    MatchResponse, UploadFile,
};
use recruit_logging::{recruit_info, recruit_warn};

use crate::clipboard::Clipboard;
use crate::timer::NotificationTimer;

/// Executes core effects against the engine, the timer and the clipboard.
pub struct EffectRunner {
    engine: EngineHandle,
    timer: NotificationTimer,
    clipboard: Box<dyn Clipboard>,
    msg_tx: mpsc::Sender<Msg>,
}

impl EffectRunner {
    pub fn new(
        engine: EngineHandle,
        clipboard: Box<dyn Clipboard>,
        msg_tx: mpsc::Sender<Msg>,
    ) -> Self {
        Self {
            engine,
            timer: NotificationTimer::new(msg_tx.clone()),
            clipboard,
            msg_tx,
        }
    }

    pub fn run(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SubmitMatch {
                    generation,
                    submission,
                } => {
                    recruit_info!(
                        "SubmitMatch generation={} resumes={}",
                        generation,
                        submission.resumes.len()
                    );
                    self.engine
                        .submit_match(generation, to_match_request(submission));
                }
                Effect::SubmitGenerate { generation, fields } => {
                    recruit_info!("SubmitGenerate generation={}", generation);
                    self.engine
                        .submit_generate(generation, to_generate_request(fields));
                }
                Effect::ScheduleNotificationClear { token, after } => {
                    self.timer.schedule(token, after);
                }
                Effect::CopyToClipboard { field, text } => {
                    // Clipboard failure is reported, never fatal.
                    let ok = match self.clipboard.set_text(&text) {
                        Ok(()) => true,
                        Err(err) => {
                            recruit_warn!("copy failed: {}", err);
                            false
                        }
                    };
                    let _ = self.msg_tx.send(Msg::CopyFinished { field, ok });
                }
            }
        }
    }

    /// Next engine completion, translated into a core message.
    pub fn poll_engine(&self) -> Option<Msg> {
        self.engine.try_recv().map(map_event)
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::MatchCompleted { generation, result } => Msg::MatchCompleted {
            generation,
            outcome: result.map(map_match_response).map_err(map_api_error),
        },
        EngineEvent::GenerateCompleted { generation, result } => Msg::GenerateCompleted {
            generation,
            outcome: result.map_err(map_api_error),
        },
    }
}

fn to_upload(file: FileBlob) -> UploadFile {
    UploadFile::new(file.name, file.bytes)
}

fn to_match_request(submission: MatchSubmission) -> MatchRequest {
    let (jd_file, jd_text) = match submission.jd {
        JdSource::File(file) => (Some(to_upload(file)), None),
        JdSource::Text(text) => (None, Some(text)),
    };
    MatchRequest {
        jd_file,
        jd_text,
        resumes: submission.resumes.into_iter().map(to_upload).collect(),
    }
}

fn to_generate_request(fields: GeneratorFields) -> GenerateJdRequest {
    GenerateJdRequest {
        job_title: fields.job_title,
        years_experience: fields.years_experience,
        must_have_skills: fields.must_have_skills,
        company_name: fields.company_name,
        employment_type: match fields.employment_type {
            EmploymentType::FullTime => recruit_engine::EmploymentType::FullTime,
            EmploymentType::PartTime => recruit_engine::EmploymentType::PartTime,
            EmploymentType::Contract => recruit_engine::EmploymentType::Contract,
        },
        industry: fields.industry,
        location: fields.location,
    }
}

fn map_match_response(response: MatchResponse) -> MatchPayload {
    MatchPayload {
        jd_text: response.jd_text,
        candidates: response
            .candidates
            .into_iter()
            .map(|candidate| Candidate {
                filename: candidate.filename,
                score: normalize_score(candidate.score),
                missing_skills: candidate.missing_skills,
                remarks: candidate.remarks,
                email: EmailDraft::new(candidate.email.subject, candidate.email.body),
                is_selected: candidate.is_selected,
            })
            .collect(),
        best_index: response.best_index,
    }
}

fn map_api_error(err: ApiError) -> RequestFailure {
    match err.kind {
        ApiFailureKind::HttpStatus(status) => RequestFailure::Rejected {
            status,
            detail: err.detail,
        },
        ApiFailureKind::Decode => RequestFailure::Malformed {
            reason: err.message,
        },
        ApiFailureKind::InvalidUrl | ApiFailureKind::Timeout | ApiFailureKind::Network => {
            RequestFailure::Transport {
                reason: err.to_string(),
            }
        }
    }
}
