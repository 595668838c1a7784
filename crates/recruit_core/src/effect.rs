use std::time::Duration;

use crate::{EmailField, FileBlob, Generation, GeneratorFields, JdSource, NotificationToken};

/// Side effects requested by [`crate::update`]; executed by the host runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    SubmitMatch {
        generation: Generation,
        submission: MatchSubmission,
    },
    SubmitGenerate {
        generation: Generation,
        fields: GeneratorFields,
    },
    /// Arm the single auto-clear timer, replacing any pending one.
    ScheduleNotificationClear {
        token: NotificationToken,
        after: Duration,
    },
    CopyToClipboard { field: EmailField, text: String },
}

/// Payload of a match request: one resolved job description and 1..=10 resumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSubmission {
    pub jd: JdSource,
    pub resumes: Vec<FileBlob>,
}
