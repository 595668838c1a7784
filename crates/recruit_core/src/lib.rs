//! Recruiter core: pure session state machine and view-model helpers.
mod effect;
mod error;
mod input;
mod msg;
mod notify;
mod overlay;
mod result;
mod state;
mod update;
mod view_model;

pub use effect::{Effect, MatchSubmission};
pub use error::{
    RequestFailure, RequestKind, SessionError, MISSING_GENERATOR_INPUT, MISSING_MATCH_INPUT,
    PROTOCOL_FAILURE,
};
pub use input::{
    EmploymentType, FileBlob, GeneratorField, GeneratorFields, InputMode, InputModel, JdSource,
    MAX_RESUMES,
};
pub use msg::Msg;
pub use notify::{
    Notification, NotificationKind, NotificationSlot, NotificationToken, NOTIFICATION_TTL,
};
pub use overlay::{effective_email, EditOverlay};
pub use result::{
    normalize_score, Candidate, EmailDraft, EmailField, MatchPayload, MatchResult,
    SELECTION_THRESHOLD,
};
pub use state::{Generation, RequestSlot, Session};
pub use update::update;
pub use view_model::{
    CandidateRowView, EmailFraming, EmailPanelView, ScoreBand, SessionViewModel,
};
