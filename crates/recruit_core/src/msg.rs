use crate::{
    EmailField, FileBlob, Generation, GeneratorField, InputMode, MatchPayload, NotificationToken,
    RequestFailure,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the free-text job description.
    JdTextChanged(String),
    /// User picked (or cleared) a job-description file.
    JdFileSelected(Option<FileBlob>),
    /// User switched between manual / upload / generate panels.
    ModeSelected(InputMode),
    /// User edited one field of the generator form.
    GeneratorFieldChanged(GeneratorField),
    /// User picked resume files; more than ten are truncated.
    ResumesSelected(Vec<FileBlob>),
    /// User clicked "Match".
    MatchClicked,
    /// User clicked "Generate JD".
    GenerateClicked,
    /// Backend answered a match request.
    MatchCompleted {
        generation: Generation,
        outcome: Result<MatchPayload, RequestFailure>,
    },
    /// Backend answered a generate request.
    GenerateCompleted {
        generation: Generation,
        outcome: Result<String, RequestFailure>,
    },
    /// User focused a candidate row.
    CandidateSelected(usize),
    /// User edited the subject or body of a candidate email.
    EmailFieldEdited {
        index: usize,
        field: EmailField,
        value: String,
    },
    /// User clicked a copy button.
    CopyClicked { index: usize, field: EmailField },
    /// Clipboard write finished.
    CopyFinished { field: EmailField, ok: bool },
    /// Auto-clear timer fired.
    NotificationExpired { token: NotificationToken },
    /// Fallback for placeholder wiring.
    NoOp,
}
