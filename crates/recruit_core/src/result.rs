use crate::SessionError;

/// Scores at or above this value are shown as passing.
pub const SELECTION_THRESHOLD: u8 = 50;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EmailDraft {
    pub subject: String,
    pub body: String,
}

impl EmailDraft {
    pub fn new(subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            body: body.into(),
        }
    }

    pub fn field(&self, field: EmailField) -> &str {
        match field {
            EmailField::Subject => &self.subject,
            EmailField::Body => &self.body,
        }
    }

    /// Returns a copy with only `field` replaced.
    pub fn with_field(&self, field: EmailField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        match field {
            EmailField::Subject => next.subject = value.into(),
            EmailField::Body => next.body = value.into(),
        }
        next
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmailField {
    Subject,
    Body,
}

impl EmailField {
    pub fn label(self) -> &'static str {
        match self {
            EmailField::Subject => "Subject",
            EmailField::Body => "Email body",
        }
    }
}

/// One evaluated resume as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub filename: String,
    pub score: u8,
    pub missing_skills: Vec<String>,
    pub remarks: String,
    pub email: EmailDraft,
    /// Decided by the backend; never recomputed here.
    pub is_selected: bool,
}

/// Rounds a backend score into `0..=100`. Non-finite values become 0.
pub fn normalize_score(raw: f64) -> u8 {
    if !raw.is_finite() {
        return 0;
    }
    raw.round().clamp(0.0, 100.0) as u8
}

/// Unvalidated match response, as decoded off the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchPayload {
    pub jd_text: String,
    pub candidates: Vec<Candidate>,
    pub best_index: i64,
}

/// Validated, read-only match response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    jd_text: String,
    candidates: Vec<Candidate>,
    best_index: usize,
}

impl MatchResult {
    /// Checks `0 <= best_index < len(candidates)` for non-empty results.
    ///
    /// An empty candidate list is accepted and has no best candidate.
    pub fn from_payload(payload: MatchPayload) -> Result<Self, SessionError> {
        let MatchPayload {
            jd_text,
            candidates,
            best_index,
        } = payload;

        if candidates.is_empty() {
            return Ok(Self {
                jd_text,
                candidates,
                best_index: 0,
            });
        }

        match usize::try_from(best_index) {
            Ok(index) if index < candidates.len() => Ok(Self {
                jd_text,
                candidates,
                best_index: index,
            }),
            _ => Err(SessionError::protocol(format!(
                "best_index {best_index} out of range for {} candidates",
                candidates.len()
            ))),
        }
    }

    pub fn jd_text(&self) -> &str {
        &self.jd_text
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn candidate(&self, index: usize) -> Option<&Candidate> {
        self.candidates.get(index)
    }

    /// `None` when there are no candidates.
    pub fn best_index(&self) -> Option<usize> {
        if self.candidates.is_empty() {
            None
        } else {
            Some(self.best_index)
        }
    }

    pub fn best_candidate(&self) -> Option<&Candidate> {
        self.best_index().and_then(|index| self.candidates.get(index))
    }
}
