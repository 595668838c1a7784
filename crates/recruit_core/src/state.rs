use crate::overlay::effective_email;
use crate::{
    EditOverlay, EmailDraft, EmailField, Effect, FileBlob, GeneratorField, InputMode, InputModel,
    MatchResult, MatchSubmission, Notification, NotificationKind, NotificationSlot,
    NotificationToken, SessionError, MISSING_GENERATOR_INPUT, MISSING_MATCH_INPUT,
};

/// Monotonic tag identifying one issued request of a given kind.
pub type Generation = u64;

/// Tracks the latest issued generation of one request kind and whether it is
/// still awaiting a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RequestSlot {
    last: Generation,
    in_flight: Option<Generation>,
}

impl RequestSlot {
    pub fn in_flight(&self) -> Option<Generation> {
        self.in_flight
    }

    fn issue(&mut self) -> Generation {
        self.last += 1;
        self.in_flight = Some(self.last);
        self.last
    }

    /// Marks `generation` as answered. Returns `false` for superseded or
    /// unknown generations, which must be ignored.
    fn settle(&mut self, generation: Generation) -> bool {
        if self.in_flight == Some(generation) {
            self.in_flight = None;
            true
        } else {
            false
        }
    }
}

/// The whole client session. Mutated only through [`crate::update`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    input: InputModel,
    result: Option<MatchResult>,
    selected: Option<usize>,
    overlay: EditOverlay,
    match_slot: RequestSlot,
    generate_slot: RequestSlot,
    notification: NotificationSlot,
    last_error: Option<SessionError>,
    dirty: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &InputModel {
        &self.input
    }

    pub fn result(&self) -> Option<&MatchResult> {
        self.result.as_ref()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn overlay(&self) -> &EditOverlay {
        &self.overlay
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.current()
    }

    pub fn last_error(&self) -> Option<&SessionError> {
        self.last_error.as_ref()
    }

    pub fn match_slot(&self) -> RequestSlot {
        self.match_slot
    }

    pub fn generate_slot(&self) -> RequestSlot {
        self.generate_slot
    }

    /// True while any request is awaiting its response.
    pub fn is_busy(&self) -> bool {
        self.match_slot.in_flight.is_some() || self.generate_slot.in_flight.is_some()
    }

    pub fn effective_email(&self, index: usize) -> EmailDraft {
        effective_email(&self.overlay, self.result.as_ref(), index)
    }

    /// Returns whether the state changed since the last call and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn notify(&mut self, message: impl Into<String>, kind: NotificationKind) -> Effect {
        self.mark_dirty();
        self.notification.notify(message, kind)
    }

    pub(crate) fn expire_notification(&mut self, token: NotificationToken) {
        if self.notification.expire(token) {
            self.mark_dirty();
        }
    }

    /// Records `err` and surfaces it as an error notification.
    pub(crate) fn fail(&mut self, err: SessionError) -> Effect {
        if let SessionError::Protocol(reason) = &err {
            recruit_logging::recruit_warn!("protocol violation: {}", reason);
        }
        let message = err.to_string();
        self.last_error = Some(err);
        self.notify(message, NotificationKind::Error)
    }

    // --- input model ---

    pub(crate) fn set_text(&mut self, text: String) {
        self.input.set_text(text);
        self.mark_dirty();
    }

    pub(crate) fn set_file(&mut self, file: Option<FileBlob>) {
        if file.is_some() {
            self.input.set_mode(InputMode::Upload);
        }
        self.input.set_file(file);
        self.mark_dirty();
    }

    pub(crate) fn set_mode(&mut self, mode: InputMode) {
        if self.input.mode() != mode {
            self.input.set_mode(mode);
            self.mark_dirty();
        }
    }

    pub(crate) fn set_generator_field(&mut self, field: GeneratorField) {
        self.input.set_generator_field(field);
        self.mark_dirty();
    }

    pub(crate) fn set_resumes(&mut self, files: Vec<FileBlob>) -> usize {
        self.mark_dirty();
        self.input.set_resumes(files)
    }

    // --- request orchestration ---

    /// Validates inputs, clears the previous result and issues a new match
    /// generation.
    pub(crate) fn begin_match(&mut self) -> Result<Effect, SessionError> {
        let jd = match self.input.resolve_jd() {
            Some(jd) if !self.input.resumes().is_empty() => jd,
            _ => return Err(SessionError::validation(MISSING_MATCH_INPUT)),
        };

        self.clear_result();
        self.last_error = None;
        let generation = self.match_slot.issue();
        self.mark_dirty();

        Ok(Effect::SubmitMatch {
            generation,
            submission: MatchSubmission {
                jd,
                resumes: self.input.resumes().to_vec(),
            },
        })
    }

    pub(crate) fn begin_generate(&mut self) -> Result<Effect, SessionError> {
        if !self.input.generator().is_submittable() {
            return Err(SessionError::validation(MISSING_GENERATOR_INPUT));
        }
        self.last_error = None;
        let generation = self.generate_slot.issue();
        self.mark_dirty();

        Ok(Effect::SubmitGenerate {
            generation,
            fields: self.input.generator().clone(),
        })
    }

    pub(crate) fn settle_match(&mut self, generation: Generation) -> bool {
        let current = self.match_slot.settle(generation);
        if current {
            self.mark_dirty();
        }
        current
    }

    pub(crate) fn settle_generate(&mut self, generation: Generation) -> bool {
        let current = self.generate_slot.settle(generation);
        if current {
            self.mark_dirty();
        }
        current
    }

    /// Installs a new result and focuses its best candidate.
    pub(crate) fn install_result(&mut self, result: MatchResult) {
        self.overlay.clear();
        self.selected = result.best_index();
        self.result = Some(result);
        self.mark_dirty();
    }

    pub(crate) fn apply_generated_text(&mut self, jd_text: String) {
        self.input.set_text(jd_text);
        self.input.set_mode(InputMode::Manual);
        self.mark_dirty();
    }

    fn clear_result(&mut self) {
        self.result = None;
        self.selected = None;
        self.overlay.clear();
    }

    // --- selection & overlay ---

    /// Focuses `index` if it addresses a candidate of the current result.
    pub(crate) fn select(&mut self, index: usize) -> bool {
        let in_range = self
            .result
            .as_ref()
            .is_some_and(|result| index < result.candidates().len());
        if in_range && self.selected != Some(index) {
            self.selected = Some(index);
            self.mark_dirty();
        }
        in_range
    }

    pub(crate) fn update_email_field(&mut self, index: usize, field: EmailField, value: String) {
        self.overlay
            .update_field(self.result.as_ref(), index, field, value);
        self.mark_dirty();
    }
}
