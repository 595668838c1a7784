use crate::{
    EmailDraft, EmploymentType, GeneratorFields, InputMode, Notification, Session,
    SELECTION_THRESHOLD,
};

/// Framing of the draft email, chosen from the backend's `is_selected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailFraming {
    Invitation,
    Rejection,
}

/// Display band for a score. Presentation only; selection comes from the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Passing,
    AutoRejected,
}

impl ScoreBand {
    pub fn for_score(score: u8) -> Self {
        if score >= SELECTION_THRESHOLD {
            ScoreBand::Passing
        } else {
            ScoreBand::AutoRejected
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateRowView {
    pub index: usize,
    pub filename: String,
    pub score: u8,
    pub score_band: ScoreBand,
    pub missing_skills: Vec<String>,
    pub remarks: String,
    pub is_selected: bool,
    pub is_best: bool,
    pub is_focused: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailPanelView {
    pub index: usize,
    pub framing: EmailFraming,
    pub score_band: ScoreBand,
    pub draft: EmailDraft,
    pub edited: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionViewModel {
    pub mode: InputMode,
    pub jd_text: String,
    pub jd_file_name: Option<String>,
    pub generator: GeneratorFields,
    pub employment_types: Vec<EmploymentType>,
    pub resume_names: Vec<String>,
    pub busy: bool,
    pub result_jd_text: Option<String>,
    pub candidates: Vec<CandidateRowView>,
    pub email_panel: Option<EmailPanelView>,
    pub notification: Option<Notification>,
}

impl Session {
    pub fn view(&self) -> SessionViewModel {
        let input = self.input();
        let selected = self.selected();
        let best = self.result().and_then(|result| result.best_index());

        let candidates = self
            .result()
            .map(|result| {
                result
                    .candidates()
                    .iter()
                    .enumerate()
                    .map(|(index, candidate)| CandidateRowView {
                        index,
                        filename: candidate.filename.clone(),
                        score: candidate.score,
                        score_band: ScoreBand::for_score(candidate.score),
                        missing_skills: candidate.missing_skills.clone(),
                        remarks: candidate.remarks.clone(),
                        is_selected: candidate.is_selected,
                        is_best: best == Some(index),
                        is_focused: selected == Some(index),
                    })
                    .collect()
            })
            .unwrap_or_default();

        let email_panel = selected.and_then(|index| {
            let candidate = self.result()?.candidate(index)?;
            Some(EmailPanelView {
                index,
                framing: if candidate.is_selected {
                    EmailFraming::Invitation
                } else {
                    EmailFraming::Rejection
                },
                score_band: ScoreBand::for_score(candidate.score),
                draft: self.effective_email(index),
                edited: self.overlay().is_edited(index),
            })
        });

        SessionViewModel {
            mode: input.mode(),
            jd_text: input.jd_text().to_owned(),
            jd_file_name: input.jd_file().map(|file| file.name.clone()),
            generator: input.generator().clone(),
            employment_types: EmploymentType::ALL.to_vec(),
            resume_names: input.resumes().iter().map(|file| file.name.clone()).collect(),
            busy: self.is_busy(),
            result_jd_text: self.result().map(|result| result.jd_text().to_owned()),
            candidates,
            email_panel,
            notification: self.notification().cloned(),
        }
    }
}
