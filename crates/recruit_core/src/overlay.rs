use std::collections::HashMap;

use crate::{EmailDraft, EmailField, MatchResult};

/// Sparse user edits to candidate emails, keyed by candidate index.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditOverlay {
    drafts: HashMap<usize, EmailDraft>,
}

impl EditOverlay {
    pub fn get(&self, index: usize) -> Option<&EmailDraft> {
        self.drafts.get(&index)
    }

    pub fn is_edited(&self, index: usize) -> bool {
        self.drafts.contains_key(&index)
    }

    pub fn len(&self) -> usize {
        self.drafts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drafts.is_empty()
    }

    pub fn clear(&mut self) {
        self.drafts.clear();
    }

    /// Replaces one field of the effective draft at `index`, keeping the other.
    pub fn update_field(
        &mut self,
        result: Option<&MatchResult>,
        index: usize,
        field: EmailField,
        value: impl Into<String>,
    ) {
        let next = effective_email(self, result, index).with_field(field, value);
        self.drafts.insert(index, next);
    }
}

/// Resolves the email shown for `index`: overlay edit, then server draft,
/// then an empty draft.
///
/// All reads of email content go through here.
pub fn effective_email(
    overlay: &EditOverlay,
    result: Option<&MatchResult>,
    index: usize,
) -> EmailDraft {
    if let Some(edited) = overlay.get(index) {
        return edited.clone();
    }
    result
        .and_then(|result| result.candidate(index))
        .map(|candidate| candidate.email.clone())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Candidate, MatchPayload};

    fn result() -> MatchResult {
        let candidate = Candidate {
            filename: "a.pdf".into(),
            score: 72,
            missing_skills: vec!["Kubernetes".into()],
            remarks: "Strong backend".into(),
            email: EmailDraft::new("Interview invitation", "Dear applicant"),
            is_selected: true,
        };
        MatchResult::from_payload(MatchPayload {
            jd_text: "jd".into(),
            candidates: vec![candidate],
            best_index: 0,
        })
        .unwrap()
    }

    #[test]
    fn falls_back_through_all_three_tiers() {
        let result = result();
        let mut overlay = EditOverlay::default();

        assert_eq!(effective_email(&overlay, None, 0), EmailDraft::default());
        assert_eq!(
            effective_email(&overlay, Some(&result), 0),
            result.candidates()[0].email
        );
        assert_eq!(
            effective_email(&overlay, Some(&result), 5),
            EmailDraft::default()
        );

        overlay.update_field(Some(&result), 0, EmailField::Subject, "Edited");
        assert_eq!(
            effective_email(&overlay, Some(&result), 0),
            EmailDraft::new("Edited", "Dear applicant")
        );
    }

    #[test]
    fn field_updates_are_additive_and_idempotent() {
        let result = result();
        let mut overlay = EditOverlay::default();
        overlay.update_field(Some(&result), 0, EmailField::Subject, "X");
        overlay.update_field(Some(&result), 0, EmailField::Body, "Y");
        let once = overlay.clone();
        overlay.update_field(Some(&result), 0, EmailField::Body, "Y");

        assert_eq!(overlay, once);
        assert_eq!(
            effective_email(&overlay, Some(&result), 0),
            EmailDraft::new("X", "Y")
        );
        assert_eq!(result.candidates()[0].email.subject, "Interview invitation");
    }
}
