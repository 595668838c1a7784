#![allow(dead_code)]

use std::sync::Once;

use recruit_core::{
    update, Candidate, EmailDraft, Effect, FileBlob, Generation, MatchPayload, Msg, Session,
};

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(recruit_logging::initialize_for_tests);
}

pub fn blob(name: &str) -> FileBlob {
    FileBlob::new(name, format!("%PDF {name}").into_bytes())
}

pub fn candidate(name: &str, score: u8, is_selected: bool) -> Candidate {
    Candidate {
        filename: name.to_string(),
        score,
        missing_skills: vec!["Go".to_string()],
        remarks: format!("remarks for {name}"),
        email: EmailDraft::new(format!("Subject for {name}"), format!("Body for {name}")),
        is_selected,
    }
}

pub fn two_candidate_payload() -> MatchPayload {
    MatchPayload {
        jd_text: "Looking for a backend engineer".to_string(),
        candidates: vec![candidate("a.pdf", 72, true), candidate("b.pdf", 40, false)],
        best_index: 0,
    }
}

/// Applies each message in order, collecting every emitted effect.
pub fn apply(state: Session, msgs: impl IntoIterator<Item = Msg>) -> (Session, Vec<Effect>) {
    msgs.into_iter()
        .fold((state, Vec::new()), |(state, mut effects), msg| {
            let (state, new_effects) = update(state, msg);
            effects.extend(new_effects);
            (state, effects)
        })
}

/// A session with JD text and two resumes, ready to submit.
pub fn ready_session() -> Session {
    let (state, _) = apply(
        Session::new(),
        [
            Msg::JdTextChanged("Looking for a backend engineer".to_string()),
            Msg::ResumesSelected(vec![blob("a.pdf"), blob("b.pdf")]),
        ],
    );
    state
}

pub fn submitted_generation(effects: &[Effect]) -> Generation {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::SubmitMatch { generation, .. } | Effect::SubmitGenerate { generation, .. } => {
                Some(*generation)
            }
            _ => None,
        })
        .expect("submit effect")
}

/// Runs a full successful match round trip.
pub fn matched_session() -> Session {
    let (state, effects) = update(ready_session(), Msg::MatchClicked);
    let generation = submitted_generation(&effects);
    let (state, _) = update(
        state,
        Msg::MatchCompleted {
            generation,
            outcome: Ok(two_candidate_payload()),
        },
    );
    state
}
