use recruit_logging::{recruit_debug, recruit_info};

use crate::{Effect, MatchResult, Msg, NotificationKind, RequestKind, Session, MAX_RESUMES};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: Session, msg: Msg) -> (Session, Vec<Effect>) {
    let effects = match msg {
        Msg::JdTextChanged(text) => {
            state.set_text(text);
            Vec::new()
        }
        Msg::JdFileSelected(file) => {
            let name = file.as_ref().map(|file| file.name.clone());
            state.set_file(file);
            match name {
                Some(name) => {
                    vec![state.notify(format!("Selected: {name}"), NotificationKind::Info)]
                }
                None => Vec::new(),
            }
        }
        Msg::ModeSelected(mode) => {
            state.set_mode(mode);
            Vec::new()
        }
        Msg::GeneratorFieldChanged(field) => {
            state.set_generator_field(field);
            Vec::new()
        }
        Msg::ResumesSelected(files) => {
            let offered = files.len();
            let accepted = state.set_resumes(files);
            if offered > MAX_RESUMES {
                recruit_info!("resume selection truncated from {} to {}", offered, accepted);
            }
            vec![state.notify(
                format!("{accepted} resume(s) selected"),
                NotificationKind::Info,
            )]
        }
        Msg::MatchClicked => match state.begin_match() {
            Ok(effect) => vec![effect],
            Err(err) => vec![state.fail(err)],
        },
        Msg::GenerateClicked => match state.begin_generate() {
            Ok(effect) => vec![effect],
            Err(err) => vec![state.fail(err)],
        },
        Msg::MatchCompleted {
            generation,
            outcome,
        } => {
            if !state.settle_match(generation) {
                recruit_debug!("dropping stale match response generation={}", generation);
                return (state, Vec::new());
            }
            let result = outcome
                .map_err(|failure| failure.into_session_error(RequestKind::Match))
                .and_then(MatchResult::from_payload);
            match result {
                Ok(result) => {
                    recruit_info!(
                        "match generation={} returned {} candidates",
                        generation,
                        result.candidates().len()
                    );
                    state.install_result(result);
                    vec![state.notify(
                        "AI matching completed successfully",
                        NotificationKind::Success,
                    )]
                }
                Err(err) => vec![state.fail(err)],
            }
        }
        Msg::GenerateCompleted {
            generation,
            outcome,
        } => {
            if !state.settle_generate(generation) {
                recruit_debug!("dropping stale generate response generation={}", generation);
                return (state, Vec::new());
            }
            match outcome {
                Ok(jd_text) => {
                    state.apply_generated_text(jd_text);
                    vec![state.notify("AI generated JD successfully", NotificationKind::Success)]
                }
                Err(failure) => vec![state.fail(failure.into_session_error(RequestKind::Generate))],
            }
        }
        Msg::CandidateSelected(index) => {
            if !state.select(index) {
                recruit_debug!("ignoring selection of unknown candidate {}", index);
            }
            Vec::new()
        }
        Msg::EmailFieldEdited {
            index,
            field,
            value,
        } => {
            state.update_email_field(index, field, value);
            Vec::new()
        }
        Msg::CopyClicked { index, field } => {
            let text = state.effective_email(index).field(field).to_owned();
            vec![Effect::CopyToClipboard { field, text }]
        }
        Msg::CopyFinished { field, ok } => {
            let effect = if ok {
                state.notify(format!("{} copied", field.label()), NotificationKind::Success)
            } else {
                state.notify("Failed to copy", NotificationKind::Error)
            };
            vec![effect]
        }
        Msg::NotificationExpired { token } => {
            state.expire_notification(token);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
