mod support;

use recruit_core::{update, Effect, Msg, Session, NOTIFICATION_TTL};
use support::{blob, init_logging};

fn scheduled_token(effects: &[Effect]) -> u64 {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::ScheduleNotificationClear { token, after } => {
                assert_eq!(*after, NOTIFICATION_TTL);
                Some(*token)
            }
            _ => None,
        })
        .expect("schedule effect")
}

#[test]
fn expiry_clears_current_notification() {
    init_logging();
    let (state, effects) = update(Session::new(), Msg::ResumesSelected(vec![blob("a.pdf")]));
    let token = scheduled_token(&effects);
    assert!(state.notification().is_some());

    let (mut state, _) = update(state, Msg::NotificationExpired { token });
    assert!(state.notification().is_none());
    assert!(state.consume_dirty());
}

#[test]
fn newer_notification_preempts_older_timer() {
    init_logging();
    let (state, first) = update(Session::new(), Msg::ResumesSelected(vec![blob("a.pdf")]));
    let old_token = scheduled_token(&first);
    let (mut state, second) = update(state, Msg::JdFileSelected(Some(blob("jd.pdf"))));
    let new_token = scheduled_token(&second);
    assert_ne!(old_token, new_token);
    assert!(state.consume_dirty());

    let (mut state, _) = update(state, Msg::NotificationExpired { token: old_token });
    assert!(!state.consume_dirty());
    assert_eq!(state.notification().unwrap().message, "Selected: jd.pdf");

    let (state, _) = update(state, Msg::NotificationExpired { token: new_token });
    assert!(state.notification().is_none());
}
