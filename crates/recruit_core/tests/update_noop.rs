use recruit_core::{update, Msg, Session};

#[test]
fn update_is_noop() {
    let state = Session::new();
    let (next, effects) = update(state.clone(), Msg::NoOp);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}
