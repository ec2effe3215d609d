use symptom_core::{update, FormState, Msg};

#[test]
fn update_is_noop() {
    let state = FormState::new();
    let (next, effects) = update(state.clone(), Msg::NoOp);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}

#[test]
fn tick_is_noop_while_busy() {
    let (state, _) = update(FormState::new(), Msg::InputChanged("cough".to_string()));
    let (state, _) = update(state, Msg::SubmitRequested);
    let (next, effects) = update(state.clone(), Msg::Tick);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}
