use std::sync::Once;

use pretty_assertions::assert_eq;
use symptom_core::{
    update, Effect, FormState, Msg, EMPTY_INPUT_MESSAGE, GENERIC_FAILURE_MESSAGE,
    NO_VALID_RESPONSE, SUBMIT_LABEL_IDLE,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(query_logging::initialize_for_tests);
}

fn submit(state: FormState, input: &str) -> (FormState, u64) {
    let (state, _) = update(state, Msg::InputChanged(input.to_string()));
    let (state, effects) = update(state, Msg::SubmitRequested);
    let request_id = effects
        .iter()
        .map(|effect| match effect {
            Effect::SendQuery { request_id, .. } => *request_id,
        })
        .next()
        .expect("send effect");
    (state, request_id)
}

#[test]
fn success_shows_exact_text_and_reenables_form() {
    init_logging();
    let (state, request_id) = submit(FormState::new(), "headache, fever");
    let (mut state, effects) = update(
        state,
        Msg::SubmitSucceeded {
            request_id,
            text: "Possible flu. Rest and hydrate.".to_string(),
        },
    );
    let view = state.view();

    assert!(effects.is_empty());
    assert_eq!(view.result.as_deref(), Some("Possible flu. Rest and hydrate."));
    assert_eq!(view.error_banner, None);
    assert!(!view.busy);
    assert!(view.submit_enabled);
    assert!(view.input_enabled);
    assert_eq!(view.submit_label, SUBMIT_LABEL_IDLE);
    assert!(state.consume_dirty());
}

#[test]
fn success_text_is_kept_verbatim() {
    init_logging();
    let text = "  **Flu**\n\n- rest\n- fluids  ".to_string();
    let (state, request_id) = submit(FormState::new(), "fever");
    let (state, _) = update(
        state,
        Msg::SubmitSucceeded {
            request_id,
            text: text.clone(),
        },
    );

    assert_eq!(state.view().result, Some(text));
}

#[test]
fn empty_success_uses_fallback_result() {
    init_logging();
    let (state, request_id) = submit(FormState::new(), "fever");
    let (state, _) = update(
        state,
        Msg::SubmitSucceeded {
            request_id,
            text: String::new(),
        },
    );
    let view = state.view();

    assert_eq!(view.result.as_deref(), Some(NO_VALID_RESPONSE));
    assert_eq!(view.error_banner, None);
    assert!(!view.busy);
}

#[test]
fn service_failure_sets_banner_and_keeps_result_empty() {
    init_logging();
    let (state, request_id) = submit(FormState::new(), "fever");
    let message = "API request failed with status 401. Error: invalid key Please check your OpenRouter API key and permissions.";
    let (state, _) = update(
        state,
        Msg::SubmitFailed {
            request_id,
            message: message.to_string(),
        },
    );
    let view = state.view();

    let banner = view.error_banner.expect("error banner");
    assert!(banner.contains("401"));
    assert!(banner.contains("invalid key"));
    assert_eq!(view.result, None);
    assert!(!view.busy);
}

#[test]
fn failure_without_description_uses_generic_banner() {
    init_logging();
    let (state, request_id) = submit(FormState::new(), "fever");
    let (state, _) = update(
        state,
        Msg::SubmitFailed {
            request_id,
            message: String::new(),
        },
    );

    assert_eq!(
        state.view().error_banner.as_deref(),
        Some(GENERIC_FAILURE_MESSAGE)
    );
    assert!(!state.is_busy());
}

#[test]
fn new_submit_clears_previous_result() {
    init_logging();
    let (state, request_id) = submit(FormState::new(), "fever");
    let (state, _) = update(
        state,
        Msg::SubmitSucceeded {
            request_id,
            text: "Rest.".to_string(),
        },
    );

    let (state, second_id) = submit(state, "fever, rash");
    assert_eq!(second_id, request_id + 1);
    assert_eq!(state.view().result, None);
    assert!(state.is_busy());
}

#[test]
fn empty_submit_after_result_shows_only_the_error() {
    init_logging();
    let (state, request_id) = submit(FormState::new(), "fever");
    let (state, _) = update(
        state,
        Msg::SubmitSucceeded {
            request_id,
            text: "Rest.".to_string(),
        },
    );

    let (state, _) = update(state, Msg::InputChanged("   ".to_string()));
    let (state, effects) = update(state, Msg::SubmitRequested);
    let view = state.view();

    assert!(effects.is_empty());
    assert_eq!(view.error_banner.as_deref(), Some(EMPTY_INPUT_MESSAGE));
    assert_eq!(view.result, None);
}

#[test]
fn stale_completions_are_ignored() {
    init_logging();
    let (state, first_id) = submit(FormState::new(), "fever");
    let (state, _) = update(
        state,
        Msg::SubmitFailed {
            request_id: first_id,
            message: "An unexpected error occurred: connection reset".to_string(),
        },
    );
    let (state, second_id) = submit(state, "fever");

    let (state, _) = update(
        state,
        Msg::SubmitSucceeded {
            request_id: first_id,
            text: "late answer".to_string(),
        },
    );
    assert!(state.is_busy());
    assert_eq!(state.in_flight(), Some(second_id));
    assert_eq!(state.view().result, None);

    let (state, _) = update(
        state,
        Msg::SubmitSucceeded {
            request_id: second_id,
            text: "fresh answer".to_string(),
        },
    );
    assert!(!state.is_busy());
    assert_eq!(state.view().result.as_deref(), Some("fresh answer"));
}

#[test]
fn completion_when_idle_changes_nothing() {
    init_logging();
    let state = FormState::new();
    let (next, effects) = update(
        state.clone(),
        Msg::SubmitSucceeded {
            request_id: 42,
            text: "unsolicited".to_string(),
        },
    );

    assert_eq!(next, state);
    assert!(effects.is_empty());
}
