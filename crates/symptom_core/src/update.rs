use query_logging::{query_debug, query_warn};

use crate::{Effect, FormState, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: FormState, msg: Msg) -> (FormState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            state.set_input(text);
            Vec::new()
        }
        Msg::SubmitRequested => {
            // Single-flight: the disabled button is not the only guard.
            if let Some(request_id) = state.in_flight() {
                query_debug!("Submit ignored, request {} still in flight", request_id);
                return (state, Vec::new());
            }

            state.clear_error();
            if state.input().trim().is_empty() {
                state.reject_empty_input();
                return (state, Vec::new());
            }

            let request_id = state.begin_request();
            vec![Effect::SendQuery {
                request_id,
                symptoms: state.input().to_string(),
            }]
        }
        Msg::SubmitSucceeded { request_id, text } => {
            if state.is_current(request_id) {
                state.finish_with_result(text);
            } else {
                query_warn!("Dropping stale success for request {}", request_id);
            }
            Vec::new()
        }
        Msg::SubmitFailed {
            request_id,
            message,
        } => {
            if state.is_current(request_id) {
                state.finish_with_error(message);
            } else {
                query_warn!("Dropping stale failure for request {}", request_id);
            }
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
