//! Symptom checker core: pure form state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{FormState, RequestId, EMPTY_INPUT_MESSAGE, GENERIC_FAILURE_MESSAGE, NO_VALID_RESPONSE};
pub use update::update;
pub use view_model::{FormViewModel, LOADING_TEXT, SUBMIT_LABEL_BUSY, SUBMIT_LABEL_IDLE};
