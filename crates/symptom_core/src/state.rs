use crate::view_model::{FormViewModel, LOADING_TEXT, SUBMIT_LABEL_BUSY, SUBMIT_LABEL_IDLE};

pub type RequestId = u64;

/// Banner text when the user submits blank input.
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter some symptoms to get a diagnosis.";
/// Result text when the service answered but carried no content.
pub const NO_VALID_RESPONSE: &str = "No valid response received from the AI. Please try again.";
/// Banner text for a failure that arrived without any description.
pub const GENERIC_FAILURE_MESSAGE: &str = "An unexpected error occurred: Please try again later.";

/// Form state owned by the symptom query controller.
///
/// Fields are private; all mutation goes through [`crate::update`] so the
/// busy/result/error transitions stay in one place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    input: String,
    busy: bool,
    result: String,
    error: String,
    in_flight: Option<RequestId>,
    next_request_id: RequestId,
    dirty: bool,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            input: String::new(),
            busy: false,
            result: String::new(),
            error: String::new(),
            in_flight: None,
            next_request_id: 1,
            dirty: false,
        }
    }
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> FormViewModel {
        FormViewModel {
            input: self.input.clone(),
            input_enabled: !self.busy,
            error_banner: non_empty(&self.error),
            submit_label: if self.busy {
                SUBMIT_LABEL_BUSY
            } else {
                SUBMIT_LABEL_IDLE
            },
            submit_enabled: !self.busy,
            loading_text: self.busy.then_some(LOADING_TEXT),
            result: non_empty(&self.result),
            busy: self.busy,
            dirty: self.dirty,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn in_flight(&self) -> Option<RequestId> {
        self.in_flight
    }

    /// Returns whether anything visible changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_input(&mut self, text: String) {
        if self.input != text {
            self.input = text;
            self.dirty = true;
        }
    }

    pub(crate) fn clear_error(&mut self) {
        if !self.error.is_empty() {
            self.error.clear();
            self.dirty = true;
        }
    }

    pub(crate) fn reject_empty_input(&mut self) {
        self.error = EMPTY_INPUT_MESSAGE.to_string();
        self.result.clear();
        self.dirty = true;
    }

    /// Clears the previous outcome, marks the form busy and allocates the id
    /// of the request about to be sent.
    pub(crate) fn begin_request(&mut self) -> RequestId {
        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.result.clear();
        self.error.clear();
        self.busy = true;
        self.in_flight = Some(request_id);
        self.dirty = true;
        request_id
    }

    /// Returns true when `request_id` is the outstanding request.
    pub(crate) fn is_current(&self, request_id: RequestId) -> bool {
        self.in_flight == Some(request_id)
    }

    pub(crate) fn finish_with_result(&mut self, text: String) {
        self.result = if text.is_empty() {
            NO_VALID_RESPONSE.to_string()
        } else {
            text
        };
        self.error.clear();
        self.finish();
    }

    pub(crate) fn finish_with_error(&mut self, message: String) {
        self.error = if message.is_empty() {
            GENERIC_FAILURE_MESSAGE.to_string()
        } else {
            message
        };
        self.result.clear();
        self.finish();
    }

    fn finish(&mut self) {
        self.busy = false;
        self.in_flight = None;
        self.dirty = true;
    }
}

fn non_empty(text: &str) -> Option<String> {
    (!text.is_empty()).then(|| text.to_string())
}
