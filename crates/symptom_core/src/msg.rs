#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the symptom input box.
    InputChanged(String),
    /// User pressed the submit control.
    SubmitRequested,
    /// The completion endpoint answered with extracted content (possibly empty).
    SubmitSucceeded {
        request_id: crate::RequestId,
        text: String,
    },
    /// The request failed; `message` is the banner text shown to the user.
    SubmitFailed {
        request_id: crate::RequestId,
        message: String,
    },
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
