use crate::RequestId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue one completion request for the raw (untrimmed) symptom text.
    SendQuery {
        request_id: RequestId,
        symptoms: String,
    },
}
