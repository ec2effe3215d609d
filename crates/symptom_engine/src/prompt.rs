/// Wraps the user's symptom text in the fixed diagnosis prompt.
///
/// The text is interpolated verbatim; trimming and validation happen in the
/// form before a request is ever issued.
pub fn build_prompt(symptoms: &str) -> String {
    format!(
        "I have the following symptoms: {symptoms}. Please tell me the possible diseases, \
         recommended medicines, precautions, and advice."
    )
}
