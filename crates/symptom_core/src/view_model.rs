pub const SUBMIT_LABEL_IDLE: &str = "Check Symptoms";
pub const SUBMIT_LABEL_BUSY: &str = "Checking...";
pub const LOADING_TEXT: &str = "Asking MEDICO for a diagnosis...";

/// Everything a renderer needs to draw the form, derived from `FormState`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormViewModel {
    pub input: String,
    pub input_enabled: bool,
    pub error_banner: Option<String>,
    pub submit_label: &'static str,
    pub submit_enabled: bool,
    pub loading_text: Option<&'static str>,
    pub result: Option<String>,
    pub busy: bool,
    pub dirty: bool,
}
