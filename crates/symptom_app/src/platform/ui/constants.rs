pub const TITLE: &str = "Symptom Checker";
pub const INPUT_LABEL: &str = "Enter Symptoms:";
pub const INPUT_PLACEHOLDER: &str = "e.g., headache, fever, sore throat, cough";
pub const ERROR_PREFIX: &str = "Error:";
pub const RESULT_TITLE: &str = "MEDICO Response";
pub const KEY_HINTS: &str = "Enter: check symptoms | Backspace: delete | Esc/Ctrl-C: quit";
