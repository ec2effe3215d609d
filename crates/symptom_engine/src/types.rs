pub type RequestId = u64;

/// Detail used when an error body carries no usable message.
pub const UNKNOWN_ERROR: &str = "Unknown error.";
/// Description used when a transport failure has no text of its own.
pub const TRANSPORT_FALLBACK: &str = "Please try again later.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    QueryCompleted {
        request_id: RequestId,
        /// Extracted `choices[0].message.content`, empty when absent.
        result: Result<String, CompletionError>,
    },
}

/// Why a completion request produced no result. The `Display` text is the
/// banner shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompletionError {
    #[error(
        "API request failed with status {status}. Error: {detail} \
         Please check your OpenRouter API key and permissions."
    )]
    HttpStatus { status: u16, detail: String },
    #[error("An unexpected error occurred: {0}")]
    Transport(String),
}

impl CompletionError {
    pub(crate) fn transport(description: impl Into<String>) -> Self {
        let description = description.into();
        if description.trim().is_empty() {
            Self::Transport(TRANSPORT_FALLBACK.to_string())
        } else {
            Self::Transport(description)
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            CompletionError::HttpStatus { status, .. } => Some(*status),
            CompletionError::Transport(_) => None,
        }
    }
}
