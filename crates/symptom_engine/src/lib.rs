//! Symptom checker engine: prompt building, completion client and request execution.
mod client;
mod engine;
mod prompt;
mod types;

pub use client::{
    ClientSettings, CompletionClient, OpenRouterClient, DEFAULT_ENDPOINT, DEFAULT_MODEL,
    DEFAULT_SITE_NAME, DEFAULT_SITE_URL,
};
pub use engine::EngineHandle;
pub use prompt::build_prompt;
pub use types::{CompletionError, EngineEvent, RequestId, TRANSPORT_FALLBACK, UNKNOWN_ERROR};
