use std::time::Duration;

use query_logging::{query_debug, query_error};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;
use serde_json::Value;

use crate::prompt::build_prompt;
use crate::{CompletionError, UNKNOWN_ERROR};

pub const DEFAULT_ENDPOINT: &str = "https://openrouter.ai/api/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "deepseek/deepseek-chat:free";
pub const DEFAULT_SITE_URL: &str = "https://your-symptom-checker.com";
pub const DEFAULT_SITE_NAME: &str = "My Symptom Checker";

/// OpenRouter app attribution headers.
const REFERER_HEADER: &str = "HTTP-Referer";
const TITLE_HEADER: &str = "X-Title";

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub endpoint: String,
    pub api_key: String,
    pub model: String,
    pub site_url: String,
    pub site_name: String,
    pub connect_timeout: Duration,
    /// Overall request deadline. `None` leaves the request to the transport.
    pub request_timeout: Option<Duration>,
}

impl ClientSettings {
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            site_url: DEFAULT_SITE_URL.to_string(),
            site_name: DEFAULT_SITE_NAME.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: None,
        }
    }
}

#[async_trait::async_trait]
pub trait CompletionClient: Send + Sync {
    /// Sends one prompt built from `symptoms` and returns the first choice's
    /// message content, or an empty string when the service returned none.
    async fn complete(&self, symptoms: &str) -> Result<String, CompletionError>;
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Clone)]
pub struct OpenRouterClient {
    settings: ClientSettings,
    http: reqwest::Client,
}

impl OpenRouterClient {
    pub fn new(settings: ClientSettings) -> Result<Self, CompletionError> {
        let mut builder = reqwest::Client::builder().connect_timeout(settings.connect_timeout);
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|err| CompletionError::transport(err.to_string()))?;
        Ok(Self { settings, http })
    }

    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }
}

#[async_trait::async_trait]
impl CompletionClient for OpenRouterClient {
    async fn complete(&self, symptoms: &str) -> Result<String, CompletionError> {
        let prompt = build_prompt(symptoms);
        let request = ChatRequest {
            model: &self.settings.model,
            messages: [ChatMessage {
                role: "user",
                content: &prompt,
            }],
        };

        query_debug!(
            "POST {} model={} prompt_len={}",
            self.settings.endpoint,
            self.settings.model,
            prompt.len()
        );

        let response = self
            .http
            .post(&self.settings.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, format!("Bearer {}", self.settings.api_key))
            .header(REFERER_HEADER, &self.settings.site_url)
            .header(TITLE_HEADER, &self.settings.site_name)
            .json(&request)
            .send()
            .await
            .map_err(log_transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(log_transport_error)?;

        if !status.is_success() {
            query_error!("API Error Response: status={} body={}", status, body);
            return Err(CompletionError::HttpStatus {
                status: status.as_u16(),
                detail: error_detail(&body),
            });
        }

        let data: Value = serde_json::from_str(&body).map_err(|err| {
            query_error!("Error during API call: malformed response body: {}", err);
            CompletionError::transport(err.to_string())
        })?;

        Ok(extract_content(&data))
    }
}

fn log_transport_error(err: reqwest::Error) -> CompletionError {
    query_error!("Error during API call: {}", err);
    CompletionError::transport(err.to_string())
}

/// `choices[0].message.content` when it is a string, otherwise empty.
fn extract_content(data: &Value) -> String {
    data.pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Best-effort message from an error body: top-level `message`, then
/// `error.message`. A body that is not JSON yields the generic detail.
fn error_detail(body: &str) -> String {
    let data: Value = serde_json::from_str(body).unwrap_or(Value::Null);
    ["/message", "/error/message"]
        .iter()
        .filter_map(|pointer| data.pointer(pointer).and_then(Value::as_str))
        .find(|message| !message.is_empty())
        .unwrap_or(UNKNOWN_ERROR)
        .to_string()
}
