use std::sync::Arc;

use anyhow::Context;
use query_logging::{query_info, query_warn};
use symptom_core::{Effect, Msg};
use symptom_engine::{ClientSettings, CompletionClient, EngineEvent, EngineHandle, OpenRouterClient};

/// Executes core effects on the engine and turns engine events back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: ClientSettings) -> anyhow::Result<Self> {
        let client = OpenRouterClient::new(settings).context("building HTTP client")?;
        Self::with_client(Arc::new(client))
    }

    pub fn with_client(client: Arc<dyn CompletionClient>) -> anyhow::Result<Self> {
        let engine = EngineHandle::new(client).context("starting request engine")?;
        Ok(Self { engine })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SendQuery {
                    request_id,
                    symptoms,
                } => {
                    query_info!(
                        "SendQuery request_id={} symptoms_len={}",
                        request_id,
                        symptoms.len()
                    );
                    self.engine.submit(request_id, symptoms);
                }
            }
        }
    }

    /// Messages for every engine event that is ready, without blocking.
    pub fn drain(&self) -> Vec<Msg> {
        std::iter::from_fn(|| self.engine.try_recv())
            .map(event_to_msg)
            .collect()
    }

    /// Blocks for the next engine event.
    pub fn wait_next(&self) -> Option<Msg> {
        self.engine.recv().map(event_to_msg)
    }
}

fn event_to_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::QueryCompleted { request_id, result } => match result {
            Ok(text) => Msg::SubmitSucceeded { request_id, text },
            Err(err) => {
                query_warn!("Query {} failed: {}", request_id, err);
                Msg::SubmitFailed {
                    request_id,
                    message: err.to_string(),
                }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use symptom_engine::CompletionError;

    #[test]
    fn failures_carry_the_banner_text() {
        let msg = event_to_msg(EngineEvent::QueryCompleted {
            request_id: 3,
            result: Err(CompletionError::HttpStatus {
                status: 401,
                detail: "invalid key".to_string(),
            }),
        });

        match msg {
            Msg::SubmitFailed {
                request_id,
                message,
            } => {
                assert_eq!(request_id, 3);
                assert!(message.contains("401"));
                assert!(message.contains("invalid key"));
            }
            other => panic!("unexpected message {other:?}"),
        }
    }

    #[test]
    fn successes_pass_text_through() {
        let msg = event_to_msg(EngineEvent::QueryCompleted {
            request_id: 1,
            result: Ok("Rest.".to_string()),
        });
        assert_eq!(
            msg,
            Msg::SubmitSucceeded {
                request_id: 1,
                text: "Rest.".to_string(),
            }
        );
    }
}
