//! Headless mode: one submission through the same update cycle as the form.

use std::process::ExitCode;

use anyhow::Context;
use symptom_core::{update, FormState, FormViewModel, Msg};
use symptom_engine::ClientSettings;

use super::effects::EffectRunner;
use super::ui::constants::ERROR_PREFIX;

pub fn run_once(settings: ClientSettings, symptoms: &str) -> anyhow::Result<ExitCode> {
    let runner = EffectRunner::new(settings)?;
    let view = query_once(&runner, symptoms)?;

    if let Some(error) = view.error_banner {
        eprintln!("{ERROR_PREFIX} {error}");
        return Ok(ExitCode::FAILURE);
    }
    if let Some(result) = view.result {
        println!("{result}");
    }
    Ok(ExitCode::SUCCESS)
}

/// Submits `symptoms` and blocks until the form is idle again.
pub fn query_once(runner: &EffectRunner, symptoms: &str) -> anyhow::Result<FormViewModel> {
    let mut state = FormState::new();
    for msg in [Msg::InputChanged(symptoms.to_string()), Msg::SubmitRequested] {
        state = dispatch(state, msg, runner);
    }

    while state.is_busy() {
        let msg = runner
            .wait_next()
            .context("request engine stopped before answering")?;
        state = dispatch(state, msg, runner);
    }

    Ok(state.view())
}

fn dispatch(state: FormState, msg: Msg, runner: &EffectRunner) -> FormState {
    let (state, effects) = update(state, msg);
    runner.enqueue(effects);
    state
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use symptom_core::{EMPTY_INPUT_MESSAGE, NO_VALID_RESPONSE};
    use symptom_engine::{CompletionClient, CompletionError};

    use super::*;

    struct ScriptedClient {
        calls: AtomicUsize,
        reply: Result<String, CompletionError>,
    }

    impl ScriptedClient {
        fn new(reply: Result<String, CompletionError>) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                reply,
            })
        }
    }

    #[async_trait::async_trait]
    impl CompletionClient for ScriptedClient {
        async fn complete(&self, _symptoms: &str) -> Result<String, CompletionError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.reply.clone()
        }
    }

    fn run(client: Arc<ScriptedClient>, symptoms: &str) -> FormViewModel {
        let runner = EffectRunner::with_client(client).expect("runner");
        query_once(&runner, symptoms).expect("query")
    }

    #[test]
    fn success_returns_the_exact_text() {
        let client = ScriptedClient::new(Ok("Possible flu. Rest and hydrate.".to_string()));
        let view = run(client.clone(), "headache, fever");

        assert_eq!(view.result.as_deref(), Some("Possible flu. Rest and hydrate."));
        assert_eq!(view.error_banner, None);
        assert!(view.submit_enabled);
        assert_eq!(client.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn empty_reply_shows_the_fallback() {
        let view = run(ScriptedClient::new(Ok(String::new())), "fever");
        assert_eq!(view.result.as_deref(), Some(NO_VALID_RESPONSE));
    }

    #[test]
    fn blank_input_never_reaches_the_client() {
        let client = ScriptedClient::new(Ok("unused".to_string()));
        let view = run(client.clone(), "   ");

        assert_eq!(view.error_banner.as_deref(), Some(EMPTY_INPUT_MESSAGE));
        assert_eq!(client.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn transport_failure_returns_to_idle_with_banner() {
        let client = ScriptedClient::new(Err(CompletionError::Transport(
            "connection refused".to_string(),
        )));
        let view = run(client, "fever");

        assert!(!view.busy);
        let banner = view.error_banner.expect("banner");
        assert!(banner.contains("An unexpected error occurred"));
        assert_eq!(view.result, None);
    }
}
