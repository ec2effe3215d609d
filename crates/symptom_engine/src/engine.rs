use std::io;
use std::sync::{mpsc, Arc};
use std::thread;

use query_logging::{query_debug, query_info};

use crate::{CompletionClient, EngineEvent, RequestId};

enum EngineCommand {
    Query {
        request_id: RequestId,
        symptoms: String,
    },
}

/// Runs completion requests on a background tokio runtime and reports each
/// outcome as an [`EngineEvent`]. Requests are never cancelled.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(client: Arc<dyn CompletionClient>) -> io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::Builder::new()
            .name("symptom-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let client = client.clone();
                    let event_tx = event_tx.clone();
                    runtime.spawn(async move {
                        handle_command(client.as_ref(), command, event_tx).await;
                    });
                }
                query_debug!("Engine command channel closed");
            })?;

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn submit(&self, request_id: RequestId, symptoms: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Query {
            request_id,
            symptoms: symptoms.into(),
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Blocks until the next event. Returns `None` once the engine thread is gone.
    pub fn recv(&self) -> Option<EngineEvent> {
        self.event_rx.recv().ok()
    }
}

async fn handle_command(
    client: &dyn CompletionClient,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Query {
            request_id,
            symptoms,
        } => {
            let result = client.complete(&symptoms).await;
            query_info!(
                "Query {} completed: {}",
                request_id,
                match &result {
                    Ok(text) => format!("ok content_len={}", text.len()),
                    Err(err) => format!("failed status={:?}", err.status()),
                }
            );
            let _ = event_tx.send(EngineEvent::QueryCompleted { request_id, result });
        }
    }
}
