use std::sync::{mpsc, Arc};
use std::thread;

use deck_logging::{deck_error, deck_warn};
use downdeck_core::{ActionKind, ActionOutcome, ActionRequest, StatusSnapshot};

use crate::api::StatusApi;
use crate::error::ApiError;

/// Network work requested by the update loop.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientCommand {
    FetchStatus { seq: u64 },
    Dispatch(ActionRequest),
    ReloadTasks,
}

/// What came back. Every command produces exactly one event.
#[derive(Debug)]
pub enum ClientEvent {
    SnapshotFetched {
        seq: u64,
        result: Result<StatusSnapshot, ApiError>,
    },
    ActionFinished {
        action: ActionKind,
        outcome: ActionOutcome,
    },
    TasksReloaded {
        result: Result<StatusSnapshot, ApiError>,
    },
}

/// Runs API calls on a dedicated runtime thread so the synchronous update
/// loop never blocks on the network.
pub struct ClientHandle {
    cmd_tx: mpsc::Sender<ClientCommand>,
}

impl ClientHandle {
    pub fn spawn(api: Arc<dyn StatusApi>) -> (Self, mpsc::Receiver<ClientEvent>) {
        let (cmd_tx, cmd_rx) = mpsc::channel::<ClientCommand>();
        let (event_tx, event_rx) = mpsc::channel::<ClientEvent>();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    deck_error!("failed to start client runtime: {}", err);
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let api = api.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(api.as_ref(), command, event_tx).await;
                });
            }
        });

        (Self { cmd_tx }, event_rx)
    }

    pub fn submit(&self, command: ClientCommand) {
        let _ = self.cmd_tx.send(command);
    }
}

async fn handle_command(
    api: &dyn StatusApi,
    command: ClientCommand,
    event_tx: mpsc::Sender<ClientEvent>,
) {
    match command {
        ClientCommand::FetchStatus { seq } => {
            let result = api.fetch_status().await;
            let _ = event_tx.send(ClientEvent::SnapshotFetched { seq, result });
        }
        ClientCommand::Dispatch(request) => {
            let action = request.kind();
            let outcome = match run_action(api, request).await {
                Ok(()) => ActionOutcome::Accepted,
                Err(ApiError::Rejected { message }) => ActionOutcome::Rejected { message },
                Err(err) => {
                    deck_warn!("action {:?} failed: {}", action, err);
                    ActionOutcome::Failed
                }
            };
            let _ = event_tx.send(ClientEvent::ActionFinished { action, outcome });
        }
        ClientCommand::ReloadTasks => {
            let result = api.fetch_status().await;
            let _ = event_tx.send(ClientEvent::TasksReloaded { result });
        }
    }
}

async fn run_action(api: &dyn StatusApi, request: ActionRequest) -> Result<(), ApiError> {
    match request {
        ActionRequest::Start => api.start().await,
        ActionRequest::Stop => api.stop().await,
        ActionRequest::AddTask { url } => api.add_task(&url).await,
        ActionRequest::RemoveTask { index } => api.remove_task(index).await,
        ActionRequest::UpdateConfig(config) => api.update_config(&config).await,
    }
}
