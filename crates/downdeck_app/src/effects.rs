use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use deck_logging::{deck_debug, deck_warn};
use downdeck_client::{ClientCommand, ClientEvent, ClientHandle, ClientSettings, HttpStatusApi};
use downdeck_core::{Effect, Msg};
use url::Url;

use crate::app::LoopEvent;
use crate::settings::AppSettings;

pub struct EffectRunner {
    handle: ClientHandle,
}

impl EffectRunner {
    pub fn new(settings: &AppSettings, event_tx: mpsc::Sender<LoopEvent>) -> anyhow::Result<Self> {
        let base_url = Url::parse(&settings.base_url)?;
        let mut client_settings = ClientSettings::new(base_url);
        client_settings.connect_timeout = Duration::from_secs(settings.connect_timeout_secs);
        client_settings.request_timeout = Duration::from_secs(settings.request_timeout_secs);

        let api = Arc::new(HttpStatusApi::new(client_settings)?);
        let (handle, client_rx) = ClientHandle::spawn(api);
        spawn_event_loop(client_rx, event_tx);
        Ok(Self { handle })
    }

    /// Forwards a network effect to the client runtime. Surface effects
    /// (notices, the confirmation prompt) are handled by the app loop and
    /// never reach here.
    pub fn submit(&self, effect: Effect) {
        match effect {
            Effect::FetchStatus { seq } => {
                deck_logging::set_poll_cycle(seq);
                deck_debug!("issuing status poll {}", seq);
                self.handle.submit(ClientCommand::FetchStatus { seq });
            }
            Effect::Dispatch(request) => {
                deck_debug!("dispatching {:?}", request.kind());
                self.handle.submit(ClientCommand::Dispatch(request));
            }
            Effect::ReloadTaskView => {
                self.handle.submit(ClientCommand::ReloadTasks);
            }
            Effect::Notify(_) | Effect::ConfirmRemoval { .. } => {}
        }
    }
}

fn spawn_event_loop(client_rx: mpsc::Receiver<ClientEvent>, event_tx: mpsc::Sender<LoopEvent>) {
    thread::spawn(move || {
        while let Ok(event) = client_rx.recv() {
            let msg = match event {
                ClientEvent::SnapshotFetched { seq, result } => match result {
                    Ok(snapshot) => Msg::SnapshotFetched { seq, snapshot },
                    Err(err) => {
                        deck_warn!("status poll {} failed: {}", seq, err);
                        Msg::PollFailed { seq }
                    }
                },
                ClientEvent::ActionFinished { action, outcome } => {
                    Msg::ActionFinished { action, outcome }
                }
                ClientEvent::TasksReloaded { result } => match result {
                    Ok(snapshot) => Msg::TaskViewReloaded { snapshot },
                    Err(err) => {
                        deck_warn!("task view reload failed: {}", err);
                        Msg::ReloadFailed
                    }
                },
            };
            if event_tx.send(LoopEvent::Core(msg)).is_err() {
                break;
            }
        }
    });
}
