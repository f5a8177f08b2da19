use crate::effect::{ActionKind, ActionOutcome, ActionRequest, Effect, Notice};
use crate::msg::Msg;
use crate::state::{AppState, Page, TaskViewPhase};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::PollTick => {
            if state.page() != Page::Dashboard {
                return (state, Vec::new());
            }
            vec![issue_poll(&mut state)]
        }
        Msg::SnapshotFetched { seq, snapshot } => {
            if !state.is_latest(seq) {
                // A later poll has been issued; this answer is stale.
                return (state, Vec::new());
            }
            state.apply_snapshot(snapshot);
            Vec::new()
        }
        // Swallowed: nothing is lost, only delayed. The next tick retries.
        Msg::PollFailed { .. } => Vec::new(),
        // No is_running pre-check before start/stop: the executor owns
        // idempotence, and a local skip could act on a stale snapshot.
        Msg::StartClicked => vec![Effect::Dispatch(ActionRequest::Start)],
        Msg::StopClicked => vec![Effect::Dispatch(ActionRequest::Stop)],
        Msg::TaskInputChanged(text) => {
            state.set_task_input(text);
            Vec::new()
        }
        Msg::TaskSubmitted => {
            let url = state.task_input().trim().to_owned();
            if url.is_empty() {
                return (state, Vec::new());
            }
            vec![Effect::Dispatch(ActionRequest::AddTask { url })]
        }
        Msg::RemoveRequested { index } => {
            state.set_pending_removal(index);
            vec![Effect::ConfirmRemoval { index }]
        }
        Msg::ConfirmAnswered { accepted } => match state.take_pending_removal() {
            Some(index) if accepted => {
                vec![Effect::Dispatch(ActionRequest::RemoveTask { index })]
            }
            // Cancellation is a no-op with no network call.
            _ => Vec::new(),
        },
        Msg::ConfigSubmitted(config) => {
            vec![Effect::Dispatch(ActionRequest::UpdateConfig(config))]
        }
        Msg::ActionFinished { action, outcome } => action_finished(&mut state, action, outcome),
        Msg::PageOpened(page) => {
            state.open_page(page);
            // Entering a page starts from fresh server state.
            match page {
                Page::Dashboard => vec![issue_poll(&mut state)],
                Page::Tasks => start_task_reload(&mut state),
            }
        }
        Msg::ReloadTick => {
            if state.page() != Page::Tasks {
                return (state, Vec::new());
            }
            start_task_reload(&mut state)
        }
        Msg::TaskViewReloaded { snapshot } => {
            state.finish_task_reload(snapshot);
            Vec::new()
        }
        Msg::ReloadFailed => {
            state.abort_task_reload();
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn issue_poll(state: &mut AppState) -> Effect {
    Effect::FetchStatus {
        seq: state.next_poll_seq(),
    }
}

fn start_task_reload(state: &mut AppState) -> Vec<Effect> {
    if state.task_view() == TaskViewPhase::Reloading {
        return Vec::new();
    }
    state.begin_task_reload();
    vec![Effect::ReloadTaskView]
}

fn action_finished(
    state: &mut AppState,
    action: ActionKind,
    outcome: ActionOutcome,
) -> Vec<Effect> {
    match (action, outcome) {
        (ActionKind::Start | ActionKind::Stop, ActionOutcome::Accepted) => {
            vec![issue_poll(state)]
        }
        // A failed start/stop leaves state untouched; the regular poll
        // cycle reports whatever the executor actually did.
        (ActionKind::Start | ActionKind::Stop, _) => Vec::new(),
        (ActionKind::AddTask, ActionOutcome::Accepted) => {
            state.clear_task_input();
            vec![Effect::Notify(Notice::TaskAdded), issue_poll(state)]
        }
        (ActionKind::AddTask, ActionOutcome::Rejected { message }) => {
            // Server error text is relayed verbatim; no re-poll is forced.
            vec![Effect::Notify(Notice::Error(message))]
        }
        (ActionKind::AddTask, ActionOutcome::Failed) => {
            vec![Effect::Notify(Notice::Error("add task failed".to_owned()))]
        }
        (ActionKind::RemoveTask, ActionOutcome::Accepted) => {
            let mut effects = vec![Effect::Notify(Notice::TaskRemoved)];
            effects.extend(start_task_reload(state));
            effects
        }
        (ActionKind::RemoveTask, ActionOutcome::Rejected { message }) => {
            vec![Effect::Notify(Notice::Error(message))]
        }
        (ActionKind::RemoveTask, ActionOutcome::Failed) => {
            vec![Effect::Notify(Notice::Error("remove task failed".to_owned()))]
        }
        (ActionKind::UpdateConfig, ActionOutcome::Accepted) => {
            vec![Effect::Notify(Notice::ConfigSaved)]
        }
        // The server's error text is not relayed for config saves.
        (ActionKind::UpdateConfig, _) => {
            vec![Effect::Notify(Notice::Error("failed to save config".to_owned()))]
        }
    }
}
