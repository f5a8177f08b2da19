use crate::effect::{ActionKind, ActionOutcome};
use crate::snapshot::{ExecutorConfig, StatusSnapshot};
use crate::state::Page;

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Dashboard poll timer fired.
    PollTick,
    /// A status poll resolved.
    SnapshotFetched { seq: u64, snapshot: StatusSnapshot },
    /// A status poll failed; the next tick retries.
    PollFailed { seq: u64 },
    /// User pressed Start.
    StartClicked,
    /// User pressed Stop.
    StopClicked,
    /// User edited the add-task input.
    TaskInputChanged(String),
    /// User submitted the add-task form.
    TaskSubmitted,
    /// User asked to remove the task at `index`.
    RemoveRequested { index: usize },
    /// User answered the pending removal confirmation.
    ConfirmAnswered { accepted: bool },
    /// User submitted the config form.
    ConfigSubmitted(ExecutorConfig),
    /// A dispatched action finished.
    ActionFinished {
        action: ActionKind,
        outcome: ActionOutcome,
    },
    /// User navigated to a page.
    PageOpened(Page),
    /// Task view reload timer fired.
    ReloadTick,
    /// The task view reload resolved with a fresh snapshot.
    TaskViewReloaded { snapshot: StatusSnapshot },
    /// The task view reload failed; the view stays as-is until the next tick.
    ReloadFailed,
    /// Fallback for placeholder wiring.
    NoOp,
}
