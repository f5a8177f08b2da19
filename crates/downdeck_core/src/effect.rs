use crate::snapshot::ExecutorConfig;

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Issue a status poll carrying its sequence number.
    FetchStatus { seq: u64 },
    /// Send one control action to the executor.
    Dispatch(ActionRequest),
    /// Ask the user to confirm removal of the task at `index`.
    ConfirmRemoval { index: usize },
    /// Surface a notice to the user.
    Notify(Notice),
    /// Reload the task management view wholesale.
    ReloadTaskView,
}

/// One idempotent control command sent to the executor.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionRequest {
    Start,
    Stop,
    AddTask { url: String },
    RemoveTask { index: usize },
    UpdateConfig(ExecutorConfig),
}

impl ActionRequest {
    pub fn kind(&self) -> ActionKind {
        match self {
            ActionRequest::Start => ActionKind::Start,
            ActionRequest::Stop => ActionKind::Stop,
            ActionRequest::AddTask { .. } => ActionKind::AddTask,
            ActionRequest::RemoveTask { .. } => ActionKind::RemoveTask,
            ActionRequest::UpdateConfig(_) => ActionKind::UpdateConfig,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Start,
    Stop,
    AddTask,
    RemoveTask,
    UpdateConfig,
}

/// The executor's verdict on a dispatched action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Accepted,
    /// The server answered `success: false` with a message.
    Rejected { message: String },
    /// The request never produced a usable answer (transport or decode).
    Failed,
}

/// A user-visible notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    TaskAdded,
    TaskRemoved,
    ConfigSaved,
    Error(String),
}
