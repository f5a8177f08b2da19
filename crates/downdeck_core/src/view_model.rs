use crate::controls::ControlButton;
use crate::reconcile::ProgressWidget;
use crate::snapshot::ExecutorConfig;

/// Everything the dashboard surface renders.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardViewModel {
    pub is_running: bool,
    pub current_url: Option<String>,
    pub task_count: u64,
    pub widget: Option<ProgressWidget>,
    pub buttons: Vec<ControlButton>,
    pub task_input: String,
    pub dirty: bool,
}

/// The coarse management view, rebuilt wholesale on every reload.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TasksViewModel {
    pub is_running: bool,
    pub current_url: Option<String>,
    pub task_count: u64,
    pub config: Option<ExecutorConfig>,
    pub reloading: bool,
}
