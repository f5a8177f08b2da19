//! Downdeck core: pure state machine for the executor control surface.
mod controls;
mod effect;
mod msg;
mod reconcile;
mod snapshot;
mod state;
mod update;
mod view_model;

pub use controls::{render_controls, ControlButton};
pub use effect::{ActionKind, ActionOutcome, ActionRequest, Effect, Notice};
pub use msg::Msg;
pub use reconcile::{reconcile, ProgressWidget, WidgetOp};
pub use snapshot::{ExecutorConfig, Progress, StatusSnapshot, Task, TaskPhase};
pub use state::{AppState, Page, PresentationState, TaskViewPhase};
pub use update::update;
pub use view_model::{DashboardViewModel, TasksViewModel};
