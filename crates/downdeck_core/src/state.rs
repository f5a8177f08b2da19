use crate::controls::{render_controls, ControlButton};
use crate::reconcile::{reconcile, ProgressWidget, WidgetOp};
use crate::snapshot::{ExecutorConfig, StatusSnapshot};
use crate::view_model::{DashboardViewModel, TasksViewModel};

/// Which surface the user is looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Dashboard,
    Tasks,
}

/// Reload state of the task management view.
///
/// That view is never diffed; a reload replaces it wholesale from a fresh
/// snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskViewPhase {
    #[default]
    Idle,
    Reloading,
}

/// The rendered surface, modelled as a value.
///
/// Keeping presence/absence of the widget here means the reconciler never
/// has to query a live widget tree, and the invariant "presentation state
/// is a pure function of the latest snapshot" is checkable in tests.
#[derive(Debug, Clone, PartialEq)]
pub struct PresentationState {
    pub widget: Option<ProgressWidget>,
    pub buttons: Vec<ControlButton>,
}

impl Default for PresentationState {
    fn default() -> Self {
        Self {
            widget: None,
            buttons: render_controls(false),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    dirty: bool,
    page: Page,
    presentation: PresentationState,
    is_running: bool,
    current_url: Option<String>,
    task_count: u64,
    config: Option<ExecutorConfig>,
    task_input: String,
    pending_removal: Option<usize>,
    task_view: TaskViewPhase,
    last_issued_seq: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn task_view(&self) -> TaskViewPhase {
        self.task_view
    }

    pub fn presentation(&self) -> &PresentationState {
        &self.presentation
    }

    pub fn dashboard_view(&self) -> DashboardViewModel {
        DashboardViewModel {
            is_running: self.is_running,
            current_url: self.current_url.clone(),
            task_count: self.task_count,
            widget: self.presentation.widget.clone(),
            buttons: self.presentation.buttons.clone(),
            task_input: self.task_input.clone(),
            dirty: self.dirty,
        }
    }

    pub fn tasks_view(&self) -> TasksViewModel {
        TasksViewModel {
            is_running: self.is_running,
            current_url: self.current_url.clone(),
            task_count: self.task_count,
            config: self.config.clone(),
            reloading: self.task_view == TaskViewPhase::Reloading,
        }
    }

    /// Returns whether a render is due and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn open_page(&mut self, page: Page) {
        self.page = page;
        self.dirty = true;
    }

    /// Allocates the sequence number for the next status poll.
    pub(crate) fn next_poll_seq(&mut self) -> u64 {
        self.last_issued_seq += 1;
        self.last_issued_seq
    }

    /// A response is applied only if it answers the latest issued poll.
    pub(crate) fn is_latest(&self, seq: u64) -> bool {
        seq == self.last_issued_seq
    }

    /// Replaces presentation state from a snapshot.
    ///
    /// Everything derived from the previous snapshot is overwritten; the
    /// returned op records the structural widget change, if any.
    pub(crate) fn apply_snapshot(&mut self, snapshot: StatusSnapshot) -> Option<WidgetOp> {
        let (widget, op) = reconcile(&snapshot, self.presentation.widget.as_ref());
        self.presentation.widget = widget;
        self.presentation.buttons = render_controls(snapshot.is_running);
        self.is_running = snapshot.is_running;
        self.current_url = snapshot.phase.task().map(|task| task.url.clone());
        self.task_count = snapshot.task_count;
        if snapshot.config.is_some() {
            self.config = snapshot.config;
        }
        self.dirty = true;
        op
    }

    pub fn task_input(&self) -> &str {
        &self.task_input
    }

    pub(crate) fn set_task_input(&mut self, text: String) {
        self.task_input = text;
        self.dirty = true;
    }

    pub(crate) fn clear_task_input(&mut self) {
        self.task_input.clear();
        self.dirty = true;
    }

    pub(crate) fn set_pending_removal(&mut self, index: usize) {
        self.pending_removal = Some(index);
    }

    pub(crate) fn take_pending_removal(&mut self) -> Option<usize> {
        self.pending_removal.take()
    }

    pub(crate) fn begin_task_reload(&mut self) {
        self.task_view = TaskViewPhase::Reloading;
        self.dirty = true;
    }

    pub(crate) fn finish_task_reload(&mut self, snapshot: StatusSnapshot) {
        self.apply_snapshot(snapshot);
        self.task_view = TaskViewPhase::Idle;
    }

    pub(crate) fn abort_task_reload(&mut self) {
        self.task_view = TaskViewPhase::Idle;
    }
}
