/// One immutable read of executor status at a point in time.
///
/// A snapshot is consumed by a single reconciliation pass and then
/// discarded; it is never merged field-by-field with a previous snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusSnapshot {
    pub is_running: bool,
    pub task_count: u64,
    pub phase: TaskPhase,
    /// Executor-side configuration, echoed in the status payload.
    pub config: Option<ExecutorConfig>,
}

/// What the executor is doing right now.
///
/// "Progress without an active task" is not representable: the tie-break
/// between the two wire fields happens in [`TaskPhase::from_parts`].
#[derive(Debug, Clone, PartialEq)]
pub enum TaskPhase {
    Idle,
    Active {
        task: Task,
        progress: Option<Progress>,
    },
}

impl TaskPhase {
    /// Builds the phase from the two independently-optional wire fields.
    ///
    /// The task is authoritative: a progress payload arriving without an
    /// active task is stale data and is discarded.
    pub fn from_parts(task: Option<Task>, progress: Option<Progress>) -> Self {
        match task {
            Some(task) => TaskPhase::Active { task, progress },
            None => TaskPhase::Idle,
        }
    }

    pub fn task(&self) -> Option<&Task> {
        match self {
            TaskPhase::Active { task, .. } => Some(task),
            TaskPhase::Idle => None,
        }
    }

    pub fn progress(&self) -> Option<&Progress> {
        match self {
            TaskPhase::Active { progress, .. } => progress.as_ref(),
            TaskPhase::Idle => None,
        }
    }
}

/// A queued or running download task, as the executor reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub url: String,
    pub added_time: Option<String>,
    pub status: Option<String>,
}

impl Task {
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            added_time: None,
            status: None,
        }
    }
}

/// Progress of the current download, parsed by the executor from its
/// subprocess output.
#[derive(Debug, Clone, PartialEq)]
pub struct Progress {
    pub stage: String,
    pub percent: f64,
    pub raw_line: String,
}

/// Executor configuration as round-tripped through the config form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExecutorConfig {
    pub download_dir: String,
    pub min_interval: u32,
    pub max_interval: u32,
    pub resolution: String,
}
