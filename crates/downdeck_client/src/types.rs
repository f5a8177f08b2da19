use downdeck_core::{ExecutorConfig, Progress, StatusSnapshot, Task, TaskPhase};
use serde::Deserialize;

/// `GET /api/status` body. Unknown fields the executor may add are ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct StatusPayload {
    pub is_running: bool,
    #[serde(default)]
    pub current_task: Option<TaskPayload>,
    #[serde(default)]
    pub task_count: u64,
    #[serde(default)]
    pub current_progress: Option<ProgressPayload>,
    #[serde(default)]
    pub config: Option<ConfigPayload>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TaskPayload {
    pub url: String,
    #[serde(default)]
    pub added_time: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProgressPayload {
    pub stage: String,
    pub percent: f64,
    pub raw_line: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ConfigPayload {
    pub download_dir: String,
    pub min_interval: u32,
    pub max_interval: u32,
    #[serde(default)]
    pub resolution: String,
}

/// Common `{ success, error? }` acknowledgement for the action endpoints.
#[derive(Debug, Deserialize)]
pub(crate) struct AckPayload {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

impl From<StatusPayload> for StatusSnapshot {
    fn from(payload: StatusPayload) -> Self {
        // The tie-break between the two optional fields happens inside
        // TaskPhase::from_parts; the wire shape is not trusted.
        StatusSnapshot {
            is_running: payload.is_running,
            task_count: payload.task_count,
            phase: TaskPhase::from_parts(
                payload.current_task.map(Task::from),
                payload.current_progress.map(Progress::from),
            ),
            config: payload.config.map(ExecutorConfig::from),
        }
    }
}

impl From<TaskPayload> for Task {
    fn from(payload: TaskPayload) -> Self {
        Task {
            url: payload.url,
            added_time: payload.added_time,
            status: payload.status,
        }
    }
}

impl From<ProgressPayload> for Progress {
    fn from(payload: ProgressPayload) -> Self {
        Progress {
            stage: payload.stage,
            percent: payload.percent,
            raw_line: payload.raw_line,
        }
    }
}

impl From<ConfigPayload> for ExecutorConfig {
    fn from(payload: ConfigPayload) -> Self {
        ExecutorConfig {
            download_dir: payload.download_dir,
            min_interval: payload.min_interval,
            max_interval: payload.max_interval,
            resolution: payload.resolution,
        }
    }
}
