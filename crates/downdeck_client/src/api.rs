use std::time::Duration;

use downdeck_core::{ExecutorConfig, StatusSnapshot};
use url::Url;

use crate::error::ApiError;
use crate::types::{AckPayload, StatusPayload};

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: Url,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl ClientSettings {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// The executor's control API: one read, five idempotent commands.
#[async_trait::async_trait]
pub trait StatusApi: Send + Sync {
    async fn fetch_status(&self) -> Result<StatusSnapshot, ApiError>;
    async fn start(&self) -> Result<(), ApiError>;
    async fn stop(&self) -> Result<(), ApiError>;
    async fn add_task(&self, url: &str) -> Result<(), ApiError>;
    async fn remove_task(&self, index: usize) -> Result<(), ApiError>;
    async fn update_config(&self, config: &ExecutorConfig) -> Result<(), ApiError>;
}

#[derive(Debug, Clone)]
pub struct HttpStatusApi {
    settings: ClientSettings,
    client: reqwest::Client,
}

impl HttpStatusApi {
    pub fn new(settings: ClientSettings) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        Ok(Self { settings, client })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.settings
            .base_url
            .join(path)
            .map_err(|err| ApiError::Transport(err.to_string()))
    }

    /// POSTs a form to an action endpoint and folds the `{ success, error? }`
    /// acknowledgement into a Result.
    async fn post_action(&self, path: &str, form: &[(&str, String)]) -> Result<(), ApiError> {
        let mut request = self.client.post(self.endpoint(path)?);
        if !form.is_empty() {
            request = request.form(form);
        }
        let response = request.send().await.map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Transport(status.to_string()));
        }

        let ack: AckPayload = response
            .json()
            .await
            .map_err(|err| ApiError::MalformedResponse(err.to_string()))?;
        if ack.success {
            Ok(())
        } else {
            Err(ApiError::Rejected {
                message: ack
                    .error
                    .unwrap_or_else(|| "request rejected".to_string()),
            })
        }
    }
}

#[async_trait::async_trait]
impl StatusApi for HttpStatusApi {
    async fn fetch_status(&self) -> Result<StatusSnapshot, ApiError> {
        let response = self
            .client
            .get(self.endpoint("/api/status")?)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Transport(status.to_string()));
        }

        let payload: StatusPayload = response
            .json()
            .await
            .map_err(|err| ApiError::MalformedResponse(err.to_string()))?;
        Ok(payload.into())
    }

    async fn start(&self) -> Result<(), ApiError> {
        self.post_action("/api/start_download", &[]).await
    }

    async fn stop(&self) -> Result<(), ApiError> {
        self.post_action("/api/stop_download", &[]).await
    }

    async fn add_task(&self, url: &str) -> Result<(), ApiError> {
        self.post_action("/api/add_task", &[("url", url.to_string())])
            .await
    }

    async fn remove_task(&self, index: usize) -> Result<(), ApiError> {
        self.post_action("/api/remove_task", &[("index", index.to_string())])
            .await
    }

    async fn update_config(&self, config: &ExecutorConfig) -> Result<(), ApiError> {
        self.post_action(
            "/api/update_config",
            &[
                ("download_dir", config.download_dir.clone()),
                ("min_interval", config.min_interval.to_string()),
                ("max_interval", config.max_interval.to_string()),
                ("resolution", config.resolution.clone()),
            ],
        )
        .await
    }
}

fn map_transport_error(err: reqwest::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}
