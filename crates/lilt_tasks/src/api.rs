//! Task API client
//!
//! [`TaskApi`] is the seam between the controller and the network.
//! [`HttpTaskApi`] talks to the real endpoint; tests substitute their own.

use std::future::Future;

use reqwest::{Client, Url};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{Result, TaskError};
use crate::model::Task;

/// Path of the task collection, relative to the API base URL
pub const TASKS_PATH: &str = "api/tasks";

/// Creates tasks on behalf of the controller
pub trait TaskApi {
    /// Submit `detail` and return the task the server created
    fn create_task(&self, detail: &Value) -> impl Future<Output = Result<Task>>;
}

/// [`TaskApi`] backed by `POST {base}/api/tasks`
#[derive(Clone, Debug)]
pub struct HttpTaskApi {
    client: Client,
    endpoint: Url,
}

impl HttpTaskApi {
    /// Create a client for the API rooted at `base_url`
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_client(Client::new(), base_url)
    }

    /// Create a client that reuses an existing reqwest client
    pub fn with_client(client: Client, base_url: &str) -> Result<Self> {
        let mut base: Url = base_url
            .parse()
            .map_err(|e| TaskError::InvalidUrl(format!("{base_url}: {e}")))?;

        // Url::join replaces the last segment unless the base ends in '/'
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let endpoint = base
            .join(TASKS_PATH)
            .map_err(|e| TaskError::InvalidUrl(format!("{base_url}: {e}")))?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl TaskApi for HttpTaskApi {
    async fn create_task(&self, detail: &Value) -> Result<Task> {
        debug!(endpoint = %self.endpoint, "creating task");

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(detail)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(endpoint = %self.endpoint, %status, "task creation rejected");
            return Err(TaskError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
