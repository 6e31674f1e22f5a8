use crate::errors::{ClientError, ClientResult};
use crate::models::{HealthReport, Task, TaskEnvelope, TaskInput, TaskList};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

const TASKS_PATH: &str = "/api/tasks";

/// Thin client for the upstream task REST API.
#[derive(Debug, Clone)]
pub struct TaskApi {
    http: Client,
    base_url: String,
}

impl TaskApi {
    pub fn new(base_url: &str, timeout: Duration) -> ClientResult<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| ClientError::Transport {
                operation: "build client",
                source,
            })?;
        Ok(Self::with_client(http, base_url))
    }

    pub fn with_client(http: Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Decodes the report whatever the HTTP status.
    pub async fn health(&self) -> ClientResult<HealthReport> {
        let operation = "health check";
        let response = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await
            .map_err(|source| ClientError::Transport { operation, source })?;
        debug!(status = %response.status(), operation, "upstream responded");
        decode(response, operation).await
    }

    pub async fn list_tasks(&self) -> ClientResult<TaskList> {
        let request = self.http.get(self.tasks_url());
        let response = send(request, "list tasks").await?;
        decode(response, "list tasks").await
    }

    pub async fn get_task(&self, id: u64) -> ClientResult<Task> {
        let request = self.http.get(self.task_url(id));
        let response = send(request, "fetch task").await?;
        let envelope: TaskEnvelope = decode(response, "fetch task").await?;
        Ok(envelope.into_task())
    }

    pub async fn create_task(&self, input: &TaskInput) -> ClientResult<()> {
        let request = self.http.post(self.tasks_url()).json(input);
        send(request, "create task").await?;
        Ok(())
    }

    pub async fn update_task(&self, id: u64, input: &TaskInput) -> ClientResult<()> {
        let request = self.http.put(self.task_url(id)).json(input);
        send(request, "update task").await?;
        Ok(())
    }

    pub async fn delete_task(&self, id: u64) -> ClientResult<()> {
        let request = self.http.delete(self.task_url(id));
        send(request, "delete task").await?;
        Ok(())
    }

    fn tasks_url(&self) -> String {
        format!("{}{TASKS_PATH}", self.base_url)
    }

    fn task_url(&self, id: u64) -> String {
        format!("{}{TASKS_PATH}/{id}", self.base_url)
    }
}

async fn send(request: RequestBuilder, operation: &'static str) -> ClientResult<Response> {
    let response = request
        .send()
        .await
        .map_err(|source| ClientError::Transport { operation, source })?;

    let status = response.status();
    debug!(%status, operation, "upstream responded");
    if !status.is_success() {
        return Err(ClientError::Status { operation, status });
    }
    Ok(response)
}

async fn decode<T: DeserializeOwned>(
    response: Response,
    operation: &'static str,
) -> ClientResult<T> {
    response
        .json()
        .await
        .map_err(|source| ClientError::Decode { operation, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_dropped() {
        let api = TaskApi::with_client(Client::new(), "http://api.local:5000//");
        assert_eq!(api.base_url(), "http://api.local:5000");
        assert_eq!(api.tasks_url(), "http://api.local:5000/api/tasks");
        assert_eq!(api.task_url(7), "http://api.local:5000/api/tasks/7");
    }

    #[tokio::test]
    async fn unreachable_upstream_is_transport_error() {
        let api = TaskApi::new("http://127.0.0.1:9", Duration::from_millis(500)).unwrap();
        let err = api.list_tasks().await.unwrap_err();
        assert!(matches!(err, ClientError::Transport { operation: "list tasks", .. }));
    }
}
