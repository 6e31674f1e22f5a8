use crate::client::TaskApi;
use crate::models::HealthStatus;
use std::{sync::Arc, time::Duration};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub api: TaskApi,
    pub health: Arc<Mutex<HealthStatus>>,
    pub health_interval: Duration,
}

impl AppState {
    pub fn new(api: TaskApi, health_interval: Duration) -> Self {
        Self {
            api,
            health: Arc::new(Mutex::new(HealthStatus::Unknown)),
            health_interval,
        }
    }

    pub async fn health(&self) -> HealthStatus {
        *self.health.lock().await
    }

    pub async fn set_health(&self, status: HealthStatus) {
        *self.health.lock().await = status;
    }
}
