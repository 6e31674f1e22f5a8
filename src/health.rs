use crate::client::TaskApi;
use crate::models::HealthStatus;
use crate::state::AppState;
use std::time::Duration;
use tokio::{task::JoinHandle, time::MissedTickBehavior};
use tracing::{debug, warn};

pub async fn check_health(api: &TaskApi) -> HealthStatus {
    match api.health().await {
        Ok(report) => {
            let status = HealthStatus::from_report(&report);
            if status != HealthStatus::Healthy {
                warn!(reported = %report.status, "upstream reports unhealthy");
            }
            status
        }
        Err(err) => {
            warn!("health check failed: {err}");
            HealthStatus::Error
        }
    }
}

/// Checks upstream health and stores the result in the shared state.
pub async fn refresh_health(state: &AppState) -> HealthStatus {
    let status = check_health(&state.api).await;
    state.set_health(status).await;
    status
}

/// Re-checks upstream health on a fixed interval until the runtime shuts down.
pub fn spawn_health_monitor(state: AppState, every: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            let status = refresh_health(&state).await;
            debug!(?status, "health refreshed");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ClientError;
    use axum::{Json, Router, http::StatusCode, routing::get};
    use serde_json::{Value, json};

    async fn upstream_reporting(status: StatusCode, body: Value) -> TaskApi {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let app =
            Router::new().route("/health", get(move || async move { (status, Json(body)) }));
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        TaskApi::new(&base_url, Duration::from_secs(2)).unwrap()
    }

    #[tokio::test]
    async fn unavailable_upstream_with_report_is_unhealthy() {
        let api = upstream_reporting(
            StatusCode::SERVICE_UNAVAILABLE,
            json!({ "status": "unhealthy", "version": "1.0.0" }),
        )
        .await;
        assert_eq!(check_health(&api).await, HealthStatus::Unhealthy);
    }

    #[tokio::test]
    async fn healthy_report_is_healthy() {
        let api = upstream_reporting(StatusCode::OK, json!({ "status": "healthy" })).await;
        assert_eq!(check_health(&api).await, HealthStatus::Healthy);
    }

    #[tokio::test]
    async fn unreadable_report_is_error() {
        let api = upstream_reporting(StatusCode::BAD_GATEWAY, json!(["not", "a", "report"])).await;
        assert!(matches!(api.health().await, Err(ClientError::Decode { .. })));
        assert_eq!(check_health(&api).await, HealthStatus::Error);
    }

    #[tokio::test]
    async fn unreachable_upstream_reports_error() {
        let api = TaskApi::new("http://127.0.0.1:9", Duration::from_millis(500)).unwrap();
        let state = AppState::new(api, Duration::from_secs(30));
        assert_eq!(state.health().await, HealthStatus::Unknown);

        assert_eq!(refresh_health(&state).await, HealthStatus::Error);
        assert_eq!(state.health().await, HealthStatus::Error);
    }
}
