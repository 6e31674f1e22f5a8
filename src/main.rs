use task_board::{AppState, Config, TaskApi, health::spawn_health_monitor, router};
use tokio::signal;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env();
    let api = TaskApi::new(&config.api_url, config.request_timeout)?;
    info!(api = %api.base_url(), "using task api");

    let state = AppState::new(api, config.health_interval);
    let monitor = spawn_health_monitor(state.clone(), config.health_interval);

    let addr = config.bind_addr();
    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    monitor.abort();
    info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
}
