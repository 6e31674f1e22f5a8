pub mod app;
pub mod client;
pub mod config;
pub mod errors;
pub mod format;
pub mod handlers;
pub mod health;
pub mod models;
pub mod stats;
pub mod ui;
pub mod state;

pub use app::router;
pub use client::TaskApi;
pub use config::Config;
pub use state::AppState;
