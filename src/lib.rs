pub mod app;
pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;

pub use app::{app, AppState};
pub use config::AppConfig;
