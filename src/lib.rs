pub mod api_client;
pub mod calendar;
pub mod commands;
pub mod config;
pub mod deadlines;
pub mod render;
pub mod session;
pub mod stats;
pub mod types;

pub use api_client::ApiClient;
pub use config::ConfigManager;
pub use session::{Session, SessionStore};
pub use stats::DashboardStats;
