pub mod api;
pub mod app;
pub mod config;
pub mod dashboard;
pub mod errors;
pub mod forms;
pub mod handlers;
pub mod models;
pub mod pages;
pub mod state;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use state::AppState;
