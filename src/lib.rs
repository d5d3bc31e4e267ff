pub mod app;
pub mod config;
pub mod dataset;
pub mod errors;
pub mod figure;
pub mod handlers;
pub mod models;
pub mod query;
pub mod selection;
pub mod shell;
pub mod state;
pub mod ui;
pub mod views;

pub use app::router;
pub use config::Config;
pub use dataset::Dataset;
pub use state::AppState;
