pub mod app;
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod profiles;
pub mod state;
pub mod views;

pub use app::build_app;
pub use state::AppState;
