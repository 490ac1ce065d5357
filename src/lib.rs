pub mod config;
pub mod database;
pub mod middleware;
pub mod post;
pub mod router;
pub mod user;
pub mod utils;

pub use config::AppConfig;
pub use router::index::{AppState, routes};
