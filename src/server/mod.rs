//! HTTP surface for the logo search service

pub mod routes;
pub mod state;

pub use routes::{create_router, ErrorBody, HealthResponse, LogoQuery};
pub use state::AppState;
