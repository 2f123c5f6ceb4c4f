//! HTTP service surface
//!
//! Exposes the jersey catalog and the generation operation to the web UI.

pub mod middleware;
pub mod routes;
pub mod state;
pub mod types;

pub use routes::app;
pub use state::AppState;
