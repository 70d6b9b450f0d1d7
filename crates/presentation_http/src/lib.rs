//! NearStop HTTP presentation layer
//!
//! Serves the HTML search form, the JSON lookup endpoint and health probes.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
