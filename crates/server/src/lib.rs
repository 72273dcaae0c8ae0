//! Server crate for the movie catalog.
//!
//! Serves the catalog snapshot over HTTP and, for clients that prefer not to
//! run the list pipeline themselves, the derived list for a set of criteria.

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::Config;
pub use routes::{cors_layer, create_router};
pub use state::AppState;
