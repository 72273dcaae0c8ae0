//! Client side of the movie catalog: fetching the snapshot, holding the
//! presentation state, and rendering the derived list in a terminal.

pub mod client;
pub mod render;
pub mod session;

pub use client::{CatalogClient, ClientError};
pub use session::{FetchTicket, LoadState, Session};
