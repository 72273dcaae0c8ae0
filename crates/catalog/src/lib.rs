//! # Catalog Crate
//!
//! This crate owns the movie catalog: its records, the loader for the
//! provider's seed files, and the snapshot every consumer receives.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Movie, Genre, MovieGenre, CatalogStore)
//! - **parser**: Parse the JSON record files
//! - **index**: Build and validate the store, produce snapshots
//! - **snapshot**: The `GET /movies` response and its genre-name join
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::CatalogStore;
//! use std::path::Path;
//!
//! let store = CatalogStore::load_from_dir(Path::new("data/catalog"))?;
//! let snapshot = store.snapshot();
//! let genres = snapshot.genre_names_by_movie();
//! ```

pub mod error;
pub mod index;
pub mod parser;
pub mod snapshot;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use snapshot::{CatalogSnapshot, GenreEntry};
pub use types::{CatalogStore, Genre, GenreId, MAX_RATING, Movie, MovieGenre, MovieId};
