//! Pipeline that turns a catalog snapshot into the movie list to display.
//!
//! This crate provides:
//! - Criteria (year order, rating threshold, genre) with explicit inactive states
//! - Filter trait and implementations for the rating and genre predicates
//! - FilterPipeline for composing filters
//! - The year sort
//! - `derive_view`, the pure function tying them together
//!
//! ## Architecture
//! The list is derived in stages:
//! 1. Join: every movie gets its genre names from the snapshot
//! 2. Filters remove movies failing an active criterion
//! 3. The year sort reorders the survivors, when active
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{Criteria, RatingThreshold, YearOrder, derive_view};
//!
//! let criteria = Criteria::new()
//!     .with_year_order(YearOrder::Recent)
//!     .with_rating_threshold(RatingThreshold::EightAndUp);
//!
//! let movies = derive_view(&snapshot, &criteria);
//! ```

pub mod criteria;
pub mod filter_pipeline;
pub mod filters;
pub mod sort;
pub mod traits;
pub mod view;

// Re-export main types
pub use criteria::{Criteria, CriteriaError, RatingThreshold, YearOrder};
pub use filter_pipeline::FilterPipeline;
pub use traits::Filter;
pub use view::{MovieView, join_genres};

use catalog::CatalogSnapshot;

/// Derive the displayed movie list from a snapshot and the current criteria.
///
/// Pure: the snapshot is only read, and the same inputs always give the same
/// output. With every criterion inactive the result is the snapshot's movie
/// list in provider order. An empty result is returned as an empty vector.
pub fn derive_view(snapshot: &CatalogSnapshot, criteria: &Criteria) -> Vec<MovieView> {
    let movies = join_genres(snapshot);
    if criteria.is_inactive() {
        return movies;
    }

    let mut movies = FilterPipeline::from_criteria(criteria).apply(movies);

    if let Some(order) = criteria.year_order {
        sort::sort_by_year(&mut movies, order);
    }

    tracing::debug!(
        "Derived {} of {} movies for {:?}",
        movies.len(),
        snapshot.movies.len(),
        criteria
    );
    movies
}
