//! Core traits for the list pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! independent predicates to be applied to the movie list.

use crate::view::MovieView;

/// A predicate over movie views.
///
/// Filters never reorder: `apply` keeps the surviving movies in the order
/// they came in, so filters can be chained in any order with the same result.
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether a single movie passes this filter
    fn matches(&self, movie: &MovieView) -> bool;

    /// Apply this filter to a list of movies (takes ownership)
    fn apply(&self, movies: Vec<MovieView>) -> Vec<MovieView> {
        movies.into_iter().filter(|movie| self.matches(movie)).collect()
    }
}
