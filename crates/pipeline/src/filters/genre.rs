//! Filter to keep movies belonging to one genre.

use crate::traits::Filter;
use crate::view::MovieView;

/// Keeps movies whose resolved genre names contain the given name.
///
/// Matching is exact and case-sensitive; a name no movie carries simply
/// yields an empty list.
pub struct GenreFilter {
    genre: String,
}

impl GenreFilter {
    pub fn new(genre: impl Into<String>) -> Self {
        Self {
            genre: genre.into(),
        }
    }
}

impl Filter for GenreFilter {
    fn name(&self) -> &str {
        "GenreFilter"
    }

    fn matches(&self, movie: &MovieView) -> bool {
        movie.has_genre(&self.genre)
    }
}
