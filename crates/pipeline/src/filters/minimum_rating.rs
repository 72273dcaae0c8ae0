//! Filter to keep movies at or above a rating threshold.

use crate::criteria::RatingThreshold;
use crate::traits::Filter;
use crate::view::MovieView;

/// Removes movies rated below the threshold.
///
/// A movie without a rating never satisfies an active threshold.
pub struct MinimumRatingFilter {
    min_rating: f32,
}

impl MinimumRatingFilter {
    /// Create a new MinimumRatingFilter.
    ///
    /// # Arguments
    /// * `min_rating` - Minimum rating, inclusive
    pub fn new(min_rating: f32) -> Self {
        Self { min_rating }
    }
}

impl From<RatingThreshold> for MinimumRatingFilter {
    fn from(threshold: RatingThreshold) -> Self {
        Self::new(threshold.min_rating())
    }
}

impl Filter for MinimumRatingFilter {
    fn name(&self) -> &str {
        "MinimumRatingFilter"
    }

    fn matches(&self, movie: &MovieView) -> bool {
        movie
            .rating()
            .is_some_and(|rating| rating >= self.min_rating)
    }
}
