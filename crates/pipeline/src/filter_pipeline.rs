//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::criteria::Criteria;
use crate::filters::{GenreFilter, MinimumRatingFilter};
use crate::traits::Filter;
use crate::view::MovieView;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(MinimumRatingFilter::new(8.0))
///     .add_filter(GenreFilter::new("Drama"));
///
/// let filtered = pipeline.apply(movies);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Build the pipeline for the active filters of `criteria`:
    /// rating threshold first, then genre.
    pub fn from_criteria(criteria: &Criteria) -> Self {
        let mut pipeline = Self::new();
        if let Some(threshold) = criteria.rating_threshold {
            pipeline = pipeline.add_filter(MinimumRatingFilter::from(threshold));
        }
        if let Some(genre) = &criteria.genre {
            pipeline = pipeline.add_filter(GenreFilter::new(genre.clone()));
        }
        pipeline
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Number of filters in the pipeline
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Apply all filters in sequence to the movies.
    ///
    /// A movie survives only if every filter accepts it; the relative order
    /// of survivors is unchanged.
    pub fn apply(&self, movies: Vec<MovieView>) -> Vec<MovieView> {
        let mut current = movies;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
