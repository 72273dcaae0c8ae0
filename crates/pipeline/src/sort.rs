//! Year ordering of the movie list.
//!
//! The sort is stable, so movies released the same year keep their relative
//! provider order. Movies without a year go after every dated movie in both
//! directions; among themselves they keep provider order.

use crate::criteria::YearOrder;
use crate::view::MovieView;
use std::cmp::Ordering;

/// Compare two optional years under the given order.
///
/// Total over `Option<u16>`, undated values last.
pub fn compare_years(a: Option<u16>, b: Option<u16>, order: YearOrder) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => match order {
            YearOrder::Recent => a.cmp(&b),
            YearOrder::Old => b.cmp(&a),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Sort movies in place by year
pub fn sort_by_year(movies: &mut [MovieView], order: YearOrder) {
    movies.sort_by(|a, b| compare_years(a.year(), b.year(), order));
}
