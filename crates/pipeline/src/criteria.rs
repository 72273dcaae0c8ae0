//! User-selected criteria for the movie list.
//!
//! Each criterion has an explicit inactive state (`None`). The string forms
//! mirror the selector values the list UI offers: `recent` / `old` for the
//! year order, `0` (all), `5` and `8` for the rating threshold.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised when a criterion's string form is not recognised
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CriteriaError {
    #[error("Unknown year order '{0}' (expected 'recent' or 'old')")]
    UnknownYearOrder(String),

    #[error("Unknown rating threshold '{0}' (expected 0, 5 or 8)")]
    UnknownRatingThreshold(String),
}

/// Ordering of the list by release year.
///
/// `Recent` sorts ascending by year and `Old` descending, which is how the
/// year selector has always behaved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YearOrder {
    Recent,
    Old,
}

impl FromStr for YearOrder {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recent" => Ok(YearOrder::Recent),
            "old" => Ok(YearOrder::Old),
            _ => Err(CriteriaError::UnknownYearOrder(s.to_string())),
        }
    }
}

impl fmt::Display for YearOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearOrder::Recent => write!(f, "recent"),
            YearOrder::Old => write!(f, "old"),
        }
    }
}

/// The fixed set of minimum-rating thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RatingThreshold {
    FiveAndUp,
    EightAndUp,
}

impl RatingThreshold {
    /// Minimum rating a movie needs to pass
    pub fn min_rating(self) -> f32 {
        match self {
            RatingThreshold::FiveAndUp => 5.0,
            RatingThreshold::EightAndUp => 8.0,
        }
    }

    /// Parse a selector value. `0` and `all` mean "no threshold".
    pub fn parse_selection(s: &str) -> Result<Option<Self>, CriteriaError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "0" | "all" => Ok(None),
            "5" => Ok(Some(RatingThreshold::FiveAndUp)),
            "8" => Ok(Some(RatingThreshold::EightAndUp)),
            _ => Err(CriteriaError::UnknownRatingThreshold(s.to_string())),
        }
    }
}

impl fmt::Display for RatingThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} and up", self.min_rating())
    }
}

/// The (year order, rating threshold, genre) selection.
///
/// Criteria are plain values: the presentation layer replaces them on every
/// user event and hands them, together with a snapshot, to `derive_view`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criteria {
    pub year_order: Option<YearOrder>,
    pub rating_threshold: Option<RatingThreshold>,
    /// Exact, case-sensitive genre name
    pub genre: Option<String>,
}

impl Criteria {
    /// Criteria with every filter and the sort inactive
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_year_order(mut self, order: YearOrder) -> Self {
        self.year_order = Some(order);
        self
    }

    pub fn with_rating_threshold(mut self, threshold: RatingThreshold) -> Self {
        self.rating_threshold = Some(threshold);
        self
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    /// Build criteria from raw selector values, e.g. HTTP query parameters.
    ///
    /// Missing or empty values leave the criterion inactive.
    pub fn from_selection(
        year: Option<&str>,
        rating: Option<&str>,
        genre: Option<&str>,
    ) -> Result<Self, CriteriaError> {
        let year_order = match year.filter(|s| !s.is_empty()) {
            Some(s) => Some(s.parse::<YearOrder>()?),
            None => None,
        };

        let rating_threshold = match rating.filter(|s| !s.is_empty()) {
            Some(s) => RatingThreshold::parse_selection(s)?,
            None => None,
        };

        Ok(Self {
            year_order,
            rating_threshold,
            genre: genre.filter(|s| !s.is_empty()).map(str::to_string),
        })
    }

    /// True when the criteria leave the source list untouched
    pub fn is_inactive(&self) -> bool {
        self.year_order.is_none() && self.rating_threshold.is_none() && self.genre.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_order_parse() {
        assert_eq!("recent".parse::<YearOrder>(), Ok(YearOrder::Recent));
        assert_eq!("old".parse::<YearOrder>(), Ok(YearOrder::Old));
        assert!(matches!(
            "newest".parse::<YearOrder>(),
            Err(CriteriaError::UnknownYearOrder(_))
        ));
    }

    #[test]
    fn test_rating_selection() {
        assert_eq!(RatingThreshold::parse_selection("0"), Ok(None));
        assert_eq!(RatingThreshold::parse_selection("All"), Ok(None));
        assert_eq!(
            RatingThreshold::parse_selection("5"),
            Ok(Some(RatingThreshold::FiveAndUp))
        );
        assert_eq!(
            RatingThreshold::parse_selection("8"),
            Ok(Some(RatingThreshold::EightAndUp))
        );
        assert!(RatingThreshold::parse_selection("7").is_err());
    }

    #[test]
    fn test_from_selection() {
        let criteria = Criteria::from_selection(Some("old"), Some("8"), Some("Drama")).unwrap();
        assert_eq!(
            criteria,
            Criteria::new()
                .with_year_order(YearOrder::Old)
                .with_rating_threshold(RatingThreshold::EightAndUp)
                .with_genre("Drama")
        );

        let inactive = Criteria::from_selection(None, Some("0"), Some("")).unwrap();
        assert!(inactive.is_inactive());
    }

    #[test]
    fn test_from_selection_rejects_unknown_values() {
        assert!(Criteria::from_selection(Some("sideways"), None, None).is_err());
        assert!(Criteria::from_selection(None, Some("9"), None).is_err());
    }
}
