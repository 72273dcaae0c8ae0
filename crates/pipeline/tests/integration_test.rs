//! Integration tests for the pipeline.
//!
//! These tests drive `derive_view` end to end over small snapshots and check
//! the properties the list must hold for every combination of criteria.

use catalog::{CatalogSnapshot, Genre, Movie, MovieGenre};
use pipeline::{Criteria, MovieView, RatingThreshold, YearOrder, derive_view};
use std::collections::BTreeMap;

fn ids(movies: &[MovieView]) -> Vec<u32> {
    movies.iter().map(MovieView::id).collect()
}

/// The two-movie catalog used by the worked scenarios
fn two_movie_snapshot() -> CatalogSnapshot {
    CatalogSnapshot {
        movies: vec![
            Movie::new(1, "First").with_year(2001).with_rating(4.0),
            Movie::new(2, "Second").with_year(2010).with_rating(9.0),
        ],
        genres: vec![Genre::new(1, "Drama").into(), Genre::new(2, "Action").into()],
        movies_genres: Some(BTreeMap::from([
            (1, vec!["Drama".to_string()]),
            (2, vec!["Action".to_string(), "Drama".to_string()]),
        ])),
        movie_genres: None,
    }
}

/// A messier catalog: missing years and ratings, genreless movies, ties,
/// and genres resolved through association rows.
fn mixed_snapshot() -> CatalogSnapshot {
    let mut unrated = Movie::new(3, "Unrated").with_year(1999);
    unrated.rating = None;

    CatalogSnapshot {
        movies: vec![
            Movie::new(1, "Heat").with_year(1995).with_rating(8.3),
            Movie::new(2, "Flop").with_year(2000).with_rating(2.5),
            unrated,
            Movie::new(4, "Undated").with_rating(8.0),
            Movie::new(5, "Tie A").with_year(1995).with_rating(5.0),
            Movie::new(6, "No Genres").with_year(2012).with_rating(9.5),
            Movie::new(7, "Tie B").with_year(1995).with_rating(7.9),
        ],
        genres: vec![
            Genre::new(10, "Crime").into(),
            Genre::new(11, "Drama").into(),
            Genre::new(12, "Action").into(),
        ],
        movies_genres: None,
        movie_genres: Some(vec![
            MovieGenre::new(1, 10),
            MovieGenre::new(1, 12),
            MovieGenre::new(2, 12),
            MovieGenre::new(3, 11),
            MovieGenre::new(4, 11),
            MovieGenre::new(5, 10),
            MovieGenre::new(7, 11),
        ]),
    }
}

fn all_criteria() -> Vec<Criteria> {
    let orders = [None, Some(YearOrder::Recent), Some(YearOrder::Old)];
    let thresholds = [
        None,
        Some(RatingThreshold::FiveAndUp),
        Some(RatingThreshold::EightAndUp),
    ];
    let genres = [None, Some("Drama"), Some("Crime"), Some("Western")];

    let mut combos = Vec::new();
    for year_order in orders {
        for rating_threshold in thresholds {
            for genre in genres {
                combos.push(Criteria {
                    year_order,
                    rating_threshold,
                    genre: genre.map(str::to_string),
                });
            }
        }
    }
    combos
}

// ============================================================================
// Worked scenarios
// ============================================================================

#[test]
fn test_rating_threshold_eight() {
    let criteria = Criteria::new().with_rating_threshold(RatingThreshold::EightAndUp);
    let movies = derive_view(&two_movie_snapshot(), &criteria);
    assert_eq!(ids(&movies), vec![2]);
}

#[test]
fn test_year_order_recent() {
    let criteria = Criteria::new().with_year_order(YearOrder::Recent);
    let movies = derive_view(&two_movie_snapshot(), &criteria);
    assert_eq!(ids(&movies), vec![1, 2]);
}

#[test]
fn test_genre_action() {
    let criteria = Criteria::new().with_genre("Action");
    let movies = derive_view(&two_movie_snapshot(), &criteria);
    assert_eq!(ids(&movies), vec![2]);
    assert_eq!(movies[0].genres, vec!["Action", "Drama"]);
}

#[test]
fn test_rating_and_genre_intersect() {
    let criteria = Criteria::new()
        .with_rating_threshold(RatingThreshold::EightAndUp)
        .with_genre("Drama");
    let movies = derive_view(&two_movie_snapshot(), &criteria);
    assert_eq!(ids(&movies), vec![2]);
}

#[test]
fn test_year_order_old() {
    let criteria = Criteria::new().with_year_order(YearOrder::Old);
    let movies = derive_view(&two_movie_snapshot(), &criteria);
    assert_eq!(ids(&movies), vec![2, 1]);
}

#[test]
fn test_unknown_genre_is_empty_not_error() {
    let criteria = Criteria::new().with_genre("Western");
    assert!(derive_view(&two_movie_snapshot(), &criteria).is_empty());
}

#[test]
fn test_empty_snapshot() {
    let criteria = Criteria::new()
        .with_year_order(YearOrder::Recent)
        .with_rating_threshold(RatingThreshold::FiveAndUp);
    assert!(derive_view(&CatalogSnapshot::default(), &criteria).is_empty());
}

// ============================================================================
// Properties over every criteria combination
// ============================================================================

#[test]
fn test_inactive_criteria_is_identity() {
    for snapshot in [two_movie_snapshot(), mixed_snapshot()] {
        let movies = derive_view(&snapshot, &Criteria::new());
        let expected: Vec<u32> = snapshot.movies.iter().map(|m| m.id).collect();
        assert_eq!(ids(&movies), expected);

        for (view, movie) in movies.iter().zip(&snapshot.movies) {
            assert_eq!(&view.movie, movie);
        }
    }
}

#[test]
fn test_rating_threshold_is_sound_and_complete() {
    let snapshot = mixed_snapshot();
    for criteria in all_criteria() {
        let Some(threshold) = criteria.rating_threshold else {
            continue;
        };
        let movies = derive_view(&snapshot, &criteria);

        for view in &movies {
            let rating = view.rating().expect("unrated movie passed a threshold");
            assert!(rating >= threshold.min_rating(), "{criteria:?}");
        }

        // Every qualifying movie that also passes the genre filter is present
        let unfiltered = derive_view(&snapshot, &Criteria::new());
        for view in unfiltered {
            let passes_rating = view.rating().is_some_and(|r| r >= threshold.min_rating());
            let passes_genre = criteria.genre.as_deref().is_none_or(|g| view.has_genre(g));
            if passes_rating && passes_genre {
                assert!(ids(&movies).contains(&view.id()), "{criteria:?} dropped {}", view.id());
            }
        }
    }
}

#[test]
fn test_genre_filter_is_sound() {
    let snapshot = mixed_snapshot();
    for criteria in all_criteria() {
        let Some(genre) = criteria.genre.as_deref() else {
            continue;
        };
        for view in derive_view(&snapshot, &criteria) {
            assert!(view.has_genre(genre), "{criteria:?} kept {}", view.id());
        }
    }
}

#[test]
fn test_year_order_is_monotonic() {
    let snapshot = mixed_snapshot();
    for criteria in all_criteria() {
        let Some(order) = criteria.year_order else {
            continue;
        };
        let movies = derive_view(&snapshot, &criteria);
        let years: Vec<u16> = movies.iter().filter_map(MovieView::year).collect();

        let monotonic = match order {
            YearOrder::Recent => years.windows(2).all(|w| w[0] <= w[1]),
            YearOrder::Old => years.windows(2).all(|w| w[0] >= w[1]),
        };
        assert!(monotonic, "{criteria:?} gave years {years:?}");

        // Undated movies trail the dated ones
        let first_undated = movies.iter().position(|m| m.year().is_none());
        if let Some(pos) = first_undated {
            assert!(movies[pos..].iter().all(|m| m.year().is_none()));
        }
    }
}

#[test]
fn test_ties_keep_provider_order() {
    let criteria = Criteria::new().with_year_order(YearOrder::Recent);
    let movies = derive_view(&mixed_snapshot(), &criteria);
    let ties: Vec<u32> = movies
        .iter()
        .filter(|m| m.year() == Some(1995))
        .map(MovieView::id)
        .collect();
    assert_eq!(ties, vec![1, 5, 7]);
}

#[test]
fn test_derive_view_is_deterministic() {
    let snapshot = mixed_snapshot();
    let before = snapshot.clone();
    for criteria in all_criteria() {
        let first = derive_view(&snapshot, &criteria);
        let second = derive_view(&snapshot, &criteria);
        assert_eq!(first, second, "{criteria:?}");
    }
    assert_eq!(snapshot, before, "snapshot must not be mutated");
}

#[test]
fn test_genreless_movie_never_matches_genre_filter() {
    let snapshot = mixed_snapshot();
    for genre in ["Drama", "Crime", "Action"] {
        let movies = derive_view(&snapshot, &Criteria::new().with_genre(genre));
        assert!(!ids(&movies).contains(&6));
    }
}

#[test]
fn test_unrated_movie_passes_only_without_threshold() {
    let snapshot = mixed_snapshot();
    assert!(ids(&derive_view(&snapshot, &Criteria::new())).contains(&3));

    for threshold in [RatingThreshold::FiveAndUp, RatingThreshold::EightAndUp] {
        let criteria = Criteria::new().with_rating_threshold(threshold);
        assert!(!ids(&derive_view(&snapshot, &criteria)).contains(&3));
    }
}
