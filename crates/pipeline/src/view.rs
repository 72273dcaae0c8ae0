//! The per-movie view the list renders: a movie plus its genre names.

use catalog::{CatalogSnapshot, Movie, MovieId};
use serde::{Deserialize, Serialize};

/// A movie augmented with its resolved genre names.
///
/// Serializes flat, i.e. the movie's own fields followed by `genres`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieView {
    #[serde(flatten)]
    pub movie: Movie,
    pub genres: Vec<String>,
}

impl MovieView {
    pub fn new(movie: Movie, genres: Vec<String>) -> Self {
        Self { movie, genres }
    }

    pub fn id(&self) -> MovieId {
        self.movie.id
    }

    pub fn year(&self) -> Option<u16> {
        self.movie.year
    }

    pub fn rating(&self) -> Option<f32> {
        self.movie.rating
    }

    /// Case-sensitive exact membership test
    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|name| name == genre)
    }
}

/// Attach genre names to every movie of the snapshot, keeping provider order.
///
/// Movies the snapshot has no genre entry for get an empty list.
pub fn join_genres(snapshot: &CatalogSnapshot) -> Vec<MovieView> {
    let names = snapshot.genre_names_by_movie();

    snapshot
        .movies
        .iter()
        .map(|movie| {
            let genres = names.get(&movie.id).cloned().unwrap_or_default();
            MovieView::new(movie.clone(), genres)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{Genre, MovieGenre};
    use std::collections::BTreeMap;

    #[test]
    fn test_join_precomputed_mapping() {
        let snapshot = CatalogSnapshot {
            movies: vec![Movie::new(1, "Heat"), Movie::new(2, "Untitled")],
            genres: vec![Genre::new(1, "Crime").into()],
            movies_genres: Some(BTreeMap::from([(1, vec!["Crime".to_string()])])),
            movie_genres: None,
        };

        let views = join_genres(&snapshot);
        assert_eq!(views.len(), 2);
        assert_eq!(views[0].genres, vec!["Crime"]);
        assert!(views[1].genres.is_empty());
    }

    #[test]
    fn test_join_associations() {
        let snapshot = CatalogSnapshot {
            movies: vec![Movie::new(1, "Heat")],
            genres: vec![Genre::new(1, "Crime").into(), Genre::new(2, "Drama").into()],
            movies_genres: None,
            movie_genres: Some(vec![MovieGenre::new(1, 2), MovieGenre::new(1, 1)]),
        };

        let views = join_genres(&snapshot);
        assert_eq!(views[0].genres, vec!["Drama", "Crime"]);
        assert!(views[0].has_genre("Drama"));
        assert!(!views[0].has_genre("drama"));
    }

    #[test]
    fn test_view_serializes_flat() {
        let view = MovieView::new(Movie::new(3, "Up").with_year(2009), vec!["Animation".into()]);
        let value = serde_json::to_value(&view).unwrap();

        assert_eq!(value["id"], 3);
        assert_eq!(value["year"], 2009);
        assert_eq!(value["genres"][0], "Animation");
    }
}
