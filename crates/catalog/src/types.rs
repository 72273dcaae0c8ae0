//! Core domain types for the movie catalog.
//!
//! This module defines the records the provider owns (movies, genres and the
//! many-to-many association between them) and the `CatalogStore` that keeps
//! them in memory with the lookups the HTTP layer needs.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a movie
pub type MovieId = u32;

/// Unique identifier for a genre
pub type GenreId = u32;

/// Upper bound of the rating scale (ratings run from 0 to 10)
pub const MAX_RATING: f32 = 10.0;

// =============================================================================
// Catalog Records
// =============================================================================

/// A movie as served by the catalog provider.
///
/// Field names follow the wire format (`imageUrl`, `wikipediaUrl`), so the
/// same struct is used for the seed files, the HTTP response and the client.
/// `year` and `rating` are optional: older records may lack either one and
/// consumers must cope with that rather than fail to decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    #[serde(default)]
    pub year: Option<u16>,
    /// Rating on a 0-10 scale
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub plot: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub image_url: String,
    #[serde(default)]
    pub wikipedia_url: Option<String>,
}

impl Movie {
    /// Create a movie with only the fields the pipeline cares about set.
    pub fn new(id: MovieId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            year: None,
            rating: None,
            plot: String::new(),
            image_url: String::new(),
            wikipedia_url: None,
        }
    }

    /// Builder-style setter for the release year
    pub fn with_year(mut self, year: u16) -> Self {
        self.year = Some(year);
        self
    }

    /// Builder-style setter for the rating
    pub fn with_rating(mut self, rating: f32) -> Self {
        self.rating = Some(rating);
        self
    }
}

/// Nullable text columns come through as `null`; read those as empty.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A movie genre
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Genre {
    pub id: GenreId,
    pub name: String,
}

impl Genre {
    pub fn new(id: GenreId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// One row of the movie-genre join relation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MovieGenre {
    pub movie_id: MovieId,
    pub genre_id: GenreId,
}

impl MovieGenre {
    pub fn new(movie_id: MovieId, genre_id: GenreId) -> Self {
        Self { movie_id, genre_id }
    }
}

// =============================================================================
// CatalogStore - The In-Memory Catalog
// =============================================================================

/// Holds every movie, genre and association known to the provider.
///
/// Movies and genres are kept in insertion order, since the catalog is served
/// in the order the records were loaded. The position maps give O(1) lookups
/// by id without giving up that order.
#[derive(Debug, Default)]
pub struct CatalogStore {
    // Primary data stores, in load order
    pub(crate) movies: Vec<Movie>,
    pub(crate) genres: Vec<Genre>,
    pub(crate) associations: Vec<MovieGenre>,

    // Id -> position in the primary stores
    pub(crate) movie_positions: HashMap<MovieId, usize>,
    pub(crate) genre_positions: HashMap<GenreId, usize>,

    // Association indices
    /// Genres of each movie, in association order
    pub(crate) movie_genres: HashMap<MovieId, Vec<GenreId>>,
}

impl CatalogStore {
    /// Creates a new, empty CatalogStore
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a movie by ID
    pub fn get_movie(&self, id: MovieId) -> Option<&Movie> {
        self.movie_positions.get(&id).map(|&pos| &self.movies[pos])
    }

    /// Get a genre by ID
    pub fn get_genre(&self, id: GenreId) -> Option<&Genre> {
        self.genre_positions.get(&id).map(|&pos| &self.genres[pos])
    }

    /// All movies in load order
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// All genres in load order
    pub fn genres(&self) -> &[Genre] {
        &self.genres
    }

    /// All association rows in load order
    pub fn associations(&self) -> &[MovieGenre] {
        &self.associations
    }

    /// Genre ids associated with a movie
    ///
    /// Returns an empty slice if the movie has no genres
    pub fn get_movie_genre_ids(&self, movie_id: MovieId) -> &[GenreId] {
        self.movie_genres
            .get(&movie_id)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Resolve a movie's genre names by walking the association to the genre
    /// records. Associations pointing at unknown genres are skipped; `validate`
    /// is what rejects them at load time.
    pub fn genre_names(&self, movie_id: MovieId) -> Vec<String> {
        self.get_movie_genre_ids(movie_id)
            .iter()
            .filter_map(|genre_id| self.get_genre(*genre_id))
            .map(|genre| genre.name.clone())
            .collect()
    }

    /// Insert a movie, replacing any existing record with the same id in place
    pub fn insert_movie(&mut self, movie: Movie) {
        match self.movie_positions.get(&movie.id) {
            Some(&pos) => self.movies[pos] = movie,
            None => {
                self.movie_positions.insert(movie.id, self.movies.len());
                self.movies.push(movie);
            }
        }
    }

    /// Insert a genre, replacing any existing record with the same id in place
    pub fn insert_genre(&mut self, genre: Genre) {
        match self.genre_positions.get(&genre.id) {
            Some(&pos) => self.genres[pos] = genre,
            None => {
                self.genre_positions.insert(genre.id, self.genres.len());
                self.genres.push(genre);
            }
        }
    }

    /// Insert an association row and update the per-movie index.
    ///
    /// A repeated (movie, genre) pair is ignored.
    pub fn insert_association(&mut self, association: MovieGenre) {
        let genre_ids = self.movie_genres.entry(association.movie_id).or_default();
        if genre_ids.contains(&association.genre_id) {
            return;
        }
        genre_ids.push(association.genre_id);
        self.associations.push(association);
    }

    /// Get counts for debugging/validation: (movies, genres, associations)
    pub fn counts(&self) -> (usize, usize, usize) {
        (self.movies.len(), self.genres.len(), self.associations.len())
    }
}
