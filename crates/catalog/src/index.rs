//! CatalogStore building, validation and snapshotting.
//!
//! The provider loads its three record files once at startup, checks their
//! integrity, and from then on only hands out read-only snapshots.

use crate::error::{CatalogError, Result};
use crate::parser;
use crate::snapshot::{CatalogSnapshot, GenreEntry};
use crate::types::*;
use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use tracing::info;

impl CatalogStore {
    /// Load the catalog from a directory holding `movies.json`,
    /// `genres.json` and `movie_genres.json`.
    ///
    /// The three files are parsed in parallel, then the store is built and
    /// validated.
    pub fn load_from_dir(data_dir: &Path) -> Result<Self> {
        info!("Loading catalog from {:?}", data_dir);

        let movies_path = data_dir.join(parser::MOVIES_FILE);
        let genres_path = data_dir.join(parser::GENRES_FILE);
        let associations_path = data_dir.join(parser::MOVIE_GENRES_FILE);

        let ((movies, genres), associations) = rayon::join(
            || {
                rayon::join(
                    || parser::parse_movies(&movies_path),
                    || parser::parse_genres(&genres_path),
                )
            },
            || parser::parse_associations(&associations_path),
        );

        let store = Self::from_records(movies?, genres?, associations?)?;

        let (movies, genres, associations) = store.counts();
        info!(
            "Loaded {} movies, {} genres, {} associations",
            movies, genres, associations
        );
        Ok(store)
    }

    /// Build a validated store from already-parsed records.
    ///
    /// Duplicate movie or genre ids are rejected here, before `insert_*`
    /// would silently collapse them.
    pub fn from_records(
        movies: Vec<Movie>,
        genres: Vec<Genre>,
        associations: Vec<MovieGenre>,
    ) -> Result<Self> {
        ensure_unique("movie", movies.iter().map(|m| m.id))?;
        ensure_unique("genre", genres.iter().map(|g| g.id))?;

        let mut store = CatalogStore::new();
        for movie in movies {
            store.insert_movie(movie);
        }
        for genre in genres {
            store.insert_genre(genre);
        }
        for association in associations {
            store.insert_association(association);
        }

        store.validate()?;
        Ok(store)
    }

    /// Validate data integrity
    ///
    /// Check that:
    /// - Every association references an existing movie and genre
    /// - Ratings, when present, are finite and within 0-10
    pub fn validate(&self) -> Result<()> {
        for association in &self.associations {
            if !self.movie_positions.contains_key(&association.movie_id) {
                return Err(CatalogError::MissingReference {
                    entity: "Movie".to_string(),
                    id: association.movie_id,
                });
            }
            if !self.genre_positions.contains_key(&association.genre_id) {
                return Err(CatalogError::MissingReference {
                    entity: "Genre".to_string(),
                    id: association.genre_id,
                });
            }
        }

        for movie in &self.movies {
            if let Some(rating) = movie.rating {
                if !rating.is_finite() || !(0.0..=MAX_RATING).contains(&rating) {
                    return Err(CatalogError::InvalidValue {
                        field: format!("rating of movie {}", movie.id),
                        value: rating.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Materialize the full catalog as served by `GET /movies`.
    ///
    /// Every movie gets an entry in the precomputed genre mapping, empty when
    /// it has no genres.
    pub fn snapshot(&self) -> CatalogSnapshot {
        let movies_genres: BTreeMap<MovieId, Vec<String>> = self
            .movies
            .iter()
            .map(|movie| (movie.id, self.genre_names(movie.id)))
            .collect();

        CatalogSnapshot {
            movies: self.movies.clone(),
            genres: self.genres.iter().cloned().map(GenreEntry::from).collect(),
            movies_genres: Some(movies_genres),
            movie_genres: None,
        }
    }
}

fn ensure_unique(entity: &str, ids: impl Iterator<Item = u32>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::ValidationError(format!(
                "duplicate {} id {}",
                entity, id
            )));
        }
    }
    Ok(())
}
