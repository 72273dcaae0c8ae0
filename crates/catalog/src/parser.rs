//! Parser for the provider's catalog files.
//!
//! The catalog directory holds three JSON files, each a top-level array:
//! - movies.json: `[{"id", "title", "year", "rating", "plot", "imageUrl", "wikipediaUrl"}]`
//! - genres.json: `[{"id", "name"}]`
//! - movie_genres.json: `[{"movie_id", "genre_id"}]`

use crate::error::{CatalogError, Result};
use crate::types::*;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;

pub const MOVIES_FILE: &str = "movies.json";
pub const GENRES_FILE: &str = "genres.json";
pub const MOVIE_GENRES_FILE: &str = "movie_genres.json";

/// Read a JSON array of records from `path`.
fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file = File::open(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => CatalogError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => CatalogError::IoError(err),
    })?;

    serde_json::from_reader(BufReader::new(file)).map_err(|err| CatalogError::ParseError {
        file: path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string()),
        line: err.line(),
        reason: err.to_string(),
    })
}

/// Parse the movies file
pub fn parse_movies(path: &Path) -> Result<Vec<Movie>> {
    read_records(path)
}

/// Parse the genres file
pub fn parse_genres(path: &Path) -> Result<Vec<Genre>> {
    read_records(path)
}

/// Parse the movie-genre association file
pub fn parse_associations(path: &Path) -> Result<Vec<MovieGenre>> {
    read_records(path)
}
