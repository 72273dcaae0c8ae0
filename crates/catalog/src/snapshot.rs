//! The catalog snapshot: what one `GET /movies` returns.
//!
//! Providers have shipped two shapes of the movie -> genre association:
//! a precomputed `movies_genres` mapping (movie id -> genre names), or the raw
//! `movie_genres` join rows that have to be resolved against the genre
//! records. `CatalogSnapshot::genre_names_by_movie` hides the difference so
//! consumers never branch on the shape.

use crate::types::{Genre, Movie, MovieGenre, MovieId};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Entry of the snapshot's `genres` list.
///
/// Some providers send full genre records, others only the names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GenreEntry {
    Record(Genre),
    Name(String),
}

impl GenreEntry {
    pub fn name(&self) -> &str {
        match self {
            GenreEntry::Record(genre) => &genre.name,
            GenreEntry::Name(name) => name,
        }
    }
}

impl From<Genre> for GenreEntry {
    fn from(genre: Genre) -> Self {
        GenreEntry::Record(genre)
    }
}

/// Point-in-time copy of the whole catalog.
///
/// A snapshot is never patched: a reload replaces it wholesale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    pub movies: Vec<Movie>,

    #[serde(default)]
    pub genres: Vec<GenreEntry>,

    /// Precomputed movie id -> ordered genre names
    #[serde(
        default,
        deserialize_with = "deserialize_genre_mapping",
        skip_serializing_if = "Option::is_none"
    )]
    pub movies_genres: Option<BTreeMap<MovieId, Vec<String>>>,

    /// Raw association rows, used when no precomputed mapping is present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub movie_genres: Option<Vec<MovieGenre>>,
}

impl CatalogSnapshot {
    /// Names of every genre in the snapshot, in provider order
    pub fn genre_names(&self) -> Vec<&str> {
        self.genres.iter().map(GenreEntry::name).collect()
    }

    /// Resolve the genre names of every movie.
    ///
    /// The precomputed mapping wins when present. Otherwise the association
    /// rows are joined against the genre records; rows whose genre is not in
    /// the snapshot are skipped. Movies without an entry simply have no
    /// genres, so callers should default to an empty list.
    pub fn genre_names_by_movie(&self) -> HashMap<MovieId, Vec<String>> {
        if let Some(mapping) = &self.movies_genres {
            return mapping
                .iter()
                .map(|(id, names)| (*id, names.clone()))
                .collect();
        }

        let Some(associations) = &self.movie_genres else {
            return HashMap::new();
        };

        let names_by_id: HashMap<_, _> = self
            .genres
            .iter()
            .filter_map(|entry| match entry {
                GenreEntry::Record(genre) => Some((genre.id, genre.name.as_str())),
                GenreEntry::Name(_) => None,
            })
            .collect();

        let mut resolved: HashMap<MovieId, Vec<String>> = HashMap::new();
        for association in associations {
            if let Some(name) = names_by_id.get(&association.genre_id) {
                resolved
                    .entry(association.movie_id)
                    .or_default()
                    .push((*name).to_string());
            }
        }
        resolved
    }
}

/// Accept the mapping either as a JSON object keyed by movie id, or as a
/// plain list. PHP-style serializers emit a list when the keys happen to be
/// `0..n` (most visibly an empty mapping comes out as `[]`); the list index
/// is then the movie id.
fn deserialize_genre_mapping<'de, D>(
    deserializer: D,
) -> Result<Option<BTreeMap<MovieId, Vec<String>>>, D::Error>
where
    D: Deserializer<'de>,
{
    // Keys stay strings here: integer map keys do not survive the buffering
    // that untagged enums do. A `null` entry means no genres.
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Mapping {
        Map(BTreeMap<String, Option<Vec<String>>>),
        List(Vec<Option<Vec<String>>>),
    }

    let Some(mapping) = Option::<Mapping>::deserialize(deserializer)? else {
        return Ok(None);
    };

    let resolved: BTreeMap<MovieId, Vec<String>> = match mapping {
        Mapping::Map(map) => map
            .into_iter()
            .map(|(key, names)| {
                key.parse::<MovieId>()
                    .map(|id| (id, names.unwrap_or_default()))
                    .map_err(|_| D::Error::custom(format!("invalid movie id key: {key}")))
            })
            .collect::<Result<_, _>>()?,
        Mapping::List(list) => list
            .into_iter()
            .enumerate()
            .map(|(idx, names)| (idx as MovieId, names.unwrap_or_default()))
            .collect(),
    };
    Ok(Some(resolved))
}
