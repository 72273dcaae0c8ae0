//! Presentation state: the current snapshot and the current criteria.
//!
//! The session only holds and replaces that pair in response to discrete
//! events (a fetch starting or finishing, the user changing a selector). The
//! displayed list is always recomputed from scratch by `derive_view`.

use catalog::CatalogSnapshot;
use pipeline::{derive_view, Criteria, MovieView, RatingThreshold, YearOrder};
use tracing::{debug, warn};

use crate::client::ClientError;

/// Where the catalog fetch stands
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Ready(CatalogSnapshot),
    Failed(String),
}

/// Handle of one fetch, returned by `Session::begin_fetch`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

#[derive(Debug)]
pub struct Session {
    state: LoadState,
    criteria: Criteria,
    latest_fetch: u64,
}

impl Session {
    /// A fresh session is loading, with every criterion inactive
    pub fn new() -> Self {
        Self {
            state: LoadState::Loading,
            criteria: Criteria::new(),
            latest_fetch: 0,
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    /// Start a (re)load. Any fetch started earlier is superseded.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.latest_fetch += 1;
        self.state = LoadState::Loading;
        FetchTicket(self.latest_fetch)
    }

    /// Record the outcome of a fetch.
    ///
    /// Returns false, leaving the state untouched, when the ticket belongs to
    /// a superseded fetch. A successful result replaces the snapshot
    /// wholesale.
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<CatalogSnapshot, ClientError>,
    ) -> bool {
        if ticket.0 != self.latest_fetch {
            debug!("Discarding result of superseded fetch {}", ticket.0);
            return false;
        }

        self.state = match result {
            Ok(snapshot) => LoadState::Ready(snapshot),
            Err(err) => {
                warn!("Catalog fetch failed: {}", err);
                LoadState::Failed(err.to_string())
            }
        };
        true
    }

    pub fn set_criteria(&mut self, criteria: Criteria) {
        self.criteria = criteria;
    }

    pub fn set_year_order(&mut self, order: Option<YearOrder>) {
        self.criteria.year_order = order;
    }

    pub fn set_rating_threshold(&mut self, threshold: Option<RatingThreshold>) {
        self.criteria.rating_threshold = threshold;
    }

    pub fn set_genre(&mut self, genre: Option<String>) {
        self.criteria.genre = genre;
    }

    /// The list to display, or None while loading or after a failure
    pub fn view(&self) -> Option<Vec<MovieView>> {
        match &self.state {
            LoadState::Ready(snapshot) => Some(derive_view(snapshot, &self.criteria)),
            LoadState::Loading | LoadState::Failed(_) => None,
        }
    }

    /// Genre names for the genre selector; empty until a snapshot is loaded
    pub fn genre_names(&self) -> Vec<&str> {
        match &self.state {
            LoadState::Ready(snapshot) => snapshot.genre_names(),
            LoadState::Loading | LoadState::Failed(_) => Vec::new(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
