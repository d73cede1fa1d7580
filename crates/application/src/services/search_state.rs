//! View model for the search screen
//!
//! Holds what the rendering layer draws: a loading flag, the last successful
//! forecast and the last error. The forecast and the error are never both set.

use domain::DisplayWeather;
use tracing::debug;

use crate::error::SearchError;

#[derive(Debug, Clone, Default)]
pub struct SearchState {
    /// A search is in flight
    pub loading: bool,
    /// Forecast of the last successful search
    pub display: Option<DisplayWeather>,
    /// Error of the last failed search
    pub error: Option<SearchError>,
}

impl SearchState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a search as started
    ///
    /// The previous forecast stays visible until the new search completes.
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Apply the outcome of a search
    ///
    /// A failure clears the previous forecast. Outcomes of superseded searches
    /// leave the state untouched, since a newer search is still in flight.
    pub fn complete(&mut self, outcome: Result<DisplayWeather, SearchError>) {
        match outcome {
            Err(SearchError::Stale) => {
                debug!("Ignoring completion of a superseded search");
            },
            Ok(weather) => {
                self.loading = false;
                self.display = Some(weather);
                self.error = None;
            },
            Err(err) => {
                self.loading = false;
                self.display = None;
                self.error = Some(err);
            },
        }
    }
}
