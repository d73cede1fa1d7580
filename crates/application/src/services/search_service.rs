//! City search use case
//!
//! Trim, resolve, fetch, normalize. The two network calls are strictly
//! sequential because the fetch needs the resolver's coordinates. Nothing is
//! retried: the first failure ends the search.

use std::sync::Arc;

use domain::{DisplayWeather, normalize};
use tracing::{debug, info, instrument};

use super::request_tracker::{RequestToken, RequestTracker};
use crate::error::SearchError;
use crate::ports::{ForecastPort, LocationPort};

/// Runs city searches against the location and forecast ports
pub struct SearchService {
    location: Arc<dyn LocationPort>,
    forecast: Arc<dyn ForecastPort>,
    tracker: Arc<RequestTracker>,
}

impl std::fmt::Debug for SearchService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchService")
            .field("tracker", &self.tracker)
            .finish_non_exhaustive()
    }
}

impl SearchService {
    /// Create a new search service
    pub fn new(location: Arc<dyn LocationPort>, forecast: Arc<dyn ForecastPort>) -> Self {
        Self::with_tracker(location, forecast, Arc::new(RequestTracker::new()))
    }

    /// Create a search service sharing a generation counter with other holders
    pub fn with_tracker(
        location: Arc<dyn LocationPort>,
        forecast: Arc<dyn ForecastPort>,
        tracker: Arc<RequestTracker>,
    ) -> Self {
        Self {
            location,
            forecast,
            tracker,
        }
    }

    /// Generation counter used to drop superseded responses
    pub fn tracker(&self) -> &RequestTracker {
        &self.tracker
    }

    /// Start a new search, superseding any search still in flight
    pub async fn search(&self, query: &str) -> Result<DisplayWeather, SearchError> {
        let token = self.tracker.next();
        self.search_as(token, query).await
    }

    /// Run a search under an already issued token
    ///
    /// Returns [`SearchError::Stale`] once a newer token has been issued,
    /// checked after the resolve and again after the fetch.
    #[instrument(skip(self), fields(generation = token.generation()))]
    pub async fn search_as(
        &self,
        token: RequestToken,
        query: &str,
    ) -> Result<DisplayWeather, SearchError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(SearchError::EmptyInput);
        }

        let place = self
            .location
            .resolve(query)
            .await
            .map_err(|e| self.superseded_or(token, e))?;
        self.ensure_current(token)?;
        debug!(place = %place.label(), location = %place.location, "Resolved place");

        let raw = self
            .forecast
            .fetch(&place.location)
            .await
            .map_err(|e| self.superseded_or(token, e))?;
        self.ensure_current(token)?;

        let weather = normalize(place, raw)?;
        info!(
            place = %weather.place.label(),
            code = weather.condition.code,
            "Search completed"
        );
        Ok(weather)
    }

    fn ensure_current(&self, token: RequestToken) -> Result<(), SearchError> {
        if self.tracker.is_current(token) {
            Ok(())
        } else {
            debug!(
                generation = token.generation(),
                "Dropping response of superseded search"
            );
            Err(SearchError::Stale)
        }
    }

    fn superseded_or(&self, token: RequestToken, err: SearchError) -> SearchError {
        match self.ensure_current(token) {
            Ok(()) => err,
            Err(stale) => stale,
        }
    }
}
