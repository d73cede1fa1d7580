//! Location resolver port
//!
//! Turns free-text search input into the single best-matching place.

use async_trait::async_trait;
use domain::ResolvedPlace;
#[cfg(test)]
use mockall::automock;

use crate::error::SearchError;

/// Port for resolving a city name to coordinates
#[cfg_attr(test, automock)]
#[async_trait]
pub trait LocationPort: Send + Sync {
    /// Resolve trimmed, non-empty search text to one place
    ///
    /// Zero matches is reported as [`SearchError::NotFound`].
    async fn resolve(&self, query: &str) -> Result<ResolvedPlace, SearchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn LocationPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn LocationPort>();
    }
}
