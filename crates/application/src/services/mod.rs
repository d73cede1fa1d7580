//! Application services - Use case implementations

mod request_tracker;
mod search_service;
mod search_state;

pub use request_tracker::{RequestToken, RequestTracker};
pub use search_service::SearchService;
pub use search_state::SearchState;
