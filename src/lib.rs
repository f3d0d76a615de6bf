//! Nearby events - recommends upcoming events close to a user
//!
//! Events are kept when they have not ended, sit within the user's search
//! distance and within the event's own visibility radius. Results are grouped
//! by category name and enriched with the user's own reaction.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{distance_km, haversine_distance, EventFeed, FeedError, FeedMode};
pub use models::{Coordinate, Event, EventCategory, EventRecord, Reaction, UserProfile};
pub use services::{EventStore, MemoryStore, PictureUrls, PostgresStore};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let point = Coordinate::new(36.8065, 10.1815);
        assert_eq!(distance_km(point, point), 0.0);
    }
}
