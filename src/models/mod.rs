// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{BoundingBox, Coordinate, Creator, Event, EventCategory, EventRecord, Reaction, UserProfile};
pub use requests::{FeedQuery, SearchEventsRequest};
pub use responses::{ErrorResponse, EventsResponse, HealthResponse};
