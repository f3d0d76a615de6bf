// Core algorithm exports
pub mod clock;
pub mod distance;
pub mod feed;
pub mod filters;
pub mod ranking;

pub use clock::{Clock, FixedClock, SystemClock};
pub use distance::{calculate_bounding_box, distance_km, haversine_distance, is_within_bounding_box};
pub use feed::{EventFeed, FeedError, FeedMode, DEFAULT_PER_CATEGORY_LIMIT};
pub use filters::{filter_events, passes_filter, FilterQuery};
pub use ranking::rank_events;
