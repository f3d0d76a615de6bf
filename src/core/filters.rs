use chrono::NaiveDate;
use crate::core::distance::{calculate_bounding_box, distance_km, is_within_bounding_box};
use crate::models::{BoundingBox, Coordinate, Event};

/// Parameters shared by every feed mode
#[derive(Debug, Clone, Copy)]
pub struct FilterQuery {
    /// Where the user is
    pub origin: Coordinate,
    /// Upper bound on user-to-event distance, on top of each event's own radius
    pub max_distance_km: f64,
    /// Stop a category once this many events have passed
    pub per_category_limit: Option<usize>,
    /// Events ending before this date are expired
    pub today: NaiveDate,
}

impl FilterQuery {
    pub fn bounding_box(&self) -> BoundingBox {
        calculate_bounding_box(self.origin, self.max_distance_km)
    }
}

/// Check if a single event is visible to a user at `origin`
///
/// The event must not be expired and the distance must fit inside both the
/// user's maximum distance and the event's visibility radius.
#[inline]
pub fn passes_filter(
    event: &Event,
    origin: Coordinate,
    max_distance_km: f64,
    today: NaiveDate,
) -> bool {
    if event.end_date < today {
        return false;
    }

    let distance = distance_km(origin, event.coordinate);
    distance <= max_distance_km && distance <= event.visibility_radius_km
}

/// Filter candidate events, one batch per category, in discovery order
///
/// Batches are consumed in iteration order and each batch keeps its own
/// order. With a per-category limit, only passing events count toward it
/// and the rest of that batch is skipped once it is reached.
pub fn filter_events<I>(query: &FilterQuery, batches: I) -> Vec<Event>
where
    I: IntoIterator<Item = Vec<Event>>,
{
    let bbox = query.bounding_box();
    let mut accepted = Vec::new();

    for batch in batches {
        let mut added = 0usize;

        for event in batch {
            if query.per_category_limit.is_some_and(|limit| added >= limit) {
                break;
            }

            // Stage 1: conservative geospatial pre-filter
            if !is_within_bounding_box(event.coordinate, &bbox) {
                tracing::trace!("Event {} outside bounding box", event.id);
                continue;
            }

            // Stage 2: expiry and both radii
            if passes_filter(&event, query.origin, query.max_distance_km, query.today) {
                accepted.push(event);
                added += 1;
            } else {
                tracing::trace!("Event {} rejected by distance or expiry", event.id);
            }
        }
    }

    accepted
}
