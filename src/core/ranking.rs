use std::collections::HashMap;
use crate::models::{Event, EventRecord, Reaction};

/// Order events by category name and build client records
///
/// Category names compare byte-wise. The sort is stable, so events of the
/// same category keep the order they were discovered in.
///
/// # Arguments
/// * `events` - Filtered events in discovery order
/// * `reactions` - The requesting user's reaction per event id
/// * `picture_url` - Resolves an event's picture reference to a URL
pub fn rank_events<F>(
    mut events: Vec<Event>,
    reactions: &HashMap<i64, Reaction>,
    picture_url: F,
) -> Vec<EventRecord>
where
    F: Fn(Option<&str>) -> Option<String>,
{
    events.sort_by(|a, b| a.category.name.cmp(&b.category.name));

    events
        .into_iter()
        .map(|event| {
            let user_reaction = Reaction::signum(reactions.get(&event.id).copied());
            let picture_url = picture_url(event.picture.as_deref());

            EventRecord {
                id: event.id,
                score: event.score(),
                creator_display_name: event.creator.display_name(),
                name: event.name,
                location_name: event.location_name,
                category_name: event.category.name,
                picture_url,
                start_date: event.start_date,
                end_date: event.end_date,
                link: event.link,
                user_reaction,
            }
        })
        .collect()
}
