// Integration tests for Nearby Events

use chrono::NaiveDate;
use nearby_events::core::{EventFeed, FeedError, FeedMode, FixedClock};
use nearby_events::models::{Coordinate, Creator, Event, EventCategory, Reaction, UserProfile};
use nearby_events::services::{MemoryStore, PictureUrls};
use std::sync::Arc;

const USER_ID: i64 = 42;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn category(id: i64, name: &str) -> EventCategory {
    EventCategory {
        id,
        name: name.to_string(),
    }
}

fn create_test_event(id: i64, category: &EventCategory, lat: f64, lon: f64) -> Event {
    Event {
        id,
        name: format!("Event {}", id),
        location_name: "Tunis".to_string(),
        coordinate: Coordinate::new(lat, lon),
        category: category.clone(),
        start_date: date(2024, 6, 1),
        end_date: date(2024, 6, 30),
        visibility_radius_km: 15.0,
        picture: Some(format!("events/{}.png", id)),
        creator: Creator {
            first_name: "Mehdi".to_string(),
            last_name: "Ayari".to_string(),
        },
        link: format!("https://example.com/events/{}", id),
        likes: 0,
        dislikes: 0,
    }
}

fn create_feed(today: NaiveDate) -> EventFeed {
    EventFeed::new(
        PictureUrls::new("https://media.example.com/media/"),
        Arc::new(FixedClock(today)),
    )
}

/// Tunis city center, 10km search radius, prefers Sports (3) then Music (1)
fn create_store() -> MemoryStore {
    let music = category(1, "Music");
    let art = category(2, "Art");
    let sports = category(3, "Sports");

    let expired = Event {
        end_date: date(2024, 6, 9),
        ..create_test_event(5, &music, 36.80, 10.18)
    };
    let tiny_radius = Event {
        visibility_radius_km: 1.0,
        // ~5.5km north
        ..create_test_event(6, &music, 36.85, 10.18)
    };

    MemoryStore::new()
        .with_user(UserProfile {
            user_id: USER_ID,
            coordinate: Some(Coordinate::new(36.80, 10.18)),
            max_distance_km: 10.0,
            preferred_category_ids: vec![3, 1],
        })
        .with_category(category(4, "Theatre"))
        .with_event(create_test_event(1, &music, 36.80, 10.18))
        .with_event(create_test_event(2, &sports, 36.81, 10.19))
        .with_event(create_test_event(3, &art, 36.80, 10.18))
        // ~33km south, outside the user's radius
        .with_event(create_test_event(4, &music, 36.50, 10.18))
        .with_event(expired)
        .with_event(tiny_radius)
        .with_event(create_test_event(7, &sports, 36.82, 10.20))
        .with_event(create_test_event(8, &music, 36.79, 10.17))
        .with_event(create_test_event(9, &sports, 36.80, 10.18))
        .with_event(create_test_event(10, &sports, 36.80, 10.18))
        .with_reaction(USER_ID, 1, Reaction::Like)
        .with_reaction(USER_ID, 2, Reaction::Dislike)
        .with_reaction(USER_ID + 1, 8, Reaction::Like)
}

#[tokio::test]
async fn test_integration_all_mode() {
    let store = create_store();
    let feed = create_feed(date(2024, 6, 10));

    let records = feed.recommend(&store, USER_ID, &FeedMode::All).await.unwrap();
    let ids: Vec<i64> = records.iter().map(|r| r.id).collect();

    // Music before Sports; discovery order inside each category
    assert_eq!(ids, vec![1, 8, 2, 7, 9, 10]);
}

#[tokio::test]
async fn test_integration_capped_mode() {
    let store = create_store();
    let feed = create_feed(date(2024, 6, 10));

    let records = feed.recommend(&store, USER_ID, &FeedMode::capped()).await.unwrap();
    let ids: Vec<i64> = records.iter().map(|r| r.id).collect();

    assert_eq!(ids, vec![1, 8, 2, 7, 9]);
}

#[tokio::test]
async fn test_integration_custom_mode() {
    let store = create_store();
    let feed = create_feed(date(2024, 6, 10));

    let mode = FeedMode::Custom {
        distance_km: 50.0,
        category_name: "Music".to_string(),
    };
    let records = feed.recommend(&store, USER_ID, &mode).await.unwrap();
    let ids: Vec<i64> = records.iter().map(|r| r.id).collect();

    // Event 4 is within 50km but only visible from 15km
    assert_eq!(ids, vec![1, 8]);

    let mode = FeedMode::Custom {
        distance_km: 50.0,
        category_name: "Jazz".to_string(),
    };
    assert!(feed.recommend(&store, USER_ID, &mode).await.unwrap().is_empty());

    let mode = FeedMode::Custom {
        distance_km: 50.0,
        category_name: "Theatre".to_string(),
    };
    assert!(feed.recommend(&store, USER_ID, &mode).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_integration_expiry_follows_clock() {
    let store = create_store();

    let records = create_feed(date(2024, 6, 1))
        .recommend(&store, USER_ID, &FeedMode::All)
        .await
        .unwrap();
    assert!(records.iter().any(|r| r.id == 5));

    let records = create_feed(date(2024, 7, 1))
        .recommend(&store, USER_ID, &FeedMode::All)
        .await
        .unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn test_integration_record_contents() {
    let store = create_store();
    let feed = create_feed(date(2024, 6, 10));

    let records = feed.recommend(&store, USER_ID, &FeedMode::All).await.unwrap();

    let liked = records.iter().find(|r| r.id == 1).unwrap();
    assert_eq!(liked.user_reaction, 1);
    assert_eq!(liked.category_name, "Music");
    assert_eq!(liked.creator_display_name, "Mehdi Ayari");
    assert_eq!(
        liked.picture_url.as_deref(),
        Some("https://media.example.com/media/events/1.png")
    );

    let disliked = records.iter().find(|r| r.id == 2).unwrap();
    assert_eq!(disliked.user_reaction, -1);

    // Another user's like does not leak
    let neutral = records.iter().find(|r| r.id == 8).unwrap();
    assert_eq!(neutral.user_reaction, 0);
}

#[tokio::test]
async fn test_integration_record_json_shape() {
    let store = create_store();
    let feed = create_feed(date(2024, 6, 10));

    let records = feed.recommend(&store, USER_ID, &FeedMode::All).await.unwrap();
    let json = serde_json::to_value(&records[0]).unwrap();

    for key in [
        "id",
        "name",
        "location_name",
        "category_name",
        "picture_url",
        "start_date",
        "end_date",
        "creator_display_name",
        "link",
        "score",
        "user_reaction",
    ] {
        assert!(json.get(key).is_some(), "missing key {}", key);
    }
    assert_eq!(json["start_date"], "2024-06-01");
}

#[tokio::test]
async fn test_integration_unknown_user() {
    let store = create_store();
    let feed = create_feed(date(2024, 6, 10));

    let result = feed.recommend(&store, 7, &FeedMode::All).await;
    assert!(matches!(result, Err(FeedError::InputResolution { user_id: 7, .. })));
}
