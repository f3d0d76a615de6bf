use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// User location and recommendation preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "userId")]
    pub user_id: i64,
    /// Users who never shared a location have no coordinate
    #[serde(default)]
    pub coordinate: Option<Coordinate>,
    #[serde(rename = "maxDistanceKm")]
    pub max_distance_km: f64,
    #[serde(rename = "preferredCategoryIds", default)]
    pub preferred_category_ids: Vec<i64>,
}

/// Named grouping of events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventCategory {
    pub id: i64,
    pub name: String,
}

/// Display name parts of the user who created an event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Creator {
    pub first_name: String,
    pub last_name: String,
}

impl Creator {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// An event as read from the event store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub location_name: String,
    pub coordinate: Coordinate,
    pub category: EventCategory,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Maximum distance (km) from which the event accepts viewers
    pub visibility_radius_km: f64,
    /// Stored picture reference, absolute or relative to the media root
    pub picture: Option<String>,
    pub creator: Creator,
    pub link: String,
    pub likes: i64,
    pub dislikes: i64,
}

impl Event {
    /// Net popularity, negative when dislikes outnumber likes
    #[inline]
    pub fn score(&self) -> i64 {
        self.likes - self.dislikes
    }
}

/// A user's recorded opinion of an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Reaction {
    Like,
    Dislike,
}

impl Reaction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Reaction::Like => "like",
            Reaction::Dislike => "dislike",
        }
    }

    /// Wire value of an optional reaction: +1 liked, -1 disliked, 0 neither
    pub fn signum(reaction: Option<Reaction>) -> i8 {
        match reaction {
            Some(Reaction::Like) => 1,
            Some(Reaction::Dislike) => -1,
            None => 0,
        }
    }

    /// Merge two records for the same event; a like always wins
    pub fn merge(current: Option<Reaction>, next: Reaction) -> Reaction {
        match (current, next) {
            (Some(Reaction::Like), _) | (_, Reaction::Like) => Reaction::Like,
            _ => Reaction::Dislike,
        }
    }
}

impl std::str::FromStr for Reaction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "like" => Ok(Reaction::Like),
            "dislike" => Ok(Reaction::Dislike),
            other => Err(format!("unknown preference value: {}", other)),
        }
    }
}

/// Flat record sent to clients for each recommended event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: i64,
    pub name: String,
    pub location_name: String,
    pub category_name: String,
    pub picture_url: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub creator_display_name: String,
    pub link: String,
    pub score: i64,
    pub user_reaction: i8,
}

/// Geospatial bounding box, in degrees
///
/// `min_lon` may be below -180 or `max_lon` above 180 when the box
/// crosses the antimeridian.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}
