use serde::{Deserialize, Serialize};
use validator::Validate;

/// Query string for the preference-driven feeds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedQuery {
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: i64,
}

/// Request for events of one category within a caller-chosen distance
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SearchEventsRequest {
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: i64,
    #[validate(range(min = 0.0))]
    #[serde(alias = "distance_km", rename = "distanceKm")]
    pub distance_km: f64,
    #[validate(length(min = 1))]
    pub category: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(distance_km: f64, category: &str) -> SearchEventsRequest {
        SearchEventsRequest {
            user_id: 1,
            distance_km,
            category: category.to_string(),
        }
    }

    #[test]
    fn test_valid_search_request() {
        assert!(request(5.0, "Music").validate().is_ok());
        assert!(request(0.0, "Music").validate().is_ok());
    }

    #[test]
    fn test_rejects_negative_distance() {
        assert!(request(-1.0, "Music").validate().is_err());
    }

    #[test]
    fn test_rejects_empty_category() {
        assert!(request(5.0, "").validate().is_err());
    }

    #[test]
    fn test_accepts_both_key_styles() {
        let camel: SearchEventsRequest =
            serde_json::from_str(r#"{"userId": 7, "distanceKm": 2.5, "category": "Art"}"#).unwrap();
        let snake: SearchEventsRequest =
            serde_json::from_str(r#"{"user_id": 7, "distance_km": 2.5, "category": "Art"}"#).unwrap();
        assert_eq!(camel.user_id, snake.user_id);
        assert_eq!(camel.distance_km, snake.distance_km);
    }
}
