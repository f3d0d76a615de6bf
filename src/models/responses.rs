use serde::{Deserialize, Serialize};
use crate::models::domain::EventRecord;

/// Response for every event feed endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventsResponse {
    pub events: Vec<EventRecord>,
    pub total: usize,
}

impl From<Vec<EventRecord>> for EventsResponse {
    fn from(events: Vec<EventRecord>) -> Self {
        let total = events.len();
        Self { events, total }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
