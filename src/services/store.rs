use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use thiserror::Error;
use crate::models::{Event, EventCategory, Reaction, UserProfile};

/// Errors raised by event store backends
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Read access to users, categories, events and reactions
///
/// Implementations never mutate anything; every call is a point read or a
/// filtered enumeration.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Location, search distance and preferred categories of a user
    async fn get_user(&self, user_id: i64) -> Result<Option<UserProfile>, StoreError>;

    /// First category with exactly this name
    async fn find_category_by_name(&self, name: &str) -> Result<Option<EventCategory>, StoreError>;

    /// Events of a category ending on or after `on_or_after`, in stable order
    async fn active_events(
        &self,
        category_id: i64,
        on_or_after: NaiveDate,
    ) -> Result<Vec<Event>, StoreError>;

    /// The user's reaction to each of `event_ids` that has one
    ///
    /// When both a like and a dislike exist for one event, the like wins.
    async fn reactions(
        &self,
        user_id: i64,
        event_ids: &[i64],
    ) -> Result<HashMap<i64, Reaction>, StoreError>;

    async fn health_check(&self) -> Result<bool, StoreError>;
}
