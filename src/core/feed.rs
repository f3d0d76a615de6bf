use std::sync::Arc;
use thiserror::Error;
use crate::core::{
    clock::Clock,
    filters::{filter_events, FilterQuery},
    ranking::rank_events,
};
use crate::models::{EventRecord, UserProfile};
use crate::services::{EventStore, PictureUrls, StoreError};

/// Default number of events kept per category in capped mode
pub const DEFAULT_PER_CATEGORY_LIMIT: usize = 3;

/// Errors returned by the event feed
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Cannot resolve user {user_id}: {reason}")]
    InputResolution { user_id: i64, reason: String },

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Which categories to look at and how far to search
#[derive(Debug, Clone, PartialEq)]
pub enum FeedMode {
    /// Every preferred category, the user's own max distance
    All,
    /// Like `All`, keeping at most `per_category` events per category
    Capped { per_category: usize },
    /// One category by name with a caller-supplied distance
    Custom { distance_km: f64, category_name: String },
}

impl FeedMode {
    pub fn capped() -> Self {
        FeedMode::Capped {
            per_category: DEFAULT_PER_CATEGORY_LIMIT,
        }
    }
}

/// Nearby event recommendation pipeline
///
/// # Pipeline Stages
/// 1. Resolve the user's location and preferences
/// 2. Enumerate non-expired events per category
/// 3. Bounding box pre-filter, then expiry and dual-radius check
/// 4. Batched reaction lookup
/// 5. Sort by category name and build records
#[derive(Clone)]
pub struct EventFeed {
    pictures: PictureUrls,
    clock: Arc<dyn Clock>,
}

impl EventFeed {
    pub fn new(pictures: PictureUrls, clock: Arc<dyn Clock>) -> Self {
        Self { pictures, clock }
    }

    /// Recommend events to a user
    ///
    /// A missing user or a user without a stored location is an error.
    /// No preferred categories, an unknown category name or nothing nearby
    /// all give an empty list.
    pub async fn recommend(
        &self,
        store: &dyn EventStore,
        user_id: i64,
        mode: &FeedMode,
    ) -> Result<Vec<EventRecord>, FeedError> {
        let user = store
            .get_user(user_id)
            .await?
            .ok_or_else(|| FeedError::InputResolution {
                user_id,
                reason: "user not found".to_string(),
            })?;

        let origin = user.coordinate.ok_or_else(|| FeedError::InputResolution {
            user_id,
            reason: "no stored location".to_string(),
        })?;

        let Some((category_ids, max_distance_km, per_category_limit)) =
            self.resolve_scope(store, &user, mode).await?
        else {
            return Ok(Vec::new());
        };

        let query = FilterQuery {
            origin,
            max_distance_km,
            per_category_limit,
            today: self.clock.today(),
        };

        let mut batches = Vec::with_capacity(category_ids.len());
        for category_id in category_ids {
            batches.push(store.active_events(category_id, query.today).await?);
        }

        let total_candidates: usize = batches.iter().map(Vec::len).sum();
        let events = filter_events(&query, batches);

        let event_ids: Vec<i64> = events.iter().map(|e| e.id).collect();
        let reactions = store.reactions(user_id, &event_ids).await?;

        let records = rank_events(events, &reactions, |picture| self.pictures.resolve(picture));

        tracing::info!(
            "Recommending {} events to user {} (from {} candidates, mode {:?})",
            records.len(),
            user_id,
            total_candidates,
            mode
        );

        Ok(records)
    }

    /// Category ids, max distance and cap for a mode; `None` when there is
    /// nothing to search
    async fn resolve_scope(
        &self,
        store: &dyn EventStore,
        user: &UserProfile,
        mode: &FeedMode,
    ) -> Result<Option<(Vec<i64>, f64, Option<usize>)>, FeedError> {
        let scope = match mode {
            FeedMode::All => Some((user.preferred_category_ids.clone(), user.max_distance_km, None)),
            FeedMode::Capped { per_category } => Some((
                user.preferred_category_ids.clone(),
                user.max_distance_km,
                Some(*per_category),
            )),
            FeedMode::Custom {
                distance_km,
                category_name,
            } => match store.find_category_by_name(category_name).await? {
                Some(category) => Some((vec![category.id], *distance_km, None)),
                None => {
                    tracing::debug!("No category named {:?}", category_name);
                    None
                }
            },
        };

        Ok(scope)
    }
}
