use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use std::collections::HashMap;
use std::time::Duration;
use crate::models::{Coordinate, Creator, Event, EventCategory, Reaction, UserProfile};
use crate::services::store::{EventStore, StoreError};

/// PostgreSQL-backed event store
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Create a new PostgreSQL store from a connection string
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
        acquire_timeout: Duration,
        idle_timeout: Duration,
    ) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(acquire_timeout)
            .idle_timeout(idle_timeout)
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        // Run migrations on startup
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Create a new PostgreSQL store from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
        acquire_timeout_secs: Option<u64>,
        idle_timeout_secs: Option<u64>,
    ) -> Result<Self, StoreError> {
        tracing::info!("Connecting to PostgreSQL");

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
            Duration::from_secs(acquire_timeout_secs.unwrap_or(5)),
            Duration::from_secs(idle_timeout_secs.unwrap_or(600)),
        )
        .await
    }
}

fn event_from_row(row: &PgRow) -> Result<Event, StoreError> {
    Ok(Event {
        id: row.try_get("id")?,
        name: row.try_get("event_name")?,
        location_name: row.try_get("location_name")?,
        coordinate: Coordinate::new(row.try_get("latitude")?, row.try_get("longitude")?),
        category: EventCategory {
            id: row.try_get("category_id")?,
            name: row.try_get("category_name")?,
        },
        start_date: row.try_get("start_date")?,
        end_date: row.try_get("end_date")?,
        visibility_radius_km: row.try_get("visibility_radius_km")?,
        picture: row.try_get("picture")?,
        creator: Creator {
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
        },
        link: row.try_get("link")?,
        likes: row.try_get("likes")?,
        dislikes: row.try_get("dislikes")?,
    })
}

#[async_trait]
impl EventStore for PostgresStore {
    async fn get_user(&self, user_id: i64) -> Result<Option<UserProfile>, StoreError> {
        let query = r#"
            SELECT id, latitude, longitude, events_distance_km
            FROM users
            WHERE id = $1
        "#;

        let Some(row) = sqlx::query(query)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?
        else {
            return Ok(None);
        };

        let latitude: Option<f64> = row.try_get("latitude")?;
        let longitude: Option<f64> = row.try_get("longitude")?;
        let coordinate = match (latitude, longitude) {
            (Some(lat), Some(lon)) => Some(Coordinate::new(lat, lon)),
            _ => None,
        };

        let category_query = r#"
            SELECT category_id
            FROM user_preferred_categories
            WHERE user_id = $1
            ORDER BY category_id
        "#;

        let preferred_category_ids: Vec<i64> = sqlx::query(category_query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?
            .iter()
            .map(|row| row.try_get::<i64, _>("category_id"))
            .collect::<Result<_, _>>()?;

        Ok(Some(UserProfile {
            user_id: row.try_get("id")?,
            coordinate,
            max_distance_km: row.try_get("events_distance_km")?,
            preferred_category_ids,
        }))
    }

    async fn find_category_by_name(&self, name: &str) -> Result<Option<EventCategory>, StoreError> {
        let query = r#"
            SELECT id, name
            FROM event_categories
            WHERE name = $1
            ORDER BY id
            LIMIT 1
        "#;

        let row = sqlx::query(query)
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|row| {
            Ok(EventCategory {
                id: row.try_get("id")?,
                name: row.try_get("name")?,
            })
        })
        .transpose()
    }

    async fn active_events(
        &self,
        category_id: i64,
        on_or_after: NaiveDate,
    ) -> Result<Vec<Event>, StoreError> {
        let query = r#"
            SELECT e.id, e.event_name, e.location_name, e.latitude, e.longitude,
                   e.category_id, c.name AS category_name,
                   e.start_date, e.end_date, e.visibility_radius_km, e.picture,
                   u.first_name, u.last_name, e.link, e.likes, e.dislikes
            FROM events e
            JOIN event_categories c ON c.id = e.category_id
            JOIN users u ON u.id = e.creator_id
            WHERE e.category_id = $1 AND e.end_date >= $2
            ORDER BY e.id
        "#;

        let rows = sqlx::query(query)
            .bind(category_id)
            .bind(on_or_after)
            .fetch_all(&self.pool)
            .await?;

        let events = rows.iter().map(event_from_row).collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(
            "Category {} has {} events ending on or after {}",
            category_id,
            events.len(),
            on_or_after
        );

        Ok(events)
    }

    async fn reactions(
        &self,
        user_id: i64,
        event_ids: &[i64],
    ) -> Result<HashMap<i64, Reaction>, StoreError> {
        if event_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let query = r#"
            SELECT event_id, preference
            FROM event_user_preferences
            WHERE user_id = $1 AND event_id = ANY($2)
        "#;

        let rows = sqlx::query(query)
            .bind(user_id)
            .bind(event_ids)
            .fetch_all(&self.pool)
            .await?;

        let mut reactions: HashMap<i64, Reaction> = HashMap::new();
        for row in &rows {
            let event_id: i64 = row.try_get("event_id")?;
            let preference: String = row.try_get("preference")?;
            let reaction: Reaction = preference.parse().map_err(StoreError::InvalidData)?;

            let merged = Reaction::merge(reactions.get(&event_id).copied(), reaction);
            reactions.insert(event_id, merged);
        }

        Ok(reactions)
    }

    /// Health check for the database connection
    async fn health_check(&self) -> Result<bool, StoreError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}
