use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;
use crate::core::{EventFeed, FeedError, FeedMode};
use crate::models::{ErrorResponse, EventsResponse, FeedQuery, HealthResponse, SearchEventsRequest};
use crate::services::EventStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn EventStore>,
    pub feed: EventFeed,
    pub per_category_limit: usize,
}

/// Configure all event routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/events/nearby", web::get().to(nearby_events))
        .route("/events/highlights", web::get().to(highlighted_events))
        .route("/events/search", web::post().to(search_events));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let store_healthy = state.store.health_check().await.unwrap_or(false);

    let status = if store_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// All nearby events in the user's preferred categories
///
/// GET /api/v1/events/nearby?userId={userId}
async fn nearby_events(
    state: web::Data<AppState>,
    query: web::Query<FeedQuery>,
) -> impl Responder {
    respond(&state, query.user_id, FeedMode::All).await
}

/// A few nearby events per preferred category
///
/// GET /api/v1/events/highlights?userId={userId}
async fn highlighted_events(
    state: web::Data<AppState>,
    query: web::Query<FeedQuery>,
) -> impl Responder {
    let mode = FeedMode::Capped {
        per_category: state.per_category_limit,
    };
    respond(&state, query.user_id, mode).await
}

/// Nearby events of one category within a chosen distance
///
/// POST /api/v1/events/search
///
/// Request body:
/// ```json
/// {
///   "userId": 42,
///   "distanceKm": 15.0,
///   "category": "Music"
/// }
/// ```
async fn search_events(
    state: web::Data<AppState>,
    req: web::Json<SearchEventsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for search_events request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let req = req.into_inner();
    let mode = FeedMode::Custom {
        distance_km: req.distance_km,
        category_name: req.category,
    };
    respond(&state, req.user_id, mode).await
}

async fn respond(state: &AppState, user_id: i64, mode: FeedMode) -> HttpResponse {
    match state.feed.recommend(state.store.as_ref(), user_id, &mode).await {
        Ok(records) => HttpResponse::Ok().json(EventsResponse::from(records)),
        Err(e @ FeedError::InputResolution { .. }) => {
            tracing::info!("Rejected feed request: {}", e);
            HttpResponse::NotFound().json(ErrorResponse {
                error: "Unresolved user".to_string(),
                message: e.to_string(),
                status_code: 404,
            })
        }
        Err(e) => {
            tracing::error!("Failed to build feed for user {}: {}", user_id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to load events".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}
