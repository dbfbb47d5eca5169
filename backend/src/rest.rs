use axum::{
    extract::{Query, State},
    http::{HeaderMap, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use shared::{ApiEnvelope, Event, LogEntry, LogResponse};
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, error, info, warn};

use crate::config::ServerConfig;
use crate::domain::{Clock, EventCatalog};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 100;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: EventCatalog,
    pub clock: Clock,
}

impl AppState {
    pub fn new(catalog: EventCatalog, clock: Clock) -> Self {
        Self { catalog, clock }
    }
}

/// Query parameters for the upcoming events endpoint
#[derive(Deserialize, Debug)]
pub struct UpcomingEventsQuery {
    pub limit: Option<u32>,
}

/// Create the Axum router with all routes configured
pub fn create_router(state: AppState, config: &ServerConfig) -> Router {
    // CORS setup to allow frontend to make requests
    let cors = CorsLayer::new()
        .allow_origin(config.allowed_origin.clone())
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/events/upcoming", get(get_upcoming_events))
        .route("/logs", post(log_message));

    Router::new()
        .nest("/api", api_routes)
        .layer(cors)
        .with_state(state)
}

/// Axum handler function for GET /api/events/upcoming
pub async fn get_upcoming_events(
    State(state): State<AppState>,
    Query(query): Query<UpcomingEventsQuery>,
    headers: HeaderMap,
) -> impl IntoResponse {
    info!("GET /api/events/upcoming - query: {:?}", query);
    debug!(
        "Authorization header present: {}",
        headers.contains_key(axum::http::header::AUTHORIZATION)
    );

    let limit = query.limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;

    match state.catalog.upcoming(state.clock.today(), limit).await {
        Ok(events) => (StatusCode::OK, Json(ApiEnvelope::ok(events))).into_response(),
        Err(e) => {
            error!("Error loading upcoming events: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiEnvelope::<Vec<Event>>::failure("Failed to load upcoming events")),
            )
                .into_response()
        }
    }
}

/// Axum handler function for POST /api/logs
pub async fn log_message(Json(request): Json<LogEntry>) -> Json<LogResponse> {
    let component = request.component.as_deref().unwrap_or("frontend");

    match request.level.to_lowercase().as_str() {
        "debug" => debug!("[{}] {}", component, request.message),
        "warn" => warn!("[{}] {}", component, request.message),
        "error" => error!("[{}] {}", component, request.message),
        _ => info!("[{}] {}", component, request.message),
    }

    Json(LogResponse { success: true })
}
