//! Event HTTP Routes
//!
//! The five CRUD endpoints over the event catalog. Request bodies are
//! decoded from raw JSON and validated against the field constraints
//! here, before any store access; handlers themselves only dispatch.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::LazyLock;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::{ApiError, ApiResult};
use crate::events::{Event, EventCatalog, EventPatch, EventStatus};

static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date pattern"));

const MAX_EVENT_ID_LEN: usize = 100;
const MAX_TITLE_LEN: usize = 200;
const MAX_DESCRIPTION_LEN: usize = 1000;
const MAX_LOCATION_LEN: usize = 200;
const MAX_ORGANIZER_LEN: usize = 200;

// ==================
// Shared State
// ==================

/// Event routes state shared across handlers
pub struct EventsState {
    pub catalog: EventCatalog,
}

impl EventsState {
    pub fn new(table_name: &str) -> Self {
        Self {
            catalog: EventCatalog::open(table_name),
        }
    }
}

/// Build the event router over shared state
pub fn event_routes(state: Arc<EventsState>) -> Router {
    Router::new()
        .route("/events", get(list_events).post(create_event))
        .route(
            "/events/:event_id",
            get(get_event).put(update_event).delete(delete_event),
        )
        .with_state(state)
}

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Deserialize)]
pub struct CreateEventRequest {
    #[serde(rename = "eventId")]
    pub event_id: String,
    pub title: String,
    pub description: String,
    pub date: String,
    pub location: String,
    pub capacity: i64,
    pub organizer: String,
    pub status: String,
}

impl CreateEventRequest {
    /// Validates every field and produces the typed event.
    fn into_event(self) -> ApiResult<Event> {
        check_length("eventId", &self.event_id, MAX_EVENT_ID_LEN)?;
        check_length("title", &self.title, MAX_TITLE_LEN)?;
        check_length("description", &self.description, MAX_DESCRIPTION_LEN)?;
        check_date(&self.date)?;
        check_length("location", &self.location, MAX_LOCATION_LEN)?;
        check_capacity(self.capacity)?;
        check_length("organizer", &self.organizer, MAX_ORGANIZER_LEN)?;
        let status = parse_status(&self.status)?;

        Ok(Event {
            event_id: self.event_id,
            title: self.title,
            description: self.description,
            date: self.date,
            location: self.location,
            capacity: self.capacity,
            organizer: self.organizer,
            status,
        })
    }
}

/// Partial update body; absent fields stay untouched. JSON `null` is
/// treated the same as an absent field.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateEventRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub location: Option<String>,
    pub capacity: Option<i64>,
    pub organizer: Option<String>,
    pub status: Option<String>,
}

impl UpdateEventRequest {
    /// Validates the provided fields and produces the typed patch.
    fn into_patch(self) -> ApiResult<EventPatch> {
        if let Some(title) = &self.title {
            check_length("title", title, MAX_TITLE_LEN)?;
        }
        if let Some(description) = &self.description {
            check_length("description", description, MAX_DESCRIPTION_LEN)?;
        }
        if let Some(date) = &self.date {
            check_date(date)?;
        }
        if let Some(location) = &self.location {
            check_length("location", location, MAX_LOCATION_LEN)?;
        }
        if let Some(capacity) = self.capacity {
            check_capacity(capacity)?;
        }
        if let Some(organizer) = &self.organizer {
            check_length("organizer", organizer, MAX_ORGANIZER_LEN)?;
        }
        let status = match &self.status {
            Some(raw) => Some(parse_status(raw)?),
            None => None,
        };

        Ok(EventPatch {
            title: self.title,
            description: self.description,
            date: self.date,
            location: self.location,
            capacity: self.capacity,
            organizer: self.organizer,
            status,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteEventResponse {
    pub message: String,
    #[serde(rename = "eventId")]
    pub event_id: String,
}

// ==================
// Validation
// ==================

fn check_length(field: &str, value: &str, max: usize) -> ApiResult<()> {
    let len = value.chars().count();
    if len == 0 || len > max {
        return Err(ApiError::Validation(format!(
            "{field} must be between 1 and {max} characters"
        )));
    }
    Ok(())
}

/// Shape check only; no calendar validity is enforced.
fn check_date(value: &str) -> ApiResult<()> {
    if !DATE_PATTERN.is_match(value) {
        return Err(ApiError::Validation(
            "date must match YYYY-MM-DD".to_string(),
        ));
    }
    Ok(())
}

fn check_capacity(value: i64) -> ApiResult<()> {
    if value <= 0 {
        return Err(ApiError::Validation(
            "capacity must be a positive integer".to_string(),
        ));
    }
    Ok(())
}

fn parse_status(raw: &str) -> ApiResult<EventStatus> {
    EventStatus::parse(raw).ok_or_else(|| {
        ApiError::Validation(format!(
            "status must be one of active, cancelled, completed (got '{raw}')"
        ))
    })
}

fn decode_body<T: serde::de::DeserializeOwned>(body: Value) -> ApiResult<T> {
    serde_json::from_value(body).map_err(|e| ApiError::InvalidBody(e.to_string()))
}

// ==================
// Handlers
// ==================

/// List all events, optionally filtered by status
async fn list_events(
    State(state): State<Arc<EventsState>>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Json<Vec<Event>>> {
    let status = match params.get("status") {
        Some(raw) => Some(parse_status(raw).map_err(|_| {
            ApiError::InvalidQueryParam(format!("status '{raw}' is not a known status"))
        })?),
        None => None,
    };

    Ok(Json(state.catalog.list(status)?))
}

/// Create a new event
async fn create_event(
    State(state): State<Arc<EventsState>>,
    Json(body): Json<Value>,
) -> ApiResult<(StatusCode, Json<Event>)> {
    let request: CreateEventRequest = decode_body(body)?;
    let event = request.into_event()?;

    let created = state.catalog.create(event)?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Get a specific event by id
async fn get_event(
    State(state): State<Arc<EventsState>>,
    Path(event_id): Path<String>,
) -> ApiResult<Json<Event>> {
    Ok(Json(state.catalog.fetch(&event_id)?))
}

/// Partially update an existing event
async fn update_event(
    State(state): State<Arc<EventsState>>,
    Path(event_id): Path<String>,
    Json(body): Json<Value>,
) -> ApiResult<Json<Event>> {
    let request: UpdateEventRequest = decode_body(body)?;
    let patch = request.into_patch()?;

    Ok(Json(state.catalog.apply_patch(&event_id, &patch)?))
}

/// Delete an event
async fn delete_event(
    State(state): State<Arc<EventsState>>,
    Path(event_id): Path<String>,
) -> ApiResult<Json<DeleteEventResponse>> {
    state.catalog.remove(&event_id)?;

    Ok(Json(DeleteEventResponse {
        message: "Event deleted successfully".to_string(),
        event_id,
    }))
}
