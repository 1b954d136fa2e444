//! Events API endpoints

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::event::{CreateEvent, Event, EventQuery, EventWithDistance, OriginQuery},
};

/// Events list response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct EventsListResponse {
    pub success: bool,
    pub data: Vec<EventWithDistance>,
    pub count: usize,
}

/// Single event response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct EventResponse {
    pub success: bool,
    pub data: EventWithDistance,
}

/// Created event response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreatedEventResponse {
    pub success: bool,
    pub data: Event,
}

/// List events, optionally filtered and sorted by distance from the caller
#[utoipa::path(
    get,
    path = "/api/events",
    tag = "events",
    params(EventQuery),
    responses(
        (status = 200, description = "Events list", body = EventsListResponse)
    )
)]
pub async fn list_events(
    State(state): State<crate::AppState>,
    Query(query): Query<EventQuery>,
) -> Json<EventsListResponse> {
    let events = state.services.events.list(&query).await;
    Json(EventsListResponse {
        success: true,
        count: events.len(),
        data: events,
    })
}

/// Get event by ID
#[utoipa::path(
    get,
    path = "/api/events/{id}",
    tag = "events",
    params(("id" = String, Path, description = "Event ID"), OriginQuery),
    responses(
        (status = 200, description = "Event details", body = EventResponse),
        (status = 404, description = "Event not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_event(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    Query(query): Query<OriginQuery>,
) -> AppResult<Json<EventResponse>> {
    let event = state.services.events.get(&id, query.origin()).await?;
    Ok(Json(EventResponse {
        success: true,
        data: event,
    }))
}

/// Create an event
#[utoipa::path(
    post,
    path = "/api/events",
    tag = "events",
    request_body = CreateEvent,
    responses(
        (status = 201, description = "Event created", body = CreatedEventResponse),
        (status = 400, description = "Invalid event data", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_event(
    State(state): State<crate::AppState>,
    payload: Result<Json<CreateEvent>, JsonRejection>,
) -> AppResult<(StatusCode, Json<CreatedEventResponse>)> {
    let Json(data) = payload?;
    let event = state.services.events.create(data).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedEventResponse {
            success: true,
            data: event,
        }),
    ))
}
