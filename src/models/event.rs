//! Event model (geo-tagged, scheduled activities)

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

use crate::geo::GeoPoint;

/// Named point where an event takes place
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Location {
    /// Display name, e.g. "San Francisco, CA"
    #[validate(custom(function = "not_blank", message = "Location name is required"))]
    pub name: String,
    #[validate(range(min = -90.0, max = 90.0, message = "Valid latitude (-90 to 90) is required"))]
    pub latitude: f64,
    #[validate(range(
        min = -180.0,
        max = 180.0,
        message = "Valid longitude (-180 to 180) is required"
    ))]
    pub longitude: f64,
}

impl Location {
    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

/// Event record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Assigned by the store, never reused
    pub id: String,
    pub title: String,
    pub description: String,
    pub location: Location,
    /// Scheduled occurrence
    pub date: DateTime<Utc>,
    pub max_participants: u32,
    pub current_participants: u32,
    pub created_at: DateTime<Utc>,
}

impl Event {
    /// Shallow merge: every field present in `update` replaces the stored one
    pub fn apply(&mut self, update: UpdateEvent) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(location) = update.location {
            self.location = location;
        }
        if let Some(date) = update.date {
            self.date = date;
        }
        if let Some(max) = update.max_participants {
            self.max_participants = max;
        }
        if let Some(current) = update.current_participants {
            self.current_participants = current;
        }
    }
}

/// Event as returned by queries, with the distance from the caller when known
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EventWithDistance {
    #[serde(flatten)]
    pub event: Event,
    /// Kilometers from the requested origin, rounded to 2 decimals
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

impl EventWithDistance {
    pub fn without_distance(event: Event) -> Self {
        Self { event, distance: None }
    }
}

/// Create event request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEvent {
    #[validate(custom(
        function = "not_blank",
        message = "Title is required and must be a non-empty string"
    ))]
    pub title: String,
    #[validate(custom(
        function = "not_blank",
        message = "Description is required and must be a non-empty string"
    ))]
    pub description: String,
    #[validate(nested)]
    pub location: Location,
    /// ISO 8601 date or date-time
    #[validate(custom(
        function = "valid_event_date",
        message = "Date must be a valid ISO 8601 date string"
    ))]
    pub date: String,
    #[validate(range(min = 1, message = "maxParticipants must be a number greater than 0"))]
    pub max_participants: u32,
}

impl CreateEvent {
    /// Order in which failing fields are reported, nested location fields included
    pub const FIELD_ORDER: &'static [&'static str] = &[
        "title",
        "description",
        "location",
        "name",
        "latitude",
        "longitude",
        "date",
        "max_participants",
    ];
}

/// Validated creation data handed to the store
#[derive(Debug, Clone, PartialEq)]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub location: Location,
    pub date: DateTime<Utc>,
    pub max_participants: u32,
}

/// Partial update; absent fields keep their stored value
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEvent {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<Location>,
    pub date: Option<DateTime<Utc>>,
    pub max_participants: Option<u32>,
    pub current_participants: Option<u32>,
}

/// Text filters applied by the store; empty strings impose no constraint
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventFilter {
    /// Case-insensitive substring of the location name
    pub location: Option<String>,
    /// Case-insensitive substring of title or description
    pub search: Option<String>,
}

/// Query parameters for listing events
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct EventQuery {
    /// Filter by location name (case-insensitive substring)
    pub location: Option<String>,
    /// Search in title and description (case-insensitive substring)
    pub search: Option<String>,
    /// Caller latitude; sorts by distance together with userLng
    pub user_lat: Option<String>,
    /// Caller longitude; sorts by distance together with userLat
    pub user_lng: Option<String>,
}

impl EventQuery {
    pub fn filter(&self) -> EventFilter {
        EventFilter {
            location: self.location.clone(),
            search: self.search.clone(),
        }
    }

    pub fn origin(&self) -> Option<GeoPoint> {
        parse_origin(self.user_lat.as_deref(), self.user_lng.as_deref())
    }
}

/// Query parameters for a single event lookup
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct OriginQuery {
    pub user_lat: Option<String>,
    pub user_lng: Option<String>,
}

impl OriginQuery {
    pub fn origin(&self) -> Option<GeoPoint> {
        parse_origin(self.user_lat.as_deref(), self.user_lng.as_deref())
    }
}

/// Both coordinates must be present and numeric, otherwise there is no origin
fn parse_origin(lat: Option<&str>, lng: Option<&str>) -> Option<GeoPoint> {
    let lat = lat?.trim().parse::<f64>().ok().filter(|v| v.is_finite())?;
    let lng = lng?.trim().parse::<f64>().ok().filter(|v| v.is_finite())?;
    Some(GeoPoint::new(lat, lng))
}

/// Parse an RFC 3339 timestamp (seconds optional), a naive date-time
/// (taken as UTC) or a bare date
pub fn parse_event_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_str(value, "%Y-%m-%dT%H:%M%:z") {
        return Some(dt.with_timezone(&Utc));
    }
    // "Z" suffix means UTC, same as the naive forms below
    let value = value
        .strip_suffix('Z')
        .or_else(|| value.strip_suffix('z'))
        .unwrap_or(value);
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

fn valid_event_date(value: &str) -> Result<(), ValidationError> {
    match parse_event_date(value) {
        Some(_) => Ok(()),
        None => Err(ValidationError::new("date")),
    }
}
