//! Events service

use chrono::Utc;
use validator::Validate;

use crate::{
    error::{validation_message, AppError, AppResult},
    geo::{self, GeoPoint},
    models::event::{
        parse_event_date, CreateEvent, Event, EventQuery, EventWithDistance, Location, NewEvent,
        UpdateEvent,
    },
    repository::{seed, Repository},
};

#[derive(Clone)]
pub struct EventsService {
    repository: Repository,
}

impl EventsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List events matching the query, closest first when an origin is given
    pub async fn list(&self, query: &EventQuery) -> Vec<EventWithDistance> {
        let events = self.repository.events.list(&query.filter()).await;
        let origin = query.origin();
        tracing::debug!("Listing {} events (origin: {:?})", events.len(), origin);
        geo::rank_by_distance(events, origin)
    }

    /// Get event by ID, with its distance from `origin` when supplied
    pub async fn get(&self, id: &str, origin: Option<GeoPoint>) -> AppResult<EventWithDistance> {
        let event = self
            .repository
            .events
            .get_by_id(id)
            .await
            .ok_or_else(|| not_found(id))?;

        Ok(EventWithDistance {
            distance: origin.map(|o| geo::round_km(o.distance_to(&event.location.point()))),
            event,
        })
    }

    /// Validate and store a new event
    pub async fn create(&self, data: CreateEvent) -> AppResult<Event> {
        data.validate()
            .map_err(|e| AppError::Validation(validation_message(&e, CreateEvent::FIELD_ORDER)))?;

        let date = parse_event_date(&data.date).ok_or_else(|| {
            AppError::Validation("Date must be a valid ISO 8601 date string".to_string())
        })?;

        let new_event = NewEvent {
            title: data.title.trim().to_string(),
            description: data.description.trim().to_string(),
            location: Location {
                name: data.location.name.trim().to_string(),
                ..data.location
            },
            date,
            max_participants: data.max_participants,
        };

        let event = self.repository.events.create(new_event).await;
        tracing::info!("Event created: id={} title={:?}", event.id, event.title);
        Ok(event)
    }

    /// Apply a partial update. No capacity rules are enforced here.
    pub async fn update(&self, id: &str, data: UpdateEvent) -> AppResult<Event> {
        self.repository
            .events
            .update(id, data)
            .await
            .ok_or_else(|| not_found(id))
    }

    /// Insert the demonstration events
    pub async fn seed_samples(&self) -> usize {
        let samples = seed::sample_events(Utc::now());
        let count = samples.len();
        for sample in samples {
            self.repository.events.create(sample).await;
        }
        count
    }
}

fn not_found(id: &str) -> AppError {
    AppError::NotFound(format!("Event with ID {} not found", id))
}
