//! Events repository (in-memory)

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::models::event::{Event, EventFilter, NewEvent, UpdateEvent};

#[derive(Debug, Default)]
struct EventStore {
    /// Insertion order is creation order
    events: Vec<Event>,
    next_id: u64,
}

impl EventStore {
    fn allocate_id(&mut self) -> String {
        self.next_id += 1;
        self.next_id.to_string()
    }
}

/// Process-wide event collection. Clones share the same store.
#[derive(Debug, Clone, Default)]
pub struct EventsRepository {
    store: Arc<RwLock<EventStore>>,
}

impl EventsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new event with a fresh id, zero participants and `created_at = now`
    pub async fn create(&self, data: NewEvent) -> Event {
        let mut store = self.store.write().await;

        let event = Event {
            id: store.allocate_id(),
            title: data.title,
            description: data.description,
            location: data.location,
            date: data.date,
            max_participants: data.max_participants,
            current_participants: 0,
            created_at: Utc::now(),
        };

        store.events.push(event.clone());
        event
    }

    /// List events matching every supplied filter, in insertion order
    pub async fn list(&self, filter: &EventFilter) -> Vec<Event> {
        let location = normalize(filter.location.as_deref());
        let search = normalize(filter.search.as_deref());

        let store = self.store.read().await;
        store
            .events
            .iter()
            .filter(|event| match &location {
                Some(needle) => event.location.name.to_lowercase().contains(needle),
                None => true,
            })
            .filter(|event| match &search {
                Some(needle) => {
                    event.title.to_lowercase().contains(needle)
                        || event.description.to_lowercase().contains(needle)
                }
                None => true,
            })
            .cloned()
            .collect()
    }

    /// Get event by ID
    pub async fn get_by_id(&self, id: &str) -> Option<Event> {
        let store = self.store.read().await;
        store.events.iter().find(|event| event.id == id).cloned()
    }

    /// Merge `data` into an existing event
    pub async fn update(&self, id: &str, data: UpdateEvent) -> Option<Event> {
        let mut store = self.store.write().await;
        let event = store.events.iter_mut().find(|event| event.id == id)?;
        event.apply(data);
        Some(event.clone())
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.events.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

/// Lowercased needle, or None when the filter should not apply
fn normalize(filter: Option<&str>) -> Option<String> {
    filter.filter(|s| !s.is_empty()).map(str::to_lowercase)
}
