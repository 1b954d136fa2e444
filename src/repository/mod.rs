//! Repository layer (in-memory stores)

pub mod events;
pub mod seed;

/// Main repository struct holding every store
#[derive(Clone, Default)]
pub struct Repository {
    pub events: events::EventsRepository,
}

impl Repository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            events: events::EventsRepository::new(),
        }
    }
}
