//! Demonstration data

use chrono::{DateTime, Duration, Utc};

use crate::models::event::{Location, NewEvent};

/// The sample events inserted at startup outside production,
/// dated relative to `now`
pub fn sample_events(now: DateTime<Utc>) -> Vec<NewEvent> {
    vec![
        NewEvent {
            title: "Tech Meetup".to_string(),
            description: "Join us for an evening of networking and tech talks".to_string(),
            location: Location {
                name: "San Francisco, CA".to_string(),
                latitude: 37.7749,
                longitude: -122.4194,
            },
            date: now + Duration::days(7),
            max_participants: 50,
        },
        NewEvent {
            title: "Music Festival".to_string(),
            description: "A weekend of amazing music and food".to_string(),
            location: Location {
                name: "Los Angeles, CA".to_string(),
                latitude: 34.0522,
                longitude: -118.2437,
            },
            date: now + Duration::days(14),
            max_participants: 500,
        },
        NewEvent {
            title: "Coding Workshop".to_string(),
            description: "Learn React and TypeScript from scratch".to_string(),
            location: Location {
                name: "New York, NY".to_string(),
                latitude: 40.7128,
                longitude: -74.006,
            },
            date: now + Duration::days(3),
            max_participants: 30,
        },
    ]
}
