//! Great-circle distance and proximity ranking

use crate::models::event::{Event, EventWithDistance};

/// Mean Earth radius used by the Haversine formula
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Unrounded distance to `other` in kilometers
    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        haversine_km(self.latitude, self.longitude, other.latitude, other.longitude)
    }
}

/// Calculate distance between two coordinates using the Haversine formula.
/// Returns distance in kilometers.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Round a distance to two decimal places for presentation
pub fn round_km(km: f64) -> f64 {
    (km * 100.0).round() / 100.0
}

/// Attach distances from `origin` and order events closest first.
///
/// Sorting uses the unrounded distance and is stable, so events at the same
/// distance keep their input order. Without an origin the events are
/// returned in input order with no distance attached.
pub fn rank_by_distance(events: Vec<Event>, origin: Option<GeoPoint>) -> Vec<EventWithDistance> {
    let Some(origin) = origin else {
        return events.into_iter().map(EventWithDistance::without_distance).collect();
    };

    let mut ranked: Vec<(f64, Event)> = events
        .into_iter()
        .map(|event| (origin.distance_to(&event.location.point()), event))
        .collect();

    ranked.sort_by(|a, b| a.0.total_cmp(&b.0));

    ranked
        .into_iter()
        .map(|(km, event)| EventWithDistance {
            event,
            distance: Some(round_km(km)),
        })
        .collect()
}
