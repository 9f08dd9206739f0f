use chrono::{DateTime, Utc};
use oso::PolarClass;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{PlaceCandidate, RouteSegment, SearchCenter};

/// Aggregated metrics of a composed route, the part of it the client sends
/// back when saving.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RouteMetrics {
    pub total_distance_meters: f64,
    pub total_duration_seconds: i64,
    pub total_toll_cost: i64,
    pub is_estimated: bool,
}

/// A fully resolved route: search center, the two chosen places, one segment
/// per hop and the aggregate totals. Built transiently, persisted only on an
/// explicit save.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ComposedRoute {
    pub search_center: SearchCenter,
    pub places: Vec<PlaceCandidate>,
    pub segments: Vec<RouteSegment>,
    pub total_distance_meters: f64,
    pub total_duration_seconds: i64,
    pub total_toll_cost: i64,
    pub is_estimated: bool,
}

impl ComposedRoute {
    pub fn metrics(&self) -> RouteMetrics {
        RouteMetrics {
            total_distance_meters: self.total_distance_meters,
            total_duration_seconds: self.total_duration_seconds,
            total_toll_cost: self.total_toll_cost,
            is_estimated: self.is_estimated,
        }
    }
}

/// What a save request carries: a user-chosen name plus the composed route's
/// center, places and totals.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RouteDraft {
    pub route_name: String,
    pub search_center: SearchCenter,
    pub places: Vec<PlaceCandidate>,
    pub route_info: RouteMetrics,
}

/// Persisted route, exclusively owned by `user_id`. Never updated in place.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SavedRoute {
    pub id: Uuid,
    pub user_id: Uuid,
    pub route_name: String,
    pub search_center: SearchCenter,
    pub places: Vec<PlaceCandidate>,
    pub total_distance_meters: f64,
    pub total_duration_seconds: i64,
    pub total_toll_cost: i64,
    pub is_estimated: bool,
    pub created_at: DateTime<Utc>,
}

/// Read-time presentation of a saved route: kilometers to one decimal, whole
/// minutes, date label. Derived, never stored.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SavedRouteView {
    pub id: Uuid,
    pub route_name: String,
    pub search_center: SearchCenter,
    pub places: Vec<PlaceCandidate>,
    pub distance_km: f64,
    pub duration_minutes: i64,
    pub toll_cost: i64,
    pub is_estimated: bool,
    pub created: String,
}

impl SavedRoute {
    pub fn view(&self) -> SavedRouteView {
        SavedRouteView {
            id: self.id,
            route_name: self.route_name.clone(),
            search_center: self.search_center.clone(),
            places: self.places.clone(),
            distance_km: (self.total_distance_meters / 100.0).round() / 10.0,
            duration_minutes: (self.total_duration_seconds as f64 / 60.0).round() as i64,
            toll_cost: self.total_toll_cost,
            is_estimated: self.is_estimated,
            created: self.created_at.format("%Y-%m-%d").to_string(),
        }
    }
}

impl PolarClass for SavedRoute {
    fn get_polar_class_builder() -> oso::ClassBuilder<SavedRoute> {
        oso::Class::builder()
            .name("SavedRoute")
            .add_attribute_getter("id", |recv: &SavedRoute| recv.id)
            .add_attribute_getter("user_id", |recv: &SavedRoute| recv.user_id)
    }

    fn get_polar_class() -> oso::Class {
        let builder = SavedRoute::get_polar_class_builder();
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Coordinates;
    use chrono::TimeZone;

    fn sample_route() -> SavedRoute {
        SavedRoute {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            route_name: "lunch run".into(),
            search_center: SearchCenter {
                name: "Seoul City Hall".into(),
                coordinates: Coordinates {
                    lat: 37.5665,
                    lng: 126.9780,
                },
            },
            places: vec![],
            total_distance_meters: 14455.0,
            total_duration_seconds: 2082,
            total_toll_cost: 1000,
            is_estimated: true,
            created_at: Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn view_rounds_display_units() {
        let view = sample_route().view();

        assert_eq!(view.distance_km, 14.5);
        assert_eq!(view.duration_minutes, 35);
        assert_eq!(view.created, "2025-03-10");
        assert!(view.is_estimated);
    }

    #[test]
    fn view_is_deterministic() {
        let route = sample_route();
        let a = route.view();
        let b = route.view();

        assert_eq!(a.distance_km, b.distance_km);
        assert_eq!(a.duration_minutes, b.duration_minutes);
        assert_eq!(a.created, b.created);
    }
}
