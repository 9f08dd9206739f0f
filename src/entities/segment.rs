use serde::{Deserialize, Serialize};

use crate::entities::Coordinates;

/// Road-vs-straight-line inflation applied to the great-circle distance.
const ROAD_FACTOR: f64 = 1.3;
/// Flat assumed travel speed for estimated segments.
const AVERAGE_SPEED_KMH: f64 = 25.0;
/// Above this estimated road distance a flat toll is assumed.
const TOLL_THRESHOLD_KM: f64 = 10.0;
const FLAT_TOLL: i64 = 1000;

/// One resolved hop between two consecutive points of a composed route.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RouteSegment {
    pub from: String,
    pub to: String,
    pub distance_meters: f64,
    pub duration_seconds: i64,
    pub toll_cost: i64,
    pub path: Vec<Coordinates>,
    pub is_estimated: bool,
}

impl RouteSegment {
    /// Deterministic straight-line estimate, used when the directions
    /// provider fails. Never errors; this is the terminal handler of the
    /// resolution path.
    pub fn estimate(from: &str, to: &str, origin: Coordinates, destination: Coordinates) -> Self {
        let road_km = origin.haversine_km(&destination) * ROAD_FACTOR;

        RouteSegment {
            from: from.into(),
            to: to.into(),
            distance_meters: road_km * 1000.0,
            duration_seconds: (road_km / AVERAGE_SPEED_KMH * 3600.0).round() as i64,
            toll_cost: if road_km > TOLL_THRESHOLD_KM {
                FLAT_TOLL
            } else {
                0
            },
            path: vec![origin, destination],
            is_estimated: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimate_reference_values() {
        let origin = Coordinates {
            lat: 37.5665,
            lng: 126.9780,
        };
        let destination = Coordinates {
            lat: 37.6665,
            lng: 126.9780,
        };

        let segment = RouteSegment::estimate("origin", "destination", origin, destination);

        // 11.12 km great-circle, 14.46 km after the road factor.
        assert!((segment.distance_meters - 14455.0).abs() < 150.0);
        assert_eq!(segment.duration_seconds, 2082);
        assert_eq!(segment.toll_cost, 1000);
        assert!(segment.is_estimated);
        assert_eq!(segment.path, vec![origin, destination]);
    }

    #[test]
    fn estimate_short_hop_has_no_toll() {
        let origin = Coordinates {
            lat: 37.5665,
            lng: 126.9780,
        };
        let destination = Coordinates {
            lat: 37.5700,
            lng: 126.9800,
        };

        let segment = RouteSegment::estimate("a", "b", origin, destination);

        assert!(segment.distance_meters < 10_000.0);
        assert_eq!(segment.toll_cost, 0);
    }

    #[test]
    fn estimate_duration_matches_formula() {
        let origin = Coordinates {
            lat: 37.5665,
            lng: 126.9780,
        };
        let destination = Coordinates {
            lat: 36.3504,
            lng: 127.3845,
        };

        let segment = RouteSegment::estimate("a", "b", origin, destination);

        let road_km = origin.haversine_km(&destination) * 1.3;
        assert_eq!(
            segment.duration_seconds,
            (road_km / 25.0 * 3600.0).round() as i64
        );
    }
}
