use serde::{Deserialize, Serialize};

use crate::error::{invalid_input_error, Error};

const EARTH_RADIUS_KM: f64 = 6371.0;

/// WGS84 point, degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// Rejects non-finite components. Missing fields are already rejected at
    /// deserialization time.
    pub fn validate(&self) -> Result<(), Error> {
        if self.lat.is_finite() && self.lng.is_finite() {
            return Ok(());
        }

        Err(invalid_input_error())
    }

    /// Great-circle distance to `other` via the haversine formula.
    pub fn haversine_km(&self, other: &Coordinates) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lng = (other.lng - self.lng).to_radians();

        let a = (d_lat / 2.0).sin().powi(2)
            + self.lat.to_radians().cos() * other.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);

        2.0 * EARTH_RADIUS_KM * a.sqrt().atan2((1.0 - a).sqrt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEOUL_CITY_HALL: Coordinates = Coordinates {
        lat: 37.5665,
        lng: 126.9780,
    };

    #[test]
    fn haversine_reference_distance() {
        let north = Coordinates {
            lat: SEOUL_CITY_HALL.lat + 0.1,
            lng: SEOUL_CITY_HALL.lng,
        };

        let d = SEOUL_CITY_HALL.haversine_km(&north);
        assert!((d - 11.12).abs() < 0.1, "got {} km", d);
    }

    #[test]
    fn haversine_is_symmetric_and_zero_on_self() {
        let other = Coordinates {
            lat: 35.1796,
            lng: 129.0756,
        };

        assert_eq!(SEOUL_CITY_HALL.haversine_km(&SEOUL_CITY_HALL), 0.0);
        assert!(
            (SEOUL_CITY_HALL.haversine_km(&other) - other.haversine_km(&SEOUL_CITY_HALL)).abs()
                < 1e-9
        );
    }

    #[test]
    fn validate_rejects_non_finite() {
        assert!(Coordinates {
            lat: f64::NAN,
            lng: 126.9780
        }
        .validate()
        .is_err());

        assert!(Coordinates {
            lat: 37.5665,
            lng: f64::INFINITY
        }
        .validate()
        .is_err());

        assert!(SEOUL_CITY_HALL.validate().is_ok());
    }
}
