use serde::{Deserialize, Serialize};

use crate::entities::Coordinates;

/// One result of a place search. Immutable once returned; places are compared
/// by name within a session, no stable external id is relied upon.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlaceCandidate {
    pub name: String,
    pub address: String,
    #[serde(flatten)]
    pub coordinates: Coordinates,
    pub phone: Option<String>,
    pub category: Option<String>,
}

/// The named point a route-building session was started from.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchCenter {
    pub name: String,
    #[serde(flatten)]
    pub coordinates: Coordinates,
}
