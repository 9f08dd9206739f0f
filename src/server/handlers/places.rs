use axum::extract::{Extension, Json, Query};
use serde::{Deserialize, Serialize};

use crate::entities::{Coordinates, PlaceCandidate};
use crate::error::Error;
use crate::server::DynAPI;

#[derive(Serialize, Deserialize)]
pub struct SearchParams {
    keyword: String,
    lat: f64,
    lng: f64,
    radius: Option<f64>,
}

#[derive(Serialize)]
pub struct SearchResponse {
    success: bool,
    places: Vec<PlaceCandidate>,
}

pub async fn search(
    Extension(api): Extension<DynAPI>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, Error> {
    let center = Coordinates {
        lat: params.lat,
        lng: params.lng,
    };

    let places = api
        .search_places(params.keyword, center, params.radius)
        .await?;

    Ok(Json(SearchResponse {
        success: true,
        places,
    }))
}
