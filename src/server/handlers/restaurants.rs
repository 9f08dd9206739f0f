use axum::extract::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::{invalid_input_error, Error};
use crate::external::crawler;

#[derive(Serialize, Deserialize)]
pub struct SmartMatchParams {
    #[serde(rename = "mapRestaurants", default)]
    map_restaurants: Vec<Value>,
    #[serde(rename = "searchArea", default)]
    search_area: Value,
}

#[derive(Serialize)]
pub struct SmartMatchResponse {
    success: bool,
    matched: Vec<Value>,
    stats: Option<Value>,
}

pub async fn smart_match(
    Json(params): Json<SmartMatchParams>,
) -> Result<Json<SmartMatchResponse>, Error> {
    if params.map_restaurants.is_empty() {
        return Err(invalid_input_error());
    }

    let result = crawler::smart_match(params.map_restaurants, params.search_area).await?;

    Ok(Json(SmartMatchResponse {
        success: true,
        matched: result.matched_restaurants,
        stats: result.stats,
    }))
}

#[derive(Serialize)]
pub struct SnsListResponse {
    success: bool,
    restaurants: Vec<Value>,
    count: u64,
}

pub async fn sns_list() -> Result<Json<SnsListResponse>, Error> {
    let list = crawler::sns_list().await?;

    Ok(Json(SnsListResponse {
        success: true,
        restaurants: list.restaurants,
        count: list.count,
    }))
}

/// Always reports this service as healthy; a crawler outage is reported in
/// the body, not as a failure of this endpoint.
pub async fn health() -> Json<Value> {
    let crawler_status = match crawler::health().await {
        Ok(status) => status,
        Err(_) => json!({ "status": "unavailable" }),
    };

    Json(json!({
        "success": true,
        "crawler_api": crawler_status,
        "api": {
            "status": "healthy",
            "timestamp": Utc::now().to_rfc3339(),
        },
    }))
}
