use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

use crate::{
    entities::{Coordinates, PlaceCandidate},
    error::{invalid_input_error, upstream_error, Error},
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);
const RESTAURANT_CATEGORY: &str = "FD6";
const PAGE_SIZE: u32 = 15;
const DEFAULT_RADIUS_M: f64 = 1000.0;

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Response {
    documents: Vec<Document>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Document {
    place_name: String,
    address_name: String,
    // Kakao Local returns coordinates as strings, x = lng, y = lat.
    x: String,
    y: String,
    phone: Option<String>,
    category_name: Option<String>,
}

/// Keyword search for restaurants around a center point, distance-sorted.
#[tracing::instrument]
pub async fn search_keyword(
    keyword: &str,
    center: Coordinates,
    radius: Option<f64>,
) -> Result<Vec<PlaceCandidate>, Error> {
    let api_base = env::var("KAKAO_LOCAL_API_BASE")?;
    let key = env::var("KAKAO_REST_API_KEY")?;
    let url = format!("https://{}/v2/local/search/keyword.json", api_base);

    let res = reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()?
        .get(url)
        .header("Authorization", format!("KakaoAK {}", key))
        .query(&[("query", keyword)])
        .query(&[("category_group_code", RESTAURANT_CATEGORY)])
        .query(&[("x", center.lng), ("y", center.lat)])
        .query(&[("radius", radius.unwrap_or(DEFAULT_RADIUS_M))])
        .query(&[("size", PAGE_SIZE)])
        .query(&[("sort", "distance")])
        .send()
        .await?;

    let status_code = res.status().as_u16();

    if (400..500).contains(&status_code) {
        return Err(invalid_input_error());
    } else if status_code != 200 {
        return Err(upstream_error());
    }

    let data: Response = res.json().await?;

    data.documents.into_iter().map(to_candidate).collect()
}

fn to_candidate(document: Document) -> Result<PlaceCandidate, Error> {
    let lat = document.y.parse().map_err(|_| upstream_error())?;
    let lng = document.x.parse().map_err(|_| upstream_error())?;

    Ok(PlaceCandidate {
        name: document.place_name,
        address: document.address_name,
        coordinates: Coordinates { lat, lng },
        phone: document.phone.filter(|phone| !phone.is_empty()),
        category: document.category_name,
    })
}
