use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

use crate::{
    entities::Coordinates,
    error::{route_not_found_error, upstream_error, Error},
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// What the resolver needs back from a directions vendor. The contract is
/// deliberately narrow: numbers, a polyline, and "may fail or time out".
#[derive(Clone, Debug)]
pub struct ProviderRoute {
    pub distance_meters: f64,
    pub duration_seconds: i64,
    pub toll_cost: i64,
    pub path: Vec<Coordinates>,
}

#[async_trait]
pub trait DirectionsProvider {
    /// Errors with `RouteNotFound` when the vendor answered but had no
    /// candidate route; any other error means the vendor itself failed.
    async fn fetch_route(
        &self,
        origin: Coordinates,
        destination: Coordinates,
        priority: &str,
    ) -> Result<ProviderRoute, Error>;
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Response {
    routes: Option<Vec<Route>>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Route {
    summary: Summary,
    #[serde(default)]
    sections: Vec<Section>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Summary {
    distance: f64,
    duration: i64,
    fare: Option<Fare>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Fare {
    toll: Option<i64>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Section {
    #[serde(default)]
    roads: Vec<Road>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Road {
    #[serde(default)]
    vertexes: Vec<f64>,
}

/// Kakao Mobility directions client. Configured through
/// `KAKAO_NAVI_API_BASE` and `KAKAO_REST_API_KEY`.
#[derive(Clone, Debug, Default)]
pub struct KakaoDirections;

#[async_trait]
impl DirectionsProvider for KakaoDirections {
    #[tracing::instrument(skip(self))]
    async fn fetch_route(
        &self,
        origin: Coordinates,
        destination: Coordinates,
        priority: &str,
    ) -> Result<ProviderRoute, Error> {
        let api_base = env::var("KAKAO_NAVI_API_BASE")?;
        let key = env::var("KAKAO_REST_API_KEY")?;
        let url = format!("https://{}/v1/directions", api_base);

        let res = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?
            .get(url)
            .header("Authorization", format!("KakaoAK {}", key))
            .query(&[("origin", format!("{},{}", origin.lng, origin.lat))])
            .query(&[(
                "destination",
                format!("{},{}", destination.lng, destination.lat),
            )])
            .query(&[("priority", priority)])
            .send()
            .await?;

        if res.status().as_u16() != 200 {
            return Err(upstream_error());
        }

        let data: Response = res.json().await?;

        let routes = data.routes.unwrap_or_default();
        // The vendor's own primary-route choice is trusted: first candidate,
        // no ranking among alternatives.
        let route = routes.into_iter().next().ok_or_else(route_not_found_error)?;

        Ok(ProviderRoute {
            distance_meters: route.summary.distance,
            duration_seconds: route.summary.duration,
            toll_cost: route.summary.fare.and_then(|fare| fare.toll).unwrap_or(0),
            path: collect_path(&route.sections),
        })
    }
}

/// Concatenates every road's vertex list in order. Vertexes come as a flat
/// lng, lat, lng, lat... sequence.
fn collect_path(sections: &[Section]) -> Vec<Coordinates> {
    sections
        .iter()
        .flat_map(|section| &section.roads)
        .flat_map(|road| road.vertexes.chunks_exact(2))
        .map(|pair| Coordinates {
            lat: pair[1],
            lng: pair[0],
        })
        .collect()
}
