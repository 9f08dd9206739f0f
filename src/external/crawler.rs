//! Client for the SNS crawling/recommendation service. Payloads stay opaque:
//! the crawler owns their shape, this service only proxies them.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::env;
use std::time::Duration;

use crate::error::{upstream_error, Error};

// Matching can take a while on the crawler side.
const MATCH_TIMEOUT: Duration = Duration::from_secs(30);
const HEALTH_TIMEOUT: Duration = Duration::from_secs(5);
const LIST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SmartMatch {
    #[serde(default)]
    pub matched_restaurants: Vec<Value>,
    pub stats: Option<Value>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SnsList {
    #[serde(default)]
    pub restaurants: Vec<Value>,
    #[serde(default)]
    pub count: u64,
}

fn api_base() -> Result<String, Error> {
    Ok(env::var("CRAWLER_API_BASE")?)
}

/// Asks the crawler to match map search results against crawled SNS posts.
#[tracing::instrument(skip(map_restaurants, search_area))]
pub async fn smart_match(map_restaurants: Vec<Value>, search_area: Value) -> Result<SmartMatch, Error> {
    let url = format!("{}/smart-match", api_base()?);

    let res = reqwest::Client::builder()
        .timeout(MATCH_TIMEOUT)
        .build()?
        .post(url)
        .json(&serde_json::json!({
            "mapRestaurants": map_restaurants,
            "searchArea": search_area,
        }))
        .send()
        .await?;

    if res.status().as_u16() != 200 {
        return Err(upstream_error());
    }

    Ok(res.json().await?)
}

#[tracing::instrument]
pub async fn sns_list() -> Result<SnsList, Error> {
    let url = format!("{}/restaurants", api_base()?);

    let res = reqwest::Client::builder()
        .timeout(LIST_TIMEOUT)
        .build()?
        .get(url)
        .send()
        .await?;

    if res.status().as_u16() != 200 {
        return Err(upstream_error());
    }

    Ok(res.json().await?)
}

#[tracing::instrument]
pub async fn health() -> Result<Value, Error> {
    let url = format!("{}/health", api_base()?);

    let res = reqwest::Client::builder()
        .timeout(HEALTH_TIMEOUT)
        .build()?
        .get(url)
        .send()
        .await?;

    if res.status().as_u16() != 200 {
        return Err(upstream_error());
    }

    Ok(res.json().await?)
}
