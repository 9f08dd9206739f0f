use axum::extract::{Extension, Json, Path};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::User;
use crate::entities::{Coordinates, RouteDraft, RouteSegment, SavedRouteView};
use crate::error::Error;
use crate::server::DynAPI;

#[derive(Serialize, Deserialize)]
pub struct ResolveParams {
    origin: Coordinates,
    destination: Coordinates,
    priority: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct RouteView {
    distance: f64,
    duration: i64,
    toll: i64,
    coordinates: Vec<Coordinates>,
    is_estimated: bool,
}

impl From<RouteSegment> for RouteView {
    fn from(segment: RouteSegment) -> Self {
        RouteView {
            distance: segment.distance_meters,
            duration: segment.duration_seconds,
            toll: segment.toll_cost,
            coordinates: segment.path,
            is_estimated: segment.is_estimated,
        }
    }
}

#[derive(Serialize)]
pub struct ResolveResponse {
    success: bool,
    route: RouteView,
}

/// An estimated segment is still a success response; `is_estimated` carries
/// the disclosure to the client.
pub async fn resolve(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<ResolveParams>,
) -> Result<Json<ResolveResponse>, Error> {
    let segment = api
        .resolve_route(params.origin, params.destination, params.priority)
        .await?;

    Ok(Json(ResolveResponse {
        success: true,
        route: segment.into(),
    }))
}

#[derive(Serialize)]
pub struct SaveResponse {
    success: bool,
    route_id: Uuid,
}

pub async fn save(
    Extension(api): Extension<DynAPI>,
    user: User,
    Json(draft): Json<RouteDraft>,
) -> Result<Json<SaveResponse>, Error> {
    let route_id = api.save_route(user, draft).await?;

    Ok(Json(SaveResponse {
        success: true,
        route_id,
    }))
}

#[derive(Serialize)]
pub struct ListResponse {
    success: bool,
    routes: Vec<SavedRouteView>,
}

pub async fn list(
    Extension(api): Extension<DynAPI>,
    user: User,
) -> Result<Json<ListResponse>, Error> {
    let routes = api.list_routes(user).await?;

    Ok(Json(ListResponse {
        success: true,
        routes: routes.iter().map(|route| route.view()).collect(),
    }))
}

#[derive(Serialize)]
pub struct DeleteResponse {
    success: bool,
}

pub async fn remove(
    Extension(api): Extension<DynAPI>,
    user: User,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteResponse>, Error> {
    api.delete_route(user, id).await?;

    Ok(Json(DeleteResponse { success: true }))
}
