use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::{Session, User};
use crate::entities::{
    ComposedRoute, Coordinates, PlaceCandidate, RouteDraft, RouteSegment, SavedRoute, SearchCenter,
};
use crate::error::Error;

#[async_trait]
pub trait ResolverAPI {
    /// Resolves a single hop. Provider failures are absorbed into an
    /// estimated segment; invalid coordinates and empty provider results are
    /// surfaced as errors.
    async fn resolve_route(
        &self,
        origin: Coordinates,
        destination: Coordinates,
        priority: Option<String>,
    ) -> Result<RouteSegment, Error>;

    /// Chains the resolver across center -> place1 -> place2 and aggregates
    /// the totals.
    async fn compose_route(
        &self,
        search_center: SearchCenter,
        places: Vec<PlaceCandidate>,
        priority: Option<String>,
    ) -> Result<ComposedRoute, Error>;
}

#[async_trait]
pub trait RouteStoreAPI {
    async fn save_route(&self, user: User, draft: RouteDraft) -> Result<Uuid, Error>;

    /// All routes owned by the caller, newest first.
    async fn list_routes(&self, user: User) -> Result<Vec<SavedRoute>, Error>;

    async fn delete_route(&self, user: User, id: Uuid) -> Result<(), Error>;
}

#[async_trait]
pub trait PlaceSearchAPI {
    async fn search_places(
        &self,
        keyword: String,
        center: Coordinates,
        radius: Option<f64>,
    ) -> Result<Vec<PlaceCandidate>, Error>;
}

#[async_trait]
pub trait AuthAPI {
    async fn register_user(
        &self,
        name: String,
        email: String,
        nickname: String,
    ) -> Result<Session, Error>;

    /// Maps a bearer token to its user, or fails with `Unauthenticated`.
    async fn authenticate(&self, token: Uuid) -> Result<User, Error>;
}

pub trait API: ResolverAPI + RouteStoreAPI + PlaceSearchAPI + AuthAPI {}
