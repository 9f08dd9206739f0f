use super::Engine;

use async_trait::async_trait;

use crate::{
    api::ResolverAPI,
    engine::composer,
    entities::{ComposedRoute, Coordinates, PlaceCandidate, RouteSegment, SearchCenter},
    error::Error,
};

#[async_trait]
impl ResolverAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn resolve_route(
        &self,
        origin: Coordinates,
        destination: Coordinates,
        priority: Option<String>,
    ) -> Result<RouteSegment, Error> {
        self.resolver
            .resolve(
                "origin",
                "destination",
                origin,
                destination,
                priority.as_deref(),
            )
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn compose_route(
        &self,
        search_center: SearchCenter,
        places: Vec<PlaceCandidate>,
        priority: Option<String>,
    ) -> Result<ComposedRoute, Error> {
        composer::compose(&self.resolver, &search_center, &places, priority.as_deref()).await
    }
}
