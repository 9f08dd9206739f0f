mod auth_api;
mod composer;
mod place_api;
mod resolver;
mod route_api;
mod route_store_api;

use oso::Oso;
use sqlx::{Executor, Pool, Postgres};
use std::sync::Arc;

use crate::{
    api::API,
    auth::authorizor,
    engine::resolver::Resolver,
    error::{unauthorized_error, Error},
    external::directions::DirectionsProvider,
};

type Database = Postgres;

pub struct Engine {
    pool: Pool<Database>,
    resolver: Resolver,
    authorizor: Oso,
}

impl Engine {
    #[tracing::instrument(name = "Engine::new", skip_all)]
    pub async fn new(
        pool: Pool<Database>,
        directions: Arc<dyn DirectionsProvider + Send + Sync>,
    ) -> Result<Self, Error> {
        // TODO: move this to migrations
        pool.execute(
            "CREATE TABLE IF NOT EXISTS users (
                id UUID PRIMARY KEY,
                name VARCHAR NOT NULL,
                email VARCHAR NOT NULL UNIQUE,
                nickname VARCHAR NOT NULL UNIQUE,
                created_at TIMESTAMPTZ NOT NULL DEFAULT now()
            )",
        )
        .await?;

        pool.execute(
            "CREATE TABLE IF NOT EXISTS sessions (
                token UUID PRIMARY KEY,
                user_id UUID NOT NULL REFERENCES users(id)
            )",
        )
        .await?;

        // Fixed 2-place schema, denormalized on purpose: a saved route is
        // exactly search center + two places.
        pool.execute(
            "CREATE TABLE IF NOT EXISTS saved_routes (
                id UUID PRIMARY KEY,
                user_id UUID NOT NULL REFERENCES users(id),
                route_name VARCHAR NOT NULL,
                search_center_name VARCHAR NOT NULL,
                search_center_lat DOUBLE PRECISION NOT NULL,
                search_center_lng DOUBLE PRECISION NOT NULL,
                place1_name VARCHAR NOT NULL,
                place1_address VARCHAR NOT NULL,
                place1_lat DOUBLE PRECISION NOT NULL,
                place1_lng DOUBLE PRECISION NOT NULL,
                place1_phone VARCHAR,
                place1_category VARCHAR,
                place2_name VARCHAR NOT NULL,
                place2_address VARCHAR NOT NULL,
                place2_lat DOUBLE PRECISION NOT NULL,
                place2_lng DOUBLE PRECISION NOT NULL,
                place2_phone VARCHAR,
                place2_category VARCHAR,
                total_distance DOUBLE PRECISION NOT NULL,
                total_duration INT8 NOT NULL,
                total_toll INT8 NOT NULL,
                is_estimated BOOLEAN NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT now()
            )",
        )
        .await?;

        Ok(Self {
            pool,
            resolver: Resolver::new(directions),
            authorizor: authorizor::new(),
        })
    }
}

impl Engine {
    pub fn authorize<Actor, Action, Resource>(
        &self,
        actor: Actor,
        action: Action,
        resource: Resource,
    ) -> Result<(), Error>
    where
        Actor: oso::ToPolar,
        Action: oso::ToPolar,
        Resource: oso::ToPolar,
    {
        if self.authorizor.is_allowed(actor, action, resource)? {
            return Ok(());
        }

        Err(unauthorized_error())
    }
}

impl API for Engine {}
