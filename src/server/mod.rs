mod handlers;

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::api::API;
use crate::server::handlers::{auth, places, restaurants, routes};

pub type DynAPI = Arc<dyn API + Send + Sync>;

const DEFAULT_PORT: u16 = 5000;

pub async fn serve<T: API + Sync + Send + 'static>(api: T) {
    let api = Arc::new(api) as DynAPI;

    let app = Router::new()
        .route("/routes/resolve", post(routes::resolve))
        .route("/routes", post(routes::save).get(routes::list))
        .route("/routes/:id", delete(routes::remove))
        .route("/places/search", get(places::search))
        .route("/restaurants/smart-match", post(restaurants::smart_match))
        .route("/restaurants/sns-list", get(restaurants::sns_list))
        .route("/health", get(restaurants::health))
        .route("/auth/register", post(auth::register))
        .route("/auth/me", get(auth::me))
        // The original deployment serves a browser frontend from anywhere.
        .layer(CorsLayer::permissive())
        .layer(Extension(api));

    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
