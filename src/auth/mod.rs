pub mod authorizor;
mod user;

pub use user::{Session, User};

use async_trait::async_trait;
use axum::extract::{Extension, FromRequest, RequestParts};
use axum::http::header;
use uuid::Uuid;

use crate::error::{unauthenticated_error, unexpected_error, Error};
use crate::server::DynAPI;

/// Extracts the caller from a `Bearer <session token>` header and resolves it
/// through the auth capability. Missing or unknown tokens reject the request
/// before any store operation runs.
#[async_trait]
impl<B: Send> FromRequest<B> for User {
    type Rejection = Error;

    async fn from_request(req: &mut RequestParts<B>) -> Result<Self, Self::Rejection> {
        let Extension(api) = Extension::<DynAPI>::from_request(req)
            .await
            .map_err(unexpected_error)?;

        let header_value = req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(unauthenticated_error)?;

        let token = header_value
            .strip_prefix("Bearer ")
            .and_then(|token| Uuid::parse_str(token.trim()).ok())
            .ok_or_else(unauthenticated_error)?;

        api.authenticate(token).await
    }
}
