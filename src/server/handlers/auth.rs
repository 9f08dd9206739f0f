use axum::extract::{Extension, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::User;
use crate::error::Error;
use crate::server::DynAPI;

#[derive(Serialize, Deserialize)]
pub struct RegisterParams {
    name: String,
    email: String,
    nickname: String,
}

#[derive(Serialize)]
pub struct RegisterResponse {
    success: bool,
    token: Uuid,
    user: User,
}

pub async fn register(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<RegisterParams>,
) -> Result<Json<RegisterResponse>, Error> {
    let session = api
        .register_user(params.name, params.email, params.nickname)
        .await?;

    Ok(Json(RegisterResponse {
        success: true,
        token: session.token,
        user: session.user,
    }))
}

#[derive(Serialize)]
pub struct MeResponse {
    success: bool,
    user: User,
}

pub async fn me(user: User) -> Json<MeResponse> {
    Json(MeResponse {
        success: true,
        user,
    })
}
