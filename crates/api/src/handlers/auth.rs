use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use rosary_core::model::PublicUser;
use serde::{Deserialize, Serialize};

use crate::{ApiError, AppState};

#[derive(Debug, Deserialize)]
pub(crate) struct CredentialsBody {
    username: String,
    password: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct UserResponse {
    user: PublicUser,
}

pub(crate) async fn register(
    State(state): State<AppState>,
    body: Result<Json<CredentialsBody>, JsonRejection>,
) -> Result<Json<UserResponse>, ApiError> {
    let Json(body) = body?;
    let user = state.auth.register(&body.username, &body.password).await?;
    Ok(Json(UserResponse { user }))
}

pub(crate) async fn login(
    State(state): State<AppState>,
    body: Result<Json<CredentialsBody>, JsonRejection>,
) -> Result<Json<UserResponse>, ApiError> {
    let Json(body) = body?;
    let user = state.auth.login(&body.username, &body.password).await?;
    Ok(Json(UserResponse { user }))
}
