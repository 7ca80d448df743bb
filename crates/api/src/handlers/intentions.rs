use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use rosary_core::model::{Intention, IntentionId, UserId};
use serde::{Deserialize, Serialize};

use super::parse_id;
use crate::{ApiError, AppState};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateIntentionBody {
    user_id: UserId,
    text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DeleteIntentionBody {
    user_id: UserId,
}

#[derive(Debug, Serialize)]
pub(crate) struct DeleteResponse {
    success: bool,
}

pub(crate) async fn list(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Intention>>, ApiError> {
    let user_id: UserId = parse_id(&user_id, "user")?;
    Ok(Json(state.intentions.list(user_id).await?))
}

pub(crate) async fn create(
    State(state): State<AppState>,
    body: Result<Json<CreateIntentionBody>, JsonRejection>,
) -> Result<Json<Intention>, ApiError> {
    let Json(body) = body?;
    Ok(Json(state.intentions.add(body.user_id, &body.text).await?))
}

pub(crate) async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<DeleteIntentionBody>, JsonRejection>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let id: IntentionId = parse_id(&id, "intention")?;
    let Json(body) = body?;
    state.intentions.remove(id, body.user_id).await?;
    Ok(Json(DeleteResponse { success: true }))
}
