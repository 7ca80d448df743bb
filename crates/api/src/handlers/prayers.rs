use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use rosary_core::model::{PrayerId, PrayerRecord, Section, UserId};
use serde::Deserialize;

use super::parse_id;
use crate::{ApiError, AppState};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreatePrayerBody {
    user_id: UserId,
    section: Section,
    #[serde(default)]
    completed: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UpdatePrayerBody {
    completed: bool,
}

pub(crate) async fn list(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<PrayerRecord>>, ApiError> {
    let user_id: UserId = parse_id(&user_id, "user")?;
    Ok(Json(state.prayers.list(user_id).await?))
}

pub(crate) async fn create(
    State(state): State<AppState>,
    body: Result<Json<CreatePrayerBody>, JsonRejection>,
) -> Result<Json<PrayerRecord>, ApiError> {
    let Json(body) = body?;
    let record = state
        .prayers
        .create(body.user_id, body.section, body.completed)
        .await?;
    Ok(Json(record))
}

pub(crate) async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<UpdatePrayerBody>, JsonRejection>,
) -> Result<Json<PrayerRecord>, ApiError> {
    let id: PrayerId = parse_id(&id, "prayer")?;
    let Json(body) = body?;
    Ok(Json(state.prayers.set_completed(id, body.completed).await?))
}
