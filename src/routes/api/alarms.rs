use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use tracing::debug;

use crate::{
    db::entities::alarm,
    dto::AlarmDto,
    error::AppError,
    routes::{API_PREFIX, alert::EntityAlert, extract::MergePatch, sort::parse_sort},
    services::{
        ServiceContext,
        alarm_service::{AlarmService, ENTITY_NAME},
    },
    state::AppState,
};

use super::validation::{ensure_new, ensure_path_id};

const BASE_PATH: &str = "/alarms";

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(BASE_PATH, post(create_alarm).get(list_alarms))
        .route(
            &format!("{BASE_PATH}/{{id}}"),
            get(get_alarm)
                .put(update_alarm)
                .patch(partial_update_alarm)
                .delete(delete_alarm),
        )
        .with_state(state)
}

fn alarm_service(state: &AppState) -> AlarmService {
    ServiceContext::from_state(state).alarm()
}

async fn create_alarm(
    State(state): State<Arc<AppState>>,
    Json(dto): Json<AlarmDto>,
) -> Result<impl IntoResponse, AppError> {
    debug!(alarm = ?dto, "REST request to save Alarm");
    ensure_new(ENTITY_NAME, dto.id.as_ref())?;

    let created = alarm_service(&state).create_alarm(dto).await?;
    let location = format!("{API_PREFIX}{BASE_PATH}/{}", created.id);
    let alert = EntityAlert::created(state.application_name(), ENTITY_NAME, &created.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        alert,
        Json(AlarmDto::from(created)),
    ))
}

async fn update_alarm(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(dto): Json<AlarmDto>,
) -> Result<impl IntoResponse, AppError> {
    debug!(%id, alarm = ?dto, "REST request to update Alarm");
    ensure_path_id(ENTITY_NAME, &id, dto.id.as_ref())?;

    let updated = alarm_service(&state).update_alarm(id, dto).await?;
    Ok(updated_response(&state, updated))
}

async fn partial_update_alarm(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    MergePatch(dto): MergePatch<AlarmDto>,
) -> Result<impl IntoResponse, AppError> {
    debug!(%id, alarm = ?dto, "REST request to partial update Alarm");
    ensure_path_id(ENTITY_NAME, &id, dto.id.as_ref())?;

    let updated = alarm_service(&state).partial_update_alarm(id, dto).await?;
    Ok(updated_response(&state, updated))
}

async fn list_alarms(
    State(state): State<Arc<AppState>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<AlarmDto>>, AppError> {
    debug!("REST request to get all Alarms");
    let order = parse_sort::<alarm::Column>(&params)?;
    let alarms = alarm_service(&state).list_alarms(order).await?;
    Ok(Json(alarms.into_iter().map(AlarmDto::from).collect()))
}

async fn get_alarm(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<AlarmDto>, AppError> {
    debug!(%id, "REST request to get Alarm");
    let alarm = alarm_service(&state).get_alarm(id).await?;
    Ok(Json(alarm.into()))
}

async fn delete_alarm(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    debug!(%id, "REST request to delete Alarm");
    alarm_service(&state).delete_alarm(id.clone()).await?;
    Ok((
        StatusCode::NO_CONTENT,
        EntityAlert::deleted(state.application_name(), ENTITY_NAME, id),
        (),
    ))
}

fn updated_response(
    state: &AppState,
    updated: alarm::Model,
) -> (EntityAlert, Json<AlarmDto>) {
    let alert = EntityAlert::updated(state.application_name(), ENTITY_NAME, &updated.id);
    (alert, Json(AlarmDto::from(updated)))
}
