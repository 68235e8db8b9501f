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
    db::entities::user_login,
    dto::{AlarmDto, UserLoginDto},
    error::AppError,
    routes::{API_PREFIX, alert::EntityAlert, extract::MergePatch, sort::parse_sort},
    services::{
        ServiceContext,
        user_login_service::{ENTITY_NAME, UserLoginService},
    },
    state::AppState,
};

use super::validation::{ensure_new, ensure_path_id};

const BASE_PATH: &str = "/user-logins";

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(BASE_PATH, post(create_user_login).get(list_user_logins))
        .route(
            &format!("{BASE_PATH}/{{id}}"),
            get(get_user_login)
                .put(update_user_login)
                .patch(partial_update_user_login)
                .delete(delete_user_login),
        )
        .route(
            &format!("{BASE_PATH}/{{id}}/alarms"),
            get(list_user_login_alarms).put(replace_user_login_alarms),
        )
        .with_state(state)
}

fn user_login_service(state: &AppState) -> UserLoginService {
    ServiceContext::from_state(state).user_login()
}

async fn create_user_login(
    State(state): State<Arc<AppState>>,
    Json(dto): Json<UserLoginDto>,
) -> Result<impl IntoResponse, AppError> {
    debug!(user_login = ?dto, "REST request to save UserLogin");
    let fields = dto.validated()?;
    ensure_new(ENTITY_NAME, dto.id.as_ref())?;

    let created = user_login_service(&state).create_user_login(fields).await?;
    let location = format!("{API_PREFIX}{BASE_PATH}/{}", created.id);
    let alert = EntityAlert::created(state.application_name(), ENTITY_NAME, created.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        alert,
        Json(UserLoginDto::from(created)),
    ))
}

async fn update_user_login(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(dto): Json<UserLoginDto>,
) -> Result<impl IntoResponse, AppError> {
    debug!(id, user_login = ?dto, "REST request to update UserLogin");
    let fields = dto.validated()?;
    ensure_path_id(ENTITY_NAME, &id, dto.id.as_ref())?;

    let updated = user_login_service(&state)
        .update_user_login(id, fields)
        .await?;
    Ok(updated_response(&state, updated))
}

async fn partial_update_user_login(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    MergePatch(dto): MergePatch<UserLoginDto>,
) -> Result<impl IntoResponse, AppError> {
    debug!(id, user_login = ?dto, "REST request to partial update UserLogin");
    ensure_path_id(ENTITY_NAME, &id, dto.id.as_ref())?;

    let updated = user_login_service(&state)
        .partial_update_user_login(id, dto)
        .await?;
    Ok(updated_response(&state, updated))
}

async fn list_user_logins(
    State(state): State<Arc<AppState>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<UserLoginDto>>, AppError> {
    debug!("REST request to get all UserLogins");
    let order = parse_sort::<user_login::Column>(&params)?;
    let logins = user_login_service(&state).list_user_logins(order).await?;
    Ok(Json(logins.into_iter().map(UserLoginDto::from).collect()))
}

async fn get_user_login(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<UserLoginDto>, AppError> {
    debug!(id, "REST request to get UserLogin");
    let login = user_login_service(&state).get_user_login(id).await?;
    Ok(Json(login.into()))
}

async fn delete_user_login(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    debug!(id, "REST request to delete UserLogin");
    user_login_service(&state).delete_user_login(id).await?;
    Ok((
        StatusCode::NO_CONTENT,
        EntityAlert::deleted(state.application_name(), ENTITY_NAME, id),
        (),
    ))
}

async fn list_user_login_alarms(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<AlarmDto>>, AppError> {
    debug!(id, "REST request to get Alarms of UserLogin");
    let alarms = user_login_service(&state).alarms_of(id).await?;
    Ok(Json(alarms.into_iter().map(AlarmDto::from).collect()))
}

async fn replace_user_login_alarms(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(alarm_ids): Json<Vec<String>>,
) -> Result<impl IntoResponse, AppError> {
    debug!(id, ?alarm_ids, "REST request to replace Alarms of UserLogin");
    let alarms = user_login_service(&state)
        .replace_alarms(id, alarm_ids)
        .await?;
    let alert = EntityAlert::updated(state.application_name(), ENTITY_NAME, id);
    Ok((
        alert,
        Json(alarms.into_iter().map(AlarmDto::from).collect::<Vec<_>>()),
    ))
}

fn updated_response(
    state: &AppState,
    updated: user_login::Model,
) -> (EntityAlert, Json<UserLoginDto>) {
    let alert = EntityAlert::updated(state.application_name(), ENTITY_NAME, updated.id);
    (alert, Json(UserLoginDto::from(updated)))
}
