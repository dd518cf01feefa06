// src/handlers/policies.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::policy::{CreatePolicyPayload, Policy, UpdatePolicyPayload},
};

// GET /api/policies
#[utoipa::path(
    get,
    path = "/api/policies",
    tag = "Policies",
    responses(
        (status = 200, description = "Lista de apólices, mais recentes primeiro", body = Vec<Policy>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_policies(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let policies = app_state
        .policy_service
        .list_policies(&app_state.db_pool)
        .await?;

    Ok((StatusCode::OK, Json(policies)))
}

// GET /api/policies/{id}
#[utoipa::path(
    get,
    path = "/api/policies/{id}",
    tag = "Policies",
    params(("id" = Uuid, Path, description = "ID da apólice")),
    responses(
        (status = 200, description = "Apólice encontrada", body = Policy),
        (status = 404, description = "Apólice não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_policy(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let policy = app_state
        .policy_service
        .get_policy(&app_state.db_pool, id)
        .await?;

    Ok((StatusCode::OK, Json(policy)))
}

// POST /api/policies — número duplicado responde 409, não 500
#[utoipa::path(
    post,
    path = "/api/policies",
    tag = "Policies",
    request_body = CreatePolicyPayload,
    responses(
        (status = 201, description = "Apólice criada", body = Policy),
        (status = 404, description = "Cliente ou seguradora inexistente"),
        (status = 409, description = "Número de apólice duplicado")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_policy(
    State(app_state): State<AppState>,
    Json(payload): Json<CreatePolicyPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let policy = app_state
        .policy_service
        .create_policy(&app_state.db_pool, &payload)
        .await?;

    Ok((StatusCode::CREATED, Json(policy)))
}

// PUT /api/policies/{id}
#[utoipa::path(
    put,
    path = "/api/policies/{id}",
    tag = "Policies",
    params(("id" = Uuid, Path, description = "ID da apólice")),
    request_body = UpdatePolicyPayload,
    responses(
        (status = 200, description = "Apólice atualizada", body = Policy),
        (status = 404, description = "Apólice não encontrada"),
        (status = 409, description = "Número de apólice duplicado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_policy(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdatePolicyPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let policy = app_state
        .policy_service
        .update_policy(&app_state.db_pool, id, &payload)
        .await?;

    Ok((StatusCode::OK, Json(policy)))
}

// DELETE /api/policies/{id}
#[utoipa::path(
    delete,
    path = "/api/policies/{id}",
    tag = "Policies",
    params(("id" = Uuid, Path, description = "ID da apólice")),
    responses(
        (status = 204, description = "Apólice removida"),
        (status = 404, description = "Apólice não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_policy(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state
        .policy_service
        .delete_policy(&app_state.db_pool, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
