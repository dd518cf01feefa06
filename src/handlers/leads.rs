// src/handlers/leads.rs

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
    models::lead::{Lead, UpdateLeadPayload},
};

// GET /api/leads
#[utoipa::path(
    get,
    path = "/api/leads",
    tag = "Leads",
    responses(
        (status = 200, description = "Lista de leads, mais recentes primeiro", body = Vec<Lead>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_leads(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let leads = app_state
        .lead_service
        .list_leads(&app_state.db_pool)
        .await?;

    Ok((StatusCode::OK, Json(leads)))
}

// GET /api/leads/{id}
#[utoipa::path(
    get,
    path = "/api/leads/{id}",
    tag = "Leads",
    params(("id" = Uuid, Path, description = "ID do lead")),
    responses(
        (status = 200, description = "Lead encontrado", body = Lead),
        (status = 404, description = "Lead não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_lead(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let lead = app_state
        .lead_service
        .get_lead(&app_state.db_pool, id)
        .await?;

    Ok((StatusCode::OK, Json(lead)))
}

// PUT /api/leads/{id} — atualização parcial (tipicamente só o status)
#[utoipa::path(
    put,
    path = "/api/leads/{id}",
    tag = "Leads",
    params(("id" = Uuid, Path, description = "ID do lead")),
    request_body = UpdateLeadPayload,
    responses(
        (status = 200, description = "Lead atualizado", body = Lead),
        (status = 404, description = "Lead não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_lead(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateLeadPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let lead = app_state
        .lead_service
        .update_lead(&app_state.db_pool, id, &payload)
        .await?;

    Ok((StatusCode::OK, Json(lead)))
}

// DELETE /api/leads/{id}
#[utoipa::path(
    delete,
    path = "/api/leads/{id}",
    tag = "Leads",
    params(("id" = Uuid, Path, description = "ID do lead")),
    responses(
        (status = 204, description = "Lead removido"),
        (status = 404, description = "Lead não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_lead(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state
        .lead_service
        .delete_lead(&app_state.db_pool, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
