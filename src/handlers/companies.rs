// src/handlers/companies.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::company::{CreateCompanyPayload, InsuranceCompany, UpdateCompanyPayload},
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListCompaniesQuery {
    // true: só as ativas
    #[serde(default)]
    pub active: bool,
}

// GET /api/partners — pública, alimenta a faixa de parceiras do site
#[utoipa::path(
    get,
    path = "/api/partners",
    tag = "Companies",
    responses(
        (status = 200, description = "Seguradoras parceiras ativas, por nome", body = Vec<InsuranceCompany>)
    )
)]
pub async fn list_partners(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let companies = app_state
        .company_service
        .list_companies(&app_state.db_pool, true)
        .await?;

    Ok((StatusCode::OK, Json(companies)))
}

// GET /api/companies
#[utoipa::path(
    get,
    path = "/api/companies",
    tag = "Companies",
    params(ListCompaniesQuery),
    responses(
        (status = 200, description = "Lista de seguradoras por nome", body = Vec<InsuranceCompany>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_companies(
    State(app_state): State<AppState>,
    Query(query): Query<ListCompaniesQuery>,
) -> Result<impl IntoResponse, AppError> {
    let companies = app_state
        .company_service
        .list_companies(&app_state.db_pool, query.active)
        .await?;

    Ok((StatusCode::OK, Json(companies)))
}

// GET /api/companies/{id}
#[utoipa::path(
    get,
    path = "/api/companies/{id}",
    tag = "Companies",
    params(("id" = Uuid, Path, description = "ID da seguradora")),
    responses(
        (status = 200, description = "Seguradora encontrada", body = InsuranceCompany),
        (status = 404, description = "Seguradora não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_company(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let company = app_state
        .company_service
        .get_company(&app_state.db_pool, id)
        .await?;

    Ok((StatusCode::OK, Json(company)))
}

// POST /api/companies
#[utoipa::path(
    post,
    path = "/api/companies",
    tag = "Companies",
    request_body = CreateCompanyPayload,
    responses(
        (status = 201, description = "Seguradora criada", body = InsuranceCompany),
        (status = 409, description = "Nome de seguradora duplicado")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_company(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateCompanyPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let company = app_state
        .company_service
        .create_company(&app_state.db_pool, &payload)
        .await?;

    Ok((StatusCode::CREATED, Json(company)))
}

// PUT /api/companies/{id}
#[utoipa::path(
    put,
    path = "/api/companies/{id}",
    tag = "Companies",
    params(("id" = Uuid, Path, description = "ID da seguradora")),
    request_body = UpdateCompanyPayload,
    responses(
        (status = 200, description = "Seguradora atualizada", body = InsuranceCompany),
        (status = 404, description = "Seguradora não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_company(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCompanyPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let company = app_state
        .company_service
        .update_company(&app_state.db_pool, id, &payload)
        .await?;

    Ok((StatusCode::OK, Json(company)))
}

// DELETE /api/companies/{id} — falha com 409 se houver apólice vinculada
#[utoipa::path(
    delete,
    path = "/api/companies/{id}",
    tag = "Companies",
    params(("id" = Uuid, Path, description = "ID da seguradora")),
    responses(
        (status = 204, description = "Seguradora removida"),
        (status = 404, description = "Seguradora não encontrada"),
        (status = 409, description = "Seguradora em uso por apólices")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_company(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state
        .company_service
        .delete_company(&app_state.db_pool, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
