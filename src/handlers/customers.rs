// src/handlers/customers.rs

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
    models::{
        customer::{CreateCustomerPayload, Customer, UpdateCustomerPayload},
        policy::Policy,
    },
};

// GET /api/customers
#[utoipa::path(
    get,
    path = "/api/customers",
    tag = "Customers",
    responses(
        (status = 200, description = "Lista de clientes", body = Vec<Customer>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_customers(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let customers = app_state
        .customer_service
        .list_customers(&app_state.db_pool)
        .await?;

    Ok((StatusCode::OK, Json(customers)))
}

// GET /api/customers/{id}
#[utoipa::path(
    get,
    path = "/api/customers/{id}",
    tag = "Customers",
    params(("id" = Uuid, Path, description = "ID do cliente")),
    responses(
        (status = 200, description = "Cliente encontrado", body = Customer),
        (status = 404, description = "Cliente não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_customer(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let customer = app_state
        .customer_service
        .get_customer(&app_state.db_pool, id)
        .await?;

    Ok((StatusCode::OK, Json(customer)))
}

// GET /api/customers/{id}/policies
#[utoipa::path(
    get,
    path = "/api/customers/{id}/policies",
    tag = "Customers",
    params(("id" = Uuid, Path, description = "ID do cliente")),
    responses(
        (status = 200, description = "Apólices do cliente, vencimento mais próximo primeiro", body = Vec<Policy>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_customer_policies(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let policies = app_state
        .customer_service
        .list_customer_policies(&app_state.db_pool, id)
        .await?;

    Ok((StatusCode::OK, Json(policies)))
}

// POST /api/customers
#[utoipa::path(
    post,
    path = "/api/customers",
    tag = "Customers",
    request_body = CreateCustomerPayload,
    responses(
        (status = 201, description = "Cliente criado", body = Customer),
        (status = 400, description = "Dados inválidos")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_customer(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateCustomerPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let customer = app_state
        .customer_service
        .create_customer(&app_state.db_pool, &payload)
        .await?;

    Ok((StatusCode::CREATED, Json(customer)))
}

// PUT /api/customers/{id}
#[utoipa::path(
    put,
    path = "/api/customers/{id}",
    tag = "Customers",
    params(("id" = Uuid, Path, description = "ID do cliente")),
    request_body = UpdateCustomerPayload,
    responses(
        (status = 200, description = "Cliente atualizado", body = Customer),
        (status = 404, description = "Cliente não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_customer(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCustomerPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let customer = app_state
        .customer_service
        .update_customer(&app_state.db_pool, id, &payload)
        .await?;

    Ok((StatusCode::OK, Json(customer)))
}

// DELETE /api/customers/{id}
#[utoipa::path(
    delete,
    path = "/api/customers/{id}",
    tag = "Customers",
    params(("id" = Uuid, Path, description = "ID do cliente")),
    responses(
        (status = 204, description = "Cliente removido"),
        (status = 404, description = "Cliente não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_customer(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state
        .customer_service
        .delete_customer(&app_state.db_pool, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
