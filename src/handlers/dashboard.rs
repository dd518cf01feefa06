// src/handlers/dashboard.rs

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    common::error::AppError,
    config::AppState,
    models::dashboard::{DashboardData, RenewalEntry, RenewalRange},
};

// GET /api/dashboard/stats
#[utoipa::path(
    get,
    path = "/api/dashboard/stats",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Snapshot completo do painel", body = DashboardData),
        (status = 401, description = "Não autorizado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_stats(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let data = app_state
        .dashboard_service
        .get_dashboard(&app_state.db_pool)
        .await?;

    Ok((StatusCode::OK, Json(data)))
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct RenewalsQuery {
    // Faixa default da página: esta semana
    pub range: Option<RenewalRange>,
}

// GET /api/renewals?range=week
#[utoipa::path(
    get,
    path = "/api/renewals",
    tag = "Dashboard",
    params(RenewalsQuery),
    responses(
        (status = 200, description = "Apólices da faixa pedida, mais urgentes primeiro", body = Vec<RenewalEntry>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_renewals(
    State(app_state): State<AppState>,
    Query(query): Query<RenewalsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let range = query.range.unwrap_or(RenewalRange::Week);

    let renewals = app_state
        .dashboard_service
        .get_renewals(&app_state.db_pool, range)
        .await?;

    Ok((StatusCode::OK, Json(renewals)))
}
