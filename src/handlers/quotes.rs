// src/handlers/quotes.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::lead::{Lead, QuoteRequestPayload},
};

// POST /api/quotes — a única rota pública de escrita (formulário do site)
#[utoipa::path(
    post,
    path = "/api/quotes",
    tag = "Quotes",
    request_body = QuoteRequestPayload,
    responses(
        (status = 201, description = "Cotação recebida e lead criado", body = Lead),
        (status = 400, description = "Campos obrigatórios ausentes ou inválidos")
    )
)]
pub async fn submit_quote(
    State(app_state): State<AppState>,
    Json(payload): Json<QuoteRequestPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let lead = app_state
        .lead_service
        .submit_quote(&app_state.db_pool, &payload)
        .await?;

    Ok((StatusCode::CREATED, Json(lead)))
}
