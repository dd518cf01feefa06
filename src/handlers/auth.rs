// src/handlers/auth.rs

use axum::{extract::State, Json};
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthenticatedAdmin,
    models::auth::{Admin, AuthResponse, LoginAdminPayload, RegisterAdminPayload},
};

// POST /api/auth/register
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "Auth",
    request_body = RegisterAdminPayload,
    responses(
        (status = 200, description = "Admin registrado, retorna o token", body = AuthResponse),
        (status = 400, description = "Dados inválidos"),
        (status = 409, description = "E-mail já cadastrado")
    )
)]
pub async fn register(
    State(app_state): State<AppState>,
    Json(payload): Json<RegisterAdminPayload>,
) -> Result<Json<AuthResponse>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let token = app_state
        .auth_service
        .register_admin(&payload.email, &payload.name, &payload.password)
        .await?;

    Ok(Json(AuthResponse { token }))
}

// POST /api/auth/login
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "Auth",
    request_body = LoginAdminPayload,
    responses(
        (status = 200, description = "Login efetuado, retorna o token", body = AuthResponse),
        (status = 401, description = "Credenciais inválidas")
    )
)]
pub async fn login(
    State(app_state): State<AppState>,
    Json(payload): Json<LoginAdminPayload>,
) -> Result<Json<AuthResponse>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let token = app_state
        .auth_service
        .login_admin(&payload.email, &payload.password)
        .await?;

    Ok(Json(AuthResponse { token }))
}

// GET /api/auth/me (rota protegida)
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "Auth",
    responses(
        (status = 200, description = "Dados do admin autenticado", body = Admin),
        (status = 401, description = "Não autorizado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_me(AuthenticatedAdmin(admin): AuthenticatedAdmin) -> Json<Admin> {
    Json(admin)
}
