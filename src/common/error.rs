use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
// As variantes de conflito são separadas de propósito: o frontend precisa
// distinguir "número de apólice duplicado" de uma falha genérica.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("E-mail já existe")]
    EmailAlreadyExists,

    #[error("Credenciais inválidas")]
    InvalidCredentials,

    #[error("Token inválido")]
    InvalidToken,

    #[error("Registro não encontrado: {0}")]
    RecordNotFound(&'static str),

    #[error("Número de apólice duplicado: {0}")]
    DuplicatePolicyNumber(String),

    #[error("Nome de seguradora duplicado: {0}")]
    DuplicateCompanyName(String),

    #[error("Seguradora em uso por apólices")]
    CompanyInUse,

    // Variante para erros de banco de dados (sqlx)
    #[error("Erro de banco de dados")]
    DatabaseError(#[from] sqlx::Error),

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),

    #[error("Erro de Bcrypt: {0}")]
    BcryptError(#[from] bcrypt::BcryptError),

    #[error("Erro de JWT: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            // Retorna todos os detalhes da validação, campo a campo.
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "Um ou mais campos são inválidos.",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::EmailAlreadyExists => {
                (StatusCode::CONFLICT, "Este e-mail já está em uso.".to_string())
            }
            AppError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "E-mail ou senha inválidos.".to_string())
            }
            AppError::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                "Token de autenticação inválido ou ausente.".to_string(),
            ),
            AppError::RecordNotFound(entity) => {
                (StatusCode::NOT_FOUND, format!("{} não encontrado.", entity))
            }
            AppError::DuplicatePolicyNumber(number) => (
                StatusCode::CONFLICT,
                format!("Já existe uma apólice com o número '{}'.", number),
            ),
            AppError::DuplicateCompanyName(name) => (
                StatusCode::CONFLICT,
                format!("Já existe uma seguradora chamada '{}'.", name),
            ),
            AppError::CompanyInUse => (
                StatusCode::CONFLICT,
                "A seguradora possui apólices vinculadas e não pode ser excluída.".to_string(),
            ),

            // Todos os outros erros (DatabaseError, InternalServerError) viram 500.
            // O `tracing` loga a mensagem detalhada que o `thiserror` nos deu.
            ref e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Ocorreu um erro inesperado.".to_string(),
                )
            }
        };

        // Resposta padrão para erros simples que só têm uma mensagem.
        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflitos_viram_409_distintos_de_500() {
        let dup = AppError::DuplicatePolicyNumber("POL-2024-001".into()).into_response();
        assert_eq!(dup.status(), StatusCode::CONFLICT);

        let in_use = AppError::CompanyInUse.into_response();
        assert_eq!(in_use.status(), StatusCode::CONFLICT);

        let generic = AppError::InternalServerError(anyhow::anyhow!("boom")).into_response();
        assert_eq!(generic.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn nao_encontrado_vira_404() {
        let resp = AppError::RecordNotFound("Cliente").into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
