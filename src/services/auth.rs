// src/services/auth.rs

use bcrypt::{hash, verify};
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::AdminRepository,
    models::auth::{Admin, Claims},
};

#[derive(Clone)]
pub struct AuthService {
    admin_repo: AdminRepository,
    jwt_secret: String,
}

impl AuthService {
    pub fn new(admin_repo: AdminRepository, jwt_secret: String) -> Self {
        Self { admin_repo, jwt_secret }
    }

    pub async fn register_admin(
        &self,
        email: &str,
        name: &str,
        password: &str,
    ) -> Result<String, AppError> {
        // Hashing em thread separada para não bloquear o runtime
        let password_clone = password.to_owned();
        let hashed_password = tokio::task::spawn_blocking(move || {
            hash(&password_clone, bcrypt::DEFAULT_COST)
        })
        .await
        .map_err(|e| anyhow::anyhow!("Falha na task de hashing: {}", e))??;

        // O repo traduz violação de unicidade em EmailAlreadyExists
        let new_admin = self.admin_repo.create(email, name, &hashed_password).await?;

        self.create_token(new_admin.id)
    }

    pub async fn login_admin(&self, email: &str, password: &str) -> Result<String, AppError> {
        let admin = self
            .admin_repo
            .find_by_email(email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        let password_clone = password.to_owned();
        let password_hash_clone = admin.password_hash.clone();

        // Executa a verificação em um thread separado
        let is_password_valid = tokio::task::spawn_blocking(move || {
            verify(&password_clone, &password_hash_clone)
        })
        .await
        .map_err(|e| anyhow::anyhow!("Falha na task de verificação de senha: {}", e))??;

        if !is_password_valid {
            return Err(AppError::InvalidCredentials);
        }

        self.create_token(admin.id)
    }

    pub async fn validate_token(&self, token: &str) -> Result<Admin, AppError> {
        let validation = Validation::default();
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_ref()),
            &validation,
        )
        .map_err(|_| AppError::InvalidToken)?;

        self.admin_repo
            .find_by_id(token_data.claims.sub)
            .await?
            .ok_or(AppError::RecordNotFound("Admin"))
    }

    fn create_token(&self, admin_id: Uuid) -> Result<String, AppError> {
        let now = Utc::now();
        let expires_at = now + chrono::Duration::days(7);

        let claims = Claims {
            sub: admin_id,
            exp: expires_at.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        Ok(encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_ref()),
        )?)
    }
}
