// src/db/lead_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::lead::{Lead, LeadStatus, UpdateLeadPayload},
};

#[derive(Clone)]
pub struct LeadRepository {
    pool: PgPool,
}

impl LeadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lista todos os leads, mais recentes primeiro
    pub async fn list_all<'e, E>(&self, executor: E) -> Result<Vec<Lead>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let leads =
            sqlx::query_as::<_, Lead>("SELECT * FROM leads ORDER BY created_at DESC")
                .fetch_all(executor)
                .await?;

        Ok(leads)
    }

    pub async fn find_by_id<'e, E>(&self, executor: E, id: Uuid) -> Result<Lead, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, Lead>("SELECT * FROM leads WHERE id = $1")
            .bind(id)
            .fetch_optional(executor)
            .await?
            .ok_or(AppError::RecordNotFound("Lead"))
    }

    /// Cria um lead vindo do formulário público (status 'new', source 'website')
    pub async fn create<'e, E>(
        &self,
        executor: E,
        name: &str,
        phone: &str,
        email: Option<&str>,
        insurance_type: &str,
        vehicle_number: Option<&str>,
        message: Option<&str>,
        source: &str,
    ) -> Result<Lead, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let lead = sqlx::query_as::<_, Lead>(
            r#"
            INSERT INTO leads (name, phone, email, insurance_type, vehicle_number, message, status, source)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(phone)
        .bind(email)
        .bind(insurance_type)
        .bind(vehicle_number)
        .bind(message)
        .bind(LeadStatus::New)
        .bind(source)
        .fetch_one(executor)
        .await?;

        Ok(lead)
    }

    /// Atualização parcial: COALESCE mantém o valor salvo quando o campo vem nulo
    pub async fn update<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        input: &UpdateLeadPayload,
    ) -> Result<Lead, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let lead = sqlx::query_as::<_, Lead>(
            r#"
            UPDATE leads SET
                name = COALESCE($2, name),
                phone = COALESCE($3, phone),
                email = COALESCE($4, email),
                insurance_type = COALESCE($5, insurance_type),
                vehicle_number = COALESCE($6, vehicle_number),
                message = COALESCE($7, message),
                status = COALESCE($8, status),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(input.name.as_deref())
        .bind(input.phone.as_deref())
        .bind(input.email.as_deref())
        .bind(input.insurance_type.as_deref())
        .bind(input.vehicle_number.as_deref())
        .bind(input.message.as_deref())
        .bind(input.status)
        .fetch_optional(executor)
        .await?
        .ok_or(AppError::RecordNotFound("Lead"))?;

        Ok(lead)
    }

    pub async fn delete<'e, E>(&self, executor: E, id: Uuid) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM leads WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::RecordNotFound("Lead"));
        }

        Ok(())
    }
}
