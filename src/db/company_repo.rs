// src/db/company_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::company::{CreateCompanyPayload, InsuranceCompany, UpdateCompanyPayload},
};

#[derive(Clone)]
pub struct CompanyRepository {
    pool: PgPool,
}

impl CompanyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lista seguradoras por nome; `only_active` filtra para a vitrine pública
    pub async fn list_all<'e, E>(
        &self,
        executor: E,
        only_active: bool,
    ) -> Result<Vec<InsuranceCompany>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let companies = sqlx::query_as::<_, InsuranceCompany>(
            r#"
            SELECT * FROM insurance_companies
            WHERE is_active = TRUE OR $1 = FALSE
            ORDER BY name ASC
            "#,
        )
        .bind(only_active)
        .fetch_all(executor)
        .await?;

        Ok(companies)
    }

    pub async fn find_by_id<'e, E>(
        &self,
        executor: E,
        id: Uuid,
    ) -> Result<InsuranceCompany, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, InsuranceCompany>("SELECT * FROM insurance_companies WHERE id = $1")
            .bind(id)
            .fetch_optional(executor)
            .await?
            .ok_or(AppError::RecordNotFound("Seguradora"))
    }

    pub async fn create<'e, E>(
        &self,
        executor: E,
        input: &CreateCompanyPayload,
    ) -> Result<InsuranceCompany, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let company = sqlx::query_as::<_, InsuranceCompany>(
            r#"
            INSERT INTO insurance_companies (name, category, logo_url, is_active)
            VALUES ($1, $2, $3, TRUE)
            RETURNING *
            "#,
        )
        .bind(&input.name)
        .bind(input.category)
        .bind(input.logo_url.as_deref())
        .fetch_one(executor)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::DuplicateCompanyName(input.name.clone());
                }
            }
            e.into()
        })?;

        Ok(company)
    }

    pub async fn update<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        input: &UpdateCompanyPayload,
    ) -> Result<InsuranceCompany, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let company = sqlx::query_as::<_, InsuranceCompany>(
            r#"
            UPDATE insurance_companies SET
                name = COALESCE($2, name),
                category = COALESCE($3, category),
                logo_url = COALESCE($4, logo_url),
                is_active = COALESCE($5, is_active),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(input.name.as_deref())
        .bind(input.category)
        .bind(input.logo_url.as_deref())
        .bind(input.is_active)
        .fetch_optional(executor)
        .await
        .map_err(|e: sqlx::Error| -> AppError {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::DuplicateCompanyName(
                        input.name.clone().unwrap_or_default(),
                    );
                }
            }
            e.into()
        })?
        .ok_or(AppError::RecordNotFound("Seguradora"))?;

        Ok(company)
    }

    /// A exclusão pode violar a FK RESTRICT de policies; o serviço já checa
    /// antes, mas o banco continua sendo a última barreira.
    pub async fn delete<'e, E>(&self, executor: E, id: Uuid) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM insurance_companies WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(db_err) = &e {
                    if db_err.is_foreign_key_violation() {
                        return AppError::CompanyInUse;
                    }
                }
                AppError::from(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::RecordNotFound("Seguradora"));
        }

        Ok(())
    }
}
