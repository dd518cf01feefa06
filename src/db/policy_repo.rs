// src/db/policy_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::policy::{CreatePolicyPayload, Policy, PolicyStatus, UpdatePolicyPayload},
};

#[derive(Clone)]
pub struct PolicyRepository {
    pool: PgPool,
}

impl PolicyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_all<'e, E>(&self, executor: E) -> Result<Vec<Policy>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let policies =
            sqlx::query_as::<_, Policy>("SELECT * FROM policies ORDER BY created_at DESC")
                .fetch_all(executor)
                .await?;

        Ok(policies)
    }

    /// Apólices de um cliente, vencimento mais próximo primeiro
    pub async fn list_by_customer<'e, E>(
        &self,
        executor: E,
        customer_id: Uuid,
    ) -> Result<Vec<Policy>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let policies = sqlx::query_as::<_, Policy>(
            "SELECT * FROM policies WHERE customer_id = $1 ORDER BY end_date ASC",
        )
        .bind(customer_id)
        .fetch_all(executor)
        .await?;

        Ok(policies)
    }

    pub async fn find_by_id<'e, E>(&self, executor: E, id: Uuid) -> Result<Policy, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, Policy>("SELECT * FROM policies WHERE id = $1")
            .bind(id)
            .fetch_optional(executor)
            .await?
            .ok_or(AppError::RecordNotFound("Apólice"))
    }

    /// Quantas apólices referenciam a seguradora (para a regra de exclusão)
    pub async fn count_by_company<'e, E>(
        &self,
        executor: E,
        insurance_company_id: Uuid,
    ) -> Result<i64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM policies WHERE insurance_company_id = $1",
        )
        .bind(insurance_company_id)
        .fetch_one(executor)
        .await?;

        Ok(count)
    }

    pub async fn create<'e, E>(
        &self,
        executor: E,
        input: &CreatePolicyPayload,
    ) -> Result<Policy, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let policy = sqlx::query_as::<_, Policy>(
            r#"
            INSERT INTO policies (
                customer_id, insurance_company_id, product_type, policy_number,
                premium_amount, start_date, end_date, status, vehicle_number, notes
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(input.customer_id)
        .bind(input.insurance_company_id)
        .bind(&input.product_type)
        .bind(&input.policy_number)
        .bind(input.premium_amount)
        .bind(input.start_date)
        .bind(input.end_date)
        .bind(input.status.unwrap_or(PolicyStatus::Active))
        .bind(input.vehicle_number.as_deref())
        .bind(input.notes.as_deref())
        .fetch_one(executor)
        .await
        .map_err(|e| {
            // Número de apólice é único no sistema inteiro
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::DuplicatePolicyNumber(input.policy_number.clone());
                }
            }
            e.into()
        })?;

        Ok(policy)
    }

    pub async fn update<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        input: &UpdatePolicyPayload,
    ) -> Result<Policy, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let policy = sqlx::query_as::<_, Policy>(
            r#"
            UPDATE policies SET
                insurance_company_id = COALESCE($2, insurance_company_id),
                product_type = COALESCE($3, product_type),
                policy_number = COALESCE($4, policy_number),
                premium_amount = COALESCE($5, premium_amount),
                start_date = COALESCE($6, start_date),
                end_date = COALESCE($7, end_date),
                status = COALESCE($8, status),
                vehicle_number = COALESCE($9, vehicle_number),
                notes = COALESCE($10, notes),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(input.insurance_company_id)
        .bind(input.product_type.as_deref())
        .bind(input.policy_number.as_deref())
        .bind(input.premium_amount)
        .bind(input.start_date)
        .bind(input.end_date)
        .bind(input.status)
        .bind(input.vehicle_number.as_deref())
        .bind(input.notes.as_deref())
        .fetch_optional(executor)
        .await
        .map_err(|e: sqlx::Error| -> AppError {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::DuplicatePolicyNumber(
                        input.policy_number.clone().unwrap_or_default(),
                    );
                }
            }
            e.into()
        })?
        .ok_or(AppError::RecordNotFound("Apólice"))?;

        Ok(policy)
    }

    pub async fn delete<'e, E>(&self, executor: E, id: Uuid) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM policies WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::RecordNotFound("Apólice"));
        }

        Ok(())
    }
}
