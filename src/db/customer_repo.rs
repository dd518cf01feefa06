// src/db/customer_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::customer::{CreateCustomerPayload, Customer, UpdateCustomerPayload},
};

#[derive(Clone)]
pub struct CustomerRepository {
    pool: PgPool,
}

impl CustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_all<'e, E>(&self, executor: E) -> Result<Vec<Customer>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let customers =
            sqlx::query_as::<_, Customer>("SELECT * FROM customers ORDER BY created_at DESC")
                .fetch_all(executor)
                .await?;

        Ok(customers)
    }

    pub async fn find_by_id<'e, E>(&self, executor: E, id: Uuid) -> Result<Customer, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, Customer>("SELECT * FROM customers WHERE id = $1")
            .bind(id)
            .fetch_optional(executor)
            .await?
            .ok_or(AppError::RecordNotFound("Cliente"))
    }

    pub async fn create<'e, E>(
        &self,
        executor: E,
        input: &CreateCustomerPayload,
    ) -> Result<Customer, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let customer = sqlx::query_as::<_, Customer>(
            r#"
            INSERT INTO customers (name, phone, email, address, notes)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&input.name)
        .bind(&input.phone)
        .bind(input.email.as_deref())
        .bind(input.address.as_deref())
        .bind(input.notes.as_deref())
        .fetch_one(executor)
        .await?;

        Ok(customer)
    }

    pub async fn update<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        input: &UpdateCustomerPayload,
    ) -> Result<Customer, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let customer = sqlx::query_as::<_, Customer>(
            r#"
            UPDATE customers SET
                name = COALESCE($2, name),
                phone = COALESCE($3, phone),
                email = COALESCE($4, email),
                address = COALESCE($5, address),
                notes = COALESCE($6, notes),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(input.name.as_deref())
        .bind(input.phone.as_deref())
        .bind(input.email.as_deref())
        .bind(input.address.as_deref())
        .bind(input.notes.as_deref())
        .fetch_optional(executor)
        .await?
        .ok_or(AppError::RecordNotFound("Cliente"))?;

        Ok(customer)
    }

    pub async fn delete<'e, E>(&self, executor: E, id: Uuid) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::RecordNotFound("Cliente"));
        }

        Ok(())
    }
}
