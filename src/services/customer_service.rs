// src/services/customer_service.rs

use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{CustomerRepository, PolicyRepository},
    models::{
        customer::{CreateCustomerPayload, Customer, UpdateCustomerPayload},
        policy::Policy,
    },
};

#[derive(Clone)]
pub struct CustomerService {
    repo: CustomerRepository,
    policy_repo: PolicyRepository,
}

impl CustomerService {
    pub fn new(repo: CustomerRepository, policy_repo: PolicyRepository) -> Self {
        Self { repo, policy_repo }
    }

    pub async fn list_customers<'e, E>(&self, executor: E) -> Result<Vec<Customer>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.list_all(executor).await
    }

    pub async fn get_customer<'e, E>(&self, executor: E, id: Uuid) -> Result<Customer, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.find_by_id(executor, id).await
    }

    /// Apólices do cliente, vencimento mais próximo primeiro
    pub async fn list_customer_policies<'e, E>(
        &self,
        executor: E,
        customer_id: Uuid,
    ) -> Result<Vec<Policy>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.policy_repo.list_by_customer(executor, customer_id).await
    }

    pub async fn create_customer<'e, E>(
        &self,
        executor: E,
        input: &CreateCustomerPayload,
    ) -> Result<Customer, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.create(executor, input).await
    }

    pub async fn update_customer<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        input: &UpdateCustomerPayload,
    ) -> Result<Customer, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.update(executor, id, input).await
    }

    pub async fn delete_customer<'e, E>(&self, executor: E, id: Uuid) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.delete(executor, id).await
    }
}
