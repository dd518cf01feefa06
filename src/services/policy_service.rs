// src/services/policy_service.rs

use sqlx::{Acquire, Executor, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{CompanyRepository, CustomerRepository, PolicyRepository},
    models::policy::{CreatePolicyPayload, Policy, UpdatePolicyPayload},
};

#[derive(Clone)]
pub struct PolicyService {
    repo: PolicyRepository,
    customer_repo: CustomerRepository,
    company_repo: CompanyRepository,
}

impl PolicyService {
    pub fn new(
        repo: PolicyRepository,
        customer_repo: CustomerRepository,
        company_repo: CompanyRepository,
    ) -> Self {
        Self { repo, customer_repo, company_repo }
    }

    pub async fn list_policies<'e, E>(&self, executor: E) -> Result<Vec<Policy>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.list_all(executor).await
    }

    pub async fn get_policy<'e, E>(&self, executor: E, id: Uuid) -> Result<Policy, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.find_by_id(executor, id).await
    }

    /// Cria a apólice validando as duas FKs antes, para devolver 404
    /// legível em vez de erro de constraint. O número duplicado vira
    /// DuplicatePolicyNumber no repo.
    pub async fn create_policy<'e, E>(
        &self,
        executor: E,
        input: &CreatePolicyPayload,
    ) -> Result<Policy, AppError>
    where
        E: Executor<'e, Database = Postgres> + Acquire<'e, Database = Postgres>,
    {
        let mut tx = executor.begin().await?;

        self.customer_repo.find_by_id(&mut *tx, input.customer_id).await?;
        self.company_repo
            .find_by_id(&mut *tx, input.insurance_company_id)
            .await?;

        let policy = self.repo.create(&mut *tx, input).await?;

        tx.commit().await?;
        Ok(policy)
    }

    pub async fn update_policy<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        input: &UpdatePolicyPayload,
    ) -> Result<Policy, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.update(executor, id, input).await
    }

    pub async fn delete_policy<'e, E>(&self, executor: E, id: Uuid) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.delete(executor, id).await
    }
}
