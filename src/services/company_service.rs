// src/services/company_service.rs

use sqlx::{Acquire, Executor, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{CompanyRepository, PolicyRepository},
    models::company::{CreateCompanyPayload, InsuranceCompany, UpdateCompanyPayload},
};

#[derive(Clone)]
pub struct CompanyService {
    repo: CompanyRepository,
    policy_repo: PolicyRepository,
}

impl CompanyService {
    pub fn new(repo: CompanyRepository, policy_repo: PolicyRepository) -> Self {
        Self { repo, policy_repo }
    }

    pub async fn list_companies<'e, E>(
        &self,
        executor: E,
        only_active: bool,
    ) -> Result<Vec<InsuranceCompany>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.list_all(executor, only_active).await
    }

    pub async fn get_company<'e, E>(
        &self,
        executor: E,
        id: Uuid,
    ) -> Result<InsuranceCompany, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.find_by_id(executor, id).await
    }

    pub async fn create_company<'e, E>(
        &self,
        executor: E,
        input: &CreateCompanyPayload,
    ) -> Result<InsuranceCompany, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.create(executor, input).await
    }

    pub async fn update_company<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        input: &UpdateCompanyPayload,
    ) -> Result<InsuranceCompany, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.update(executor, id, input).await
    }

    /// Excluir seguradora com apólice vinculada é um conflito de domínio,
    /// não uma falha genérica. Checagem + DELETE na mesma transação; a FK
    /// RESTRICT cobre qualquer corrida restante.
    pub async fn delete_company<'e, E>(&self, executor: E, id: Uuid) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres> + Acquire<'e, Database = Postgres>,
    {
        let mut tx = executor.begin().await?;

        let references = self.policy_repo.count_by_company(&mut *tx, id).await?;
        if references > 0 {
            return Err(AppError::CompanyInUse);
        }

        self.repo.delete(&mut *tx, id).await?;

        tx.commit().await?;
        Ok(())
    }
}
