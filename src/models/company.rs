// src/models/company.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// Mapeia o CREATE TYPE company_category do banco
#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq, ToSchema)]
#[sqlx(type_name = "company_category", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CompanyCategory {
    General,
    Health,
    Life,
}

// Uma seguradora parceira. Referenciada por Policy via FK (RESTRICT).
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InsuranceCompany {
    pub id: Uuid,
    pub name: String,
    pub category: CompanyCategory,
    pub logo_url: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCompanyPayload {
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Star Health")]
    pub name: String,

    #[schema(example = "health")]
    pub category: CompanyCategory,

    pub logo_url: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCompanyPayload {
    #[validate(length(min = 1, message = "required"))]
    pub name: Option<String>,
    pub category: Option<CompanyCategory>,
    pub logo_url: Option<String>,
    pub is_active: Option<bool>,
}
