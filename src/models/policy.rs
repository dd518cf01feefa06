// src/models/policy.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// Mapeia o CREATE TYPE policy_status do banco.
// "Expiring soon" NÃO é um status: é derivado da data pelo agregador.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq, ToSchema)]
#[sqlx(type_name = "policy_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PolicyStatus {
    Active,
    Expired,
    Renewed,
    Cancelled,
    Pending,
}

// Uma apólice vendida, vinculada a um cliente e a uma seguradora.
// premium_amount é opcional no banco: valores ausentes contam como zero
// nas somas do dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Policy {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub insurance_company_id: Uuid,

    pub product_type: String,
    pub policy_number: String,

    #[schema(value_type = Option<f64>, example = 25000.0)]
    pub premium_amount: Option<Decimal>,

    #[schema(value_type = String, format = Date)]
    pub start_date: NaiveDate,
    #[schema(value_type = String, format = Date)]
    pub end_date: NaiveDate,

    pub status: PolicyStatus,

    pub vehicle_number: Option<String>,
    pub notes: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePolicyPayload {
    pub customer_id: Uuid,
    pub insurance_company_id: Uuid,

    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Car Insurance")]
    pub product_type: String,

    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "POL-2024-001")]
    pub policy_number: String,

    #[schema(value_type = Option<f64>, example = 25000.0)]
    pub premium_amount: Option<Decimal>,

    #[schema(value_type = String, format = Date, example = "2024-01-15")]
    pub start_date: NaiveDate,
    #[schema(value_type = String, format = Date, example = "2025-01-14")]
    pub end_date: NaiveDate,

    pub status: Option<PolicyStatus>,

    pub vehicle_number: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePolicyPayload {
    pub insurance_company_id: Option<Uuid>,
    pub product_type: Option<String>,
    #[validate(length(min = 1, message = "required"))]
    pub policy_number: Option<String>,
    #[schema(value_type = Option<f64>)]
    pub premium_amount: Option<Decimal>,
    #[schema(value_type = Option<String>, format = Date)]
    pub start_date: Option<NaiveDate>,
    #[schema(value_type = Option<String>, format = Date)]
    pub end_date: Option<NaiveDate>,
    pub status: Option<PolicyStatus>,
    pub vehicle_number: Option<String>,
    pub notes: Option<String>,
}
