// src/models/customer.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// Um lead convertido. Possui zero ou mais apólices.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub address: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerPayload {
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Rajesh Kumar")]
    pub name: String,

    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "9876543210")]
    pub phone: String,

    #[validate(email(message = "invalid_email"))]
    pub email: Option<String>,
    #[schema(example = "MVP Colony, Visakhapatnam")]
    pub address: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomerPayload {
    #[validate(length(min = 1, message = "required"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "required"))]
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub notes: Option<String>,
}
