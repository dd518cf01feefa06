// src/models/lead.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// Mapeia o CREATE TYPE lead_status do banco
#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq, ToSchema)]
#[sqlx(type_name = "lead_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum LeadStatus {
    New,
    Contacted,
    Converted,
    Lost,
}

// Um contato vindo do formulário público de cotação (ou cadastrado à mão).
// Ciclo de vida por status, nunca convertido de volta.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,

    // Nome livre do produto (Ex: "Car Insurance"). Não é FK.
    pub insurance_type: String,

    pub vehicle_number: Option<String>,
    pub message: Option<String>,

    pub status: LeadStatus,
    pub source: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Payload do formulário público de cotação.
// As regras condicionais (DOB, veículo, viagem) ficam no LeadService.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequestPayload {
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Asha")]
    pub name: String,

    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "9999999999")]
    pub phone: String,

    #[validate(email(message = "invalid_email"))]
    pub email: Option<String>,

    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Health Insurance")]
    pub insurance_type: String,

    #[schema(example = "AP 01 AB 1234")]
    pub vehicle_number: Option<String>,

    // Obrigatório para produtos tarifados por idade (Travel/Health/Life)
    #[schema(value_type = Option<String>, format = Date, example = "1990-05-20")]
    pub date_of_birth: Option<NaiveDate>,

    // Somente para Travel Insurance
    pub destinations: Option<Vec<String>>,
    #[schema(value_type = Option<String>, format = Date)]
    pub travel_start_date: Option<NaiveDate>,
    #[schema(value_type = Option<String>, format = Date)]
    pub travel_end_date: Option<NaiveDate>,

    pub message: Option<String>,
}

// Atualização parcial: campos ausentes mantêm o valor salvo
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLeadPayload {
    #[validate(length(min = 1, message = "required"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "required"))]
    pub phone: Option<String>,
    pub email: Option<String>,
    pub insurance_type: Option<String>,
    pub vehicle_number: Option<String>,
    pub message: Option<String>,
    pub status: Option<LeadStatus>,
}
