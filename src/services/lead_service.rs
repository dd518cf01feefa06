// src/services/lead_service.rs

use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::LeadRepository,
    models::lead::{Lead, QuoteRequestPayload, UpdateLeadPayload},
    services::notifier::Notifier,
};

// Produtos que exigem número do veículo na cotação
fn is_motor_product(insurance_type: &str) -> bool {
    insurance_type.contains("Vehicle")
        || insurance_type.contains("Wheeler")
        || insurance_type.contains("Car")
}

// Produtos tarifados por idade exigem data de nascimento
fn is_age_rated_product(insurance_type: &str) -> bool {
    matches!(
        insurance_type,
        "Travel Insurance" | "Health Insurance" | "Life Insurance"
    )
}

// Helper para acumular erro de campo (mesmo formato do derive do validator)
fn add_field_error(errors: &mut validator::ValidationErrors, field: &str, code: &str) {
    let mut err = validator::ValidationError::new("invalid");
    err.message = Some(code.to_string().into());

    // Leak seguro para erro estático
    let static_field: &'static str = Box::leak(field.to_string().into_boxed_str());
    errors.add(static_field, err);
}

/// Regras condicionais do formulário de cotação. Roda ANTES de qualquer
/// persistência ou chamada de rede: cotação inválida não cria lead nem
/// dispara notificação.
pub fn validate_quote_rules(payload: &QuoteRequestPayload) -> Result<(), AppError> {
    let mut errors = validator::ValidationErrors::new();

    if is_age_rated_product(&payload.insurance_type) && payload.date_of_birth.is_none() {
        add_field_error(&mut errors, "date_of_birth", "required");
    }

    if is_motor_product(&payload.insurance_type)
        && payload
            .vehicle_number
            .as_deref()
            .map_or(true, |v| v.trim().is_empty())
    {
        add_field_error(&mut errors, "vehicle_number", "required");
    }

    if payload.insurance_type == "Travel Insurance" {
        if payload
            .destinations
            .as_deref()
            .map_or(true, |d| d.is_empty())
        {
            add_field_error(&mut errors, "destinations", "required");
        }

        match (payload.travel_start_date, payload.travel_end_date) {
            (Some(start), Some(end)) => {
                // O fim da viagem não pode vir antes do começo
                if end < start {
                    add_field_error(&mut errors, "travel_end_date", "end_before_start");
                }
            }
            _ => add_field_error(&mut errors, "travel_dates", "required"),
        }
    }

    if !errors.is_empty() {
        return Err(AppError::ValidationError(errors));
    }

    Ok(())
}

#[derive(Clone)]
pub struct LeadService {
    repo: LeadRepository,
    notifier: Notifier,
}

impl LeadService {
    pub fn new(repo: LeadRepository, notifier: Notifier) -> Self {
        Self { repo, notifier }
    }

    /// Entrada do formulário público: valida, persiste e dispara as
    /// notificações. Só a persistência decide o resultado; falha de
    /// e-mail ou de repasse vira warn no log.
    pub async fn submit_quote<'e, E>(
        &self,
        executor: E,
        payload: &QuoteRequestPayload,
    ) -> Result<Lead, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        validate_quote_rules(payload)?;

        let lead = self
            .repo
            .create(
                executor,
                &payload.name,
                &payload.phone,
                payload.email.as_deref(),
                &payload.insurance_type,
                payload.vehicle_number.as_deref(),
                payload.message.as_deref(),
                "website",
            )
            .await?;

        if let Err(err) = self.notifier.send_quote_email(payload).await {
            tracing::warn!("Falha ao enviar e-mail de cotação: {}", err);
        }
        if let Err(err) = self.notifier.relay_quote(payload).await {
            tracing::warn!("Falha no repasse da cotação: {}", err);
        }

        Ok(lead)
    }

    pub async fn list_leads<'e, E>(&self, executor: E) -> Result<Vec<Lead>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.list_all(executor).await
    }

    pub async fn get_lead<'e, E>(&self, executor: E, id: Uuid) -> Result<Lead, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.find_by_id(executor, id).await
    }

    pub async fn update_lead<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        input: &UpdateLeadPayload,
    ) -> Result<Lead, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.update(executor, id, input).await
    }

    pub async fn delete_lead<'e, E>(&self, executor: E, id: Uuid) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.delete(executor, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn base_quote(insurance_type: &str) -> QuoteRequestPayload {
        QuoteRequestPayload {
            name: "Asha".to_string(),
            phone: "9999999999".to_string(),
            email: None,
            insurance_type: insurance_type.to_string(),
            vehicle_number: None,
            date_of_birth: None,
            destinations: None,
            travel_start_date: None,
            travel_end_date: None,
            message: None,
        }
    }

    #[test]
    fn saude_sem_data_de_nascimento_falha() {
        let payload = base_quote("Health Insurance");
        let result = validate_quote_rules(&payload);
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[test]
    fn saude_com_data_de_nascimento_passa() {
        let mut payload = base_quote("Health Insurance");
        payload.date_of_birth = NaiveDate::from_ymd_opt(1990, 5, 20);
        assert!(validate_quote_rules(&payload).is_ok());
    }

    #[test]
    fn produto_de_veiculo_exige_numero_do_veiculo() {
        let mut payload = base_quote("Car Insurance");
        assert!(validate_quote_rules(&payload).is_err());

        payload.vehicle_number = Some("AP 01 AB 1234".to_string());
        assert!(validate_quote_rules(&payload).is_ok());
    }

    #[test]
    fn numero_de_veiculo_em_branco_nao_conta() {
        let mut payload = base_quote("Two-Wheeler Insurance");
        payload.vehicle_number = Some("   ".to_string());
        assert!(validate_quote_rules(&payload).is_err());
    }

    #[test]
    fn viagem_exige_destinos_e_par_de_datas() {
        let mut payload = base_quote("Travel Insurance");
        payload.date_of_birth = NaiveDate::from_ymd_opt(1990, 5, 20);
        assert!(validate_quote_rules(&payload).is_err());

        payload.destinations = Some(vec!["Singapore".to_string()]);
        payload.travel_start_date = NaiveDate::from_ymd_opt(2025, 9, 1);
        payload.travel_end_date = NaiveDate::from_ymd_opt(2025, 9, 10);
        assert!(validate_quote_rules(&payload).is_ok());
    }

    #[test]
    fn viagem_com_volta_antes_da_ida_falha() {
        let mut payload = base_quote("Travel Insurance");
        payload.date_of_birth = NaiveDate::from_ymd_opt(1990, 5, 20);
        payload.destinations = Some(vec!["Dubai".to_string()]);
        payload.travel_start_date = NaiveDate::from_ymd_opt(2025, 9, 10);
        payload.travel_end_date = NaiveDate::from_ymd_opt(2025, 9, 1);
        assert!(validate_quote_rules(&payload).is_err());
    }

    #[test]
    fn viagem_com_lista_de_destinos_vazia_falha() {
        let mut payload = base_quote("Travel Insurance");
        payload.date_of_birth = NaiveDate::from_ymd_opt(1990, 5, 20);
        payload.destinations = Some(vec![]);
        payload.travel_start_date = NaiveDate::from_ymd_opt(2025, 9, 1);
        payload.travel_end_date = NaiveDate::from_ymd_opt(2025, 9, 10);
        assert!(validate_quote_rules(&payload).is_err());
    }

    #[test]
    fn produto_sem_regra_condicional_passa_direto() {
        let payload = base_quote("Shopkeeper Insurance");
        assert!(validate_quote_rules(&payload).is_ok());
    }
}
