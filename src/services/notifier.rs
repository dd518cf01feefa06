// src/services/notifier.rs

use lettre::{
    message::header::ContentType,
    transport::smtp::{authentication::Credentials, Error as SmtpError},
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use serde_json::json;
use thiserror::Error;

use crate::models::lead::QuoteRequestPayload;

// Erros do caminho de notificação. Nunca sobem até o usuário final:
// o LeadService loga e segue em frente.
#[derive(Debug, Error)]
pub enum NotifierError {
    #[error("Erro de SMTP: {0}")]
    Smtp(#[from] SmtpError),

    #[error("Falha ao montar a mensagem: {0}")]
    MessageBuild(#[from] lettre::error::Error),

    #[error("Endereço de e-mail inválido: {0}")]
    InvalidAddress(String),

    #[error("Erro HTTP no repasse: {0}")]
    Http(#[from] reqwest::Error),
}

// Configuração vinda do ambiente. Tudo opcional: sem SMTP ou sem chave
// de repasse, o canal correspondente vira no-op.
#[derive(Clone)]
pub struct NotifierConfig {
    pub smtp_host: Option<String>,
    pub smtp_port: u16,
    pub smtp_username: String,
    pub smtp_password: String,
    pub from_address: String,
    pub mailbox: Option<String>,
    pub relay_url: String,
    pub relay_access_key: Option<String>,
}

/// Dispara os dois efeitos colaterais do formulário de cotação:
/// e-mail para a caixa do admin e repasse para o serviço externo de
/// formulários. Ambos best-effort.
#[derive(Clone)]
pub struct Notifier {
    mailer: Option<AsyncSmtpTransport<Tokio1Executor>>,
    from_address: String,
    mailbox: Option<String>,
    http: reqwest::Client,
    relay_url: String,
    relay_access_key: Option<String>,
}

impl Notifier {
    pub fn new(config: NotifierConfig) -> Result<Self, SmtpError> {
        let mailer = match &config.smtp_host {
            Some(host) => {
                let credentials = Credentials::new(
                    config.smtp_username.clone(),
                    config.smtp_password.clone(),
                );
                Some(
                    AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)?
                        .port(config.smtp_port)
                        .credentials(credentials)
                        .build(),
                )
            }
            None => None,
        };

        Ok(Self {
            mailer,
            from_address: config.from_address,
            mailbox: config.mailbox,
            http: reqwest::Client::new(),
            relay_url: config.relay_url,
            relay_access_key: config.relay_access_key,
        })
    }

    /// Avisa a caixa do admin sobre uma nova cotação
    pub async fn send_quote_email(&self, quote: &QuoteRequestPayload) -> Result<(), NotifierError> {
        let (Some(mailer), Some(mailbox)) = (&self.mailer, &self.mailbox) else {
            tracing::debug!("SMTP não configurado; pulando e-mail de cotação.");
            return Ok(());
        };

        let subject = format!(
            "New Quote Request: {} - {}",
            quote.insurance_type, quote.name
        );

        let mut body = format!(
            "Name: {}\nPhone: {}\nEmail: {}\nInsurance Type: {}\n",
            quote.name,
            quote.phone,
            quote.email.as_deref().unwrap_or("N/A"),
            quote.insurance_type,
        );
        if let Some(vehicle) = &quote.vehicle_number {
            body.push_str(&format!("Vehicle Number: {}\n", vehicle));
        }
        if let Some(dob) = &quote.date_of_birth {
            body.push_str(&format!("Date of Birth: {}\n", dob));
        }
        body.push_str(&format!(
            "Message: {}\n",
            quote.message.as_deref().unwrap_or("No message provided")
        ));

        let email = Message::builder()
            .from(
                self.from_address
                    .parse()
                    .map_err(|_| NotifierError::InvalidAddress(self.from_address.clone()))?,
            )
            .to(mailbox
                .parse()
                .map_err(|_| NotifierError::InvalidAddress(mailbox.clone()))?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body)?;

        mailer.send(email).await?;
        Ok(())
    }

    /// Repassa a cotação para o endpoint externo de formulários
    pub async fn relay_quote(&self, quote: &QuoteRequestPayload) -> Result<(), NotifierError> {
        let Some(access_key) = &self.relay_access_key else {
            tracing::debug!("Chave de repasse não configurada; pulando relay.");
            return Ok(());
        };

        let payload = json!({
            "access_key": access_key,
            "subject": format!("New Insurance Quote Request - {}", quote.insurance_type),
            "from_name": "GK Insurance Website",
            "name": quote.name,
            "phone": quote.phone,
            "email": quote.email,
            "insurance_type": quote.insurance_type,
            "vehicle_number": quote.vehicle_number,
            "message": quote.message,
        });

        self.http
            .post(&self.relay_url)
            .json(&payload)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}
