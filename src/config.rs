// src/config.rs

use sqlx::{postgres::PgPoolOptions, PgPool};
use std::{env, time::Duration};

use crate::{
    db::{
        AdminRepository, CompanyRepository, CustomerRepository, LeadRepository, PolicyRepository,
    },
    services::{
        auth::AuthService,
        company_service::CompanyService,
        customer_service::CustomerService,
        dashboard_service::{DashboardService, DistributionScope},
        lead_service::LeadService,
        notifier::{Notifier, NotifierConfig},
        policy_service::PolicyService,
    },
};

// O estado compartilhado que será acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub jwt_secret: String,

    pub auth_service: AuthService,
    pub lead_service: LeadService,
    pub customer_service: CustomerService,
    pub company_service: CompanyService,
    pub policy_service: PolicyService,
    pub dashboard_service: DashboardService,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL deve ser definida");
        let jwt_secret = env::var("JWT_SECRET").expect("JWT_SECRET deve ser definido");

        // Conecta ao banco de dados, usando '?' para propagar erros
        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        let notifier = Notifier::new(notifier_config_from_env())?;

        // As revisões antigas do painel divergiam aqui; fica configurável
        let distribution_scope = match env::var("DASHBOARD_DISTRIBUTION_SCOPE").as_deref() {
            Ok("all") => DistributionScope::AllPolicies,
            _ => DistributionScope::ActiveOnly,
        };

        // --- Monta o gráfico de dependências ---
        let admin_repo = AdminRepository::new(db_pool.clone());
        let lead_repo = LeadRepository::new(db_pool.clone());
        let customer_repo = CustomerRepository::new(db_pool.clone());
        let company_repo = CompanyRepository::new(db_pool.clone());
        let policy_repo = PolicyRepository::new(db_pool.clone());

        let auth_service = AuthService::new(admin_repo, jwt_secret.clone());
        let lead_service = LeadService::new(lead_repo.clone(), notifier);
        let customer_service = CustomerService::new(customer_repo.clone(), policy_repo.clone());
        let company_service = CompanyService::new(company_repo.clone(), policy_repo.clone());
        let policy_service = PolicyService::new(
            policy_repo.clone(),
            customer_repo.clone(),
            company_repo.clone(),
        );
        let dashboard_service = DashboardService::new(
            lead_repo,
            customer_repo,
            company_repo,
            policy_repo,
            distribution_scope,
        );

        Ok(Self {
            db_pool,
            jwt_secret,
            auth_service,
            lead_service,
            customer_service,
            company_service,
            policy_service,
            dashboard_service,
        })
    }
}

// Tudo opcional: sem SMTP_HOST o e-mail vira no-op, sem RELAY_ACCESS_KEY
// o repasse vira no-op. O formulário continua funcionando só com o banco.
fn notifier_config_from_env() -> NotifierConfig {
    NotifierConfig {
        smtp_host: env::var("SMTP_HOST").ok(),
        smtp_port: env::var("SMTP_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(587),
        smtp_username: env::var("SMTP_USERNAME").unwrap_or_default(),
        smtp_password: env::var("SMTP_PASSWORD").unwrap_or_default(),
        from_address: env::var("QUOTE_FROM_ADDRESS")
            .unwrap_or_else(|_| "no-reply@gkinsurance.in".to_string()),
        mailbox: env::var("QUOTE_MAILBOX").ok(),
        relay_url: env::var("RELAY_ENDPOINT")
            .unwrap_or_else(|_| "https://api.web3forms.com/submit".to_string()),
        relay_access_key: env::var("RELAY_ACCESS_KEY").ok(),
    }
}
