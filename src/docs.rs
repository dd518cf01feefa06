// src/docs.rs

use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Quotes ---
        handlers::quotes::submit_quote,

        // --- Auth ---
        handlers::auth::register,
        handlers::auth::login,
        handlers::auth::get_me,

        // --- Leads ---
        handlers::leads::list_leads,
        handlers::leads::get_lead,
        handlers::leads::update_lead,
        handlers::leads::delete_lead,

        // --- Customers ---
        handlers::customers::list_customers,
        handlers::customers::get_customer,
        handlers::customers::list_customer_policies,
        handlers::customers::create_customer,
        handlers::customers::update_customer,
        handlers::customers::delete_customer,

        // --- Companies ---
        handlers::companies::list_partners,
        handlers::companies::list_companies,
        handlers::companies::get_company,
        handlers::companies::create_company,
        handlers::companies::update_company,
        handlers::companies::delete_company,

        // --- Policies ---
        handlers::policies::list_policies,
        handlers::policies::get_policy,
        handlers::policies::create_policy,
        handlers::policies::update_policy,
        handlers::policies::delete_policy,

        // --- Dashboard ---
        handlers::dashboard::get_stats,
        handlers::dashboard::list_renewals,
    ),
    components(
        schemas(
            // --- Auth ---
            models::auth::Admin,
            models::auth::RegisterAdminPayload,
            models::auth::LoginAdminPayload,
            models::auth::AuthResponse,

            // --- Leads ---
            models::lead::LeadStatus,
            models::lead::Lead,
            models::lead::QuoteRequestPayload,
            models::lead::UpdateLeadPayload,

            // --- Customers ---
            models::customer::Customer,
            models::customer::CreateCustomerPayload,
            models::customer::UpdateCustomerPayload,

            // --- Companies ---
            models::company::CompanyCategory,
            models::company::InsuranceCompany,
            models::company::CreateCompanyPayload,
            models::company::UpdateCompanyPayload,

            // --- Policies ---
            models::policy::PolicyStatus,
            models::policy::Policy,
            models::policy::CreatePolicyPayload,
            models::policy::UpdatePolicyPayload,

            // --- Dashboard ---
            models::dashboard::DashboardStats,
            models::dashboard::DashboardData,
            models::dashboard::DistributionEntry,
            models::dashboard::MonthlyTrendEntry,
            models::dashboard::UpcomingRenewal,
            models::dashboard::RenewalEntry,
            models::dashboard::RenewalRange,
        )
    ),
    tags(
        (name = "Quotes", description = "Formulário público de cotação"),
        (name = "Auth", description = "Autenticação e Registro de Admins"),
        (name = "Leads", description = "Gestão de Leads"),
        (name = "Customers", description = "Gestão de Clientes"),
        (name = "Companies", description = "Seguradoras Parceiras"),
        (name = "Policies", description = "Gestão de Apólices"),
        (name = "Dashboard", description = "Indicadores e Renovações")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_jwt",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}
