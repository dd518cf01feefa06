pub mod auth;
pub mod company_service;
pub mod customer_service;
pub mod dashboard_service;
pub mod lead_service;
pub mod notifier;
pub mod policy_service;
