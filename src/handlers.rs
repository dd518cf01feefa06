pub mod auth;
pub mod companies;
pub mod customers;
pub mod dashboard;
pub mod leads;
pub mod policies;
pub mod quotes;
