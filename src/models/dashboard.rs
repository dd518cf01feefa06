// src/models/dashboard.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::lead::Lead;
use crate::models::policy::PolicyStatus;

// 1. Os Cards do Topo
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_customers: usize,
    pub active_policies: usize,
    pub expiring_soon: usize,

    #[schema(value_type = f64)]
    pub total_premium: Decimal,

    pub product_distribution: Vec<DistributionEntry>,
    pub company_distribution: Vec<DistributionEntry>,
    pub monthly_trends: Vec<MonthlyTrendEntry>,
}

// Uma fatia de "apólices ativas por X" (produto ou seguradora)
#[derive(Debug, Clone, Serialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DistributionEntry {
    pub name: String,
    pub count: usize,
}

// Um mês com pelo menos uma apólice iniciada no ano corrente.
// Meses sem apólices não aparecem (sem zero-fill).
#[derive(Debug, Clone, Serialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTrendEntry {
    pub month: String,
    pub count: usize,
    #[schema(value_type = f64)]
    pub premium: Decimal,
}

// Entrada resumida de renovação para o widget do dashboard (top 5)
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingRenewal {
    pub policy_id: Uuid,
    pub customer_name: String,
    pub product_type: String,
    pub days_remaining: i64,
}

// Resposta completa do GET /api/dashboard/stats
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub stats: DashboardStats,
    pub recent_leads: Vec<Lead>,
    pub upcoming_renewals: Vec<UpcomingRenewal>,
}

// Linha da página de renovações (apólice enriquecida com nomes e prazo)
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RenewalEntry {
    pub policy_id: Uuid,
    pub policy_number: String,
    pub customer_name: String,
    pub company_name: String,
    pub product_type: String,
    #[schema(value_type = Option<f64>)]
    pub premium_amount: Option<Decimal>,
    #[schema(value_type = String, format = Date)]
    pub end_date: NaiveDate,
    pub status: PolicyStatus,
    pub days_remaining: i64,
}

// Faixas da página de renovações. Filtros independentes (e sobrepostos
// de propósito): "month" contém "week", e todos incluem o dia 0.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RenewalRange {
    Expired,
    Week,
    Month,
    TwoMonths,
}

impl RenewalRange {
    pub fn contains(self, days_remaining: i64) -> bool {
        match self {
            RenewalRange::Expired => days_remaining < 0,
            RenewalRange::Week => (0..=7).contains(&days_remaining),
            RenewalRange::Month => (0..=30).contains(&days_remaining),
            RenewalRange::TwoMonths => (0..=60).contains(&days_remaining),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apolice_a_5_dias_cai_em_week_month_e_twomonths() {
        assert!(RenewalRange::Week.contains(5));
        assert!(RenewalRange::Month.contains(5));
        assert!(RenewalRange::TwoMonths.contains(5));
        assert!(!RenewalRange::Expired.contains(5));
    }

    #[test]
    fn apolice_vencida_so_cai_em_expired() {
        assert!(RenewalRange::Expired.contains(-3));
        assert!(!RenewalRange::Week.contains(-3));
        assert!(!RenewalRange::Month.contains(-3));
        assert!(!RenewalRange::TwoMonths.contains(-3));
    }

    #[test]
    fn o_dia_zero_e_inclusivo_em_todas_as_faixas_futuras() {
        assert!(RenewalRange::Week.contains(0));
        assert!(RenewalRange::Month.contains(0));
        assert!(RenewalRange::TwoMonths.contains(0));
        assert!(!RenewalRange::Expired.contains(0));
    }

    #[test]
    fn limites_superiores_sao_inclusivos() {
        assert!(RenewalRange::Week.contains(7));
        assert!(!RenewalRange::Week.contains(8));
        assert!(RenewalRange::Month.contains(30));
        assert!(!RenewalRange::Month.contains(31));
        assert!(RenewalRange::TwoMonths.contains(60));
        assert!(!RenewalRange::TwoMonths.contains(61));
    }

    #[test]
    fn range_desserializa_em_lowercase() {
        let r: RenewalRange = serde_json::from_str("\"twomonths\"").unwrap();
        assert_eq!(r, RenewalRange::TwoMonths);
    }
}
