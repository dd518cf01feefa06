// src/services/dashboard_service.rs
//
// O agregador do painel. A leitura acontece numa transação (snapshot
// consistente das quatro coleções); o cálculo em si é função pura sobre
// as coleções em memória, com o "hoje" passado explicitamente.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::{Acquire, Executor, Postgres};

use crate::{
    common::error::AppError,
    db::{CompanyRepository, CustomerRepository, LeadRepository, PolicyRepository},
    models::{
        company::InsuranceCompany,
        customer::Customer,
        dashboard::{
            DashboardData, DashboardStats, DistributionEntry, MonthlyTrendEntry, RenewalEntry,
            RenewalRange, UpcomingRenewal,
        },
        lead::Lead,
        policy::{Policy, PolicyStatus},
    },
};

// Janela padrão de "vencendo em breve" do dashboard
const EXPIRING_WINDOW_DAYS: i64 = 30;

// Tamanho das listas resumidas dos cards (leads recentes e renovações)
const DASHBOARD_TOP_N: usize = 5;

const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

// As revisões do painel divergiam entre distribuir todas as apólices ou
// só as ativas. Fica como política configurável, com ativas por padrão.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistributionScope {
    #[default]
    ActiveOnly,
    AllPolicies,
}

/// Dias até o vencimento. Datas são dias inteiros, então a subtração já
/// é o teto da diferença; negativo significa apólice vencida.
pub fn days_remaining(end_date: NaiveDate, today: NaiveDate) -> i64 {
    (end_date - today).num_days()
}

// Agrupa por nome preservando a ordem de chegada nos empates: o sort
// por contagem é estável, então basta não reordenar antes dele.
fn count_distribution<I>(names: I) -> Vec<DistributionEntry>
where
    I: IntoIterator<Item = String>,
{
    let mut entries: Vec<DistributionEntry> = Vec::new();
    for name in names {
        match entries.iter_mut().find(|e| e.name == name) {
            Some(entry) => entry.count += 1,
            None => entries.push(DistributionEntry { name, count: 1 }),
        }
    }
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries
}

fn premium_or_zero(policy: &Policy) -> Decimal {
    policy.premium_amount.unwrap_or(Decimal::ZERO)
}

/// Monta o snapshot completo do dashboard a partir das coleções.
pub fn build_dashboard(
    policies: &[Policy],
    customers: &[Customer],
    companies: &[InsuranceCompany],
    leads: &[Lead],
    today: NaiveDate,
    scope: DistributionScope,
) -> DashboardData {
    let active: Vec<&Policy> = policies
        .iter()
        .filter(|p| p.status == PolicyStatus::Active)
        .collect();

    // Soma de prêmios APENAS das ativas; prêmio ausente conta como zero
    let total_premium: Decimal = active.iter().map(|p| premium_or_zero(p)).sum();

    // Vencendo em breve: ativas com 0 <= dias <= 30 (inclusivo).
    // Dias negativos (já vencidas) ficam de fora mesmo se o status
    // ainda estiver 'active'.
    let expiring_soon: Vec<&Policy> = active
        .iter()
        .filter(|p| {
            let days = days_remaining(p.end_date, today);
            (0..=EXPIRING_WINDOW_DAYS).contains(&days)
        })
        .copied()
        .collect();

    let distribution_base: Vec<&Policy> = match scope {
        DistributionScope::ActiveOnly => active.clone(),
        DistributionScope::AllPolicies => policies.iter().collect(),
    };

    // Mapas de nomes para os joins em memória
    let company_names: HashMap<_, _> = companies.iter().map(|c| (c.id, c.name.as_str())).collect();
    let customer_names: HashMap<_, _> = customers.iter().map(|c| (c.id, c.name.as_str())).collect();

    let product_distribution =
        count_distribution(distribution_base.iter().map(|p| p.product_type.clone()));

    // Resolve o nome da seguradora; id sem correspondência vira "Unknown"
    let company_distribution = count_distribution(distribution_base.iter().map(|p| {
        company_names
            .get(&p.insurance_company_id)
            .map(|name| (*name).to_string())
            .unwrap_or_else(|| "Unknown".to_string())
    }));

    // Tendência mensal do ano corrente (todas as apólices, qualquer
    // status): contagem e prêmio somado por mês de início. Meses sem
    // apólices não entram; a saída segue Jan -> Dec.
    let mut month_buckets: [(usize, Decimal); 12] = [(0, Decimal::ZERO); 12];
    for policy in policies {
        if policy.start_date.year() != today.year() {
            continue;
        }
        let month = policy.start_date.month0() as usize;
        month_buckets[month].0 += 1;
        month_buckets[month].1 += premium_or_zero(policy);
    }
    let monthly_trends: Vec<MonthlyTrendEntry> = month_buckets
        .iter()
        .enumerate()
        .filter(|(_, (count, _))| *count > 0)
        .map(|(month, (count, premium))| MonthlyTrendEntry {
            month: MONTH_LABELS[month].to_string(),
            count: *count,
            premium: *premium,
        })
        .collect();

    // Os 5 leads mais recentes
    let mut recent_leads: Vec<Lead> = leads.to_vec();
    recent_leads.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    recent_leads.truncate(DASHBOARD_TOP_N);

    // Renovações mais urgentes primeiro, limitadas ao card do dashboard
    let mut upcoming_renewals: Vec<UpcomingRenewal> = expiring_soon
        .iter()
        .map(|p| UpcomingRenewal {
            policy_id: p.id,
            customer_name: customer_names
                .get(&p.customer_id)
                .map(|name| (*name).to_string())
                .unwrap_or_else(|| "Unknown".to_string()),
            product_type: p.product_type.clone(),
            days_remaining: days_remaining(p.end_date, today),
        })
        .collect();
    upcoming_renewals.sort_by_key(|r| r.days_remaining);
    upcoming_renewals.truncate(DASHBOARD_TOP_N);

    DashboardData {
        stats: DashboardStats {
            total_customers: customers.len(),
            active_policies: active.len(),
            expiring_soon: expiring_soon.len(),
            total_premium,
            product_distribution,
            company_distribution,
            monthly_trends,
        },
        recent_leads,
        upcoming_renewals,
    }
}

/// A página de renovações: todas as apólices enriquecidas com nomes e
/// prazo, filtradas pela faixa pedida. Diferente do card do dashboard,
/// aqui o filtro é só pela data (uma apólice já marcada como vencida
/// continua aparecendo na faixa "expired"), e sem limite de tamanho.
pub fn renewal_entries(
    policies: &[Policy],
    customers: &[Customer],
    companies: &[InsuranceCompany],
    today: NaiveDate,
    range: RenewalRange,
) -> Vec<RenewalEntry> {
    let customer_names: HashMap<_, _> = customers.iter().map(|c| (c.id, c.name.as_str())).collect();
    let company_names: HashMap<_, _> = companies.iter().map(|c| (c.id, c.name.as_str())).collect();

    let mut entries: Vec<RenewalEntry> = policies
        .iter()
        .filter_map(|p| {
            let days = days_remaining(p.end_date, today);
            if !range.contains(days) {
                return None;
            }
            Some(RenewalEntry {
                policy_id: p.id,
                policy_number: p.policy_number.clone(),
                customer_name: customer_names
                    .get(&p.customer_id)
                    .map(|name| (*name).to_string())
                    .unwrap_or_else(|| "Unknown".to_string()),
                company_name: company_names
                    .get(&p.insurance_company_id)
                    .map(|name| (*name).to_string())
                    .unwrap_or_else(|| "Unknown".to_string()),
                product_type: p.product_type.clone(),
                premium_amount: p.premium_amount,
                end_date: p.end_date,
                status: p.status,
                days_remaining: days,
            })
        })
        .collect();

    entries.sort_by_key(|e| e.days_remaining);
    entries
}

#[derive(Clone)]
pub struct DashboardService {
    lead_repo: LeadRepository,
    customer_repo: CustomerRepository,
    company_repo: CompanyRepository,
    policy_repo: PolicyRepository,
    distribution_scope: DistributionScope,
}

impl DashboardService {
    pub fn new(
        lead_repo: LeadRepository,
        customer_repo: CustomerRepository,
        company_repo: CompanyRepository,
        policy_repo: PolicyRepository,
        distribution_scope: DistributionScope,
    ) -> Self {
        Self {
            lead_repo,
            customer_repo,
            company_repo,
            policy_repo,
            distribution_scope,
        }
    }

    pub async fn get_dashboard<'e, E>(&self, executor: E) -> Result<DashboardData, AppError>
    where
        E: Executor<'e, Database = Postgres> + Acquire<'e, Database = Postgres>,
    {
        // Snapshot consistente das quatro coleções
        let mut tx = executor.begin().await?;

        let policies = self.policy_repo.list_all(&mut *tx).await?;
        let customers = self.customer_repo.list_all(&mut *tx).await?;
        let companies = self.company_repo.list_all(&mut *tx, false).await?;
        let leads = self.lead_repo.list_all(&mut *tx).await?;

        tx.commit().await?;

        let today = Utc::now().date_naive();

        Ok(build_dashboard(
            &policies,
            &customers,
            &companies,
            &leads,
            today,
            self.distribution_scope,
        ))
    }

    pub async fn get_renewals<'e, E>(
        &self,
        executor: E,
        range: RenewalRange,
    ) -> Result<Vec<RenewalEntry>, AppError>
    where
        E: Executor<'e, Database = Postgres> + Acquire<'e, Database = Postgres>,
    {
        let mut tx = executor.begin().await?;

        let policies = self.policy_repo.list_all(&mut *tx).await?;
        let customers = self.customer_repo.list_all(&mut *tx).await?;
        let companies = self.company_repo.list_all(&mut *tx, false).await?;

        tx.commit().await?;

        let today = Utc::now().date_naive();

        Ok(renewal_entries(
            &policies, &customers, &companies, today, range,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;
    use crate::models::company::CompanyCategory;
    use crate::models::lead::LeadStatus;

    fn hoje() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn policy(
        product: &str,
        company_id: Uuid,
        customer_id: Uuid,
        premium: Option<i64>,
        start: NaiveDate,
        end: NaiveDate,
        status: PolicyStatus,
    ) -> Policy {
        Policy {
            id: Uuid::new_v4(),
            customer_id,
            insurance_company_id: company_id,
            product_type: product.to_string(),
            policy_number: format!("POL-{}", Uuid::new_v4()),
            premium_amount: premium.map(Decimal::from),
            start_date: start,
            end_date: end,
            status,
            vehicle_number: None,
            notes: None,
            created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn customer(name: &str) -> Customer {
        Customer {
            id: Uuid::new_v4(),
            name: name.to_string(),
            phone: "9876543210".to_string(),
            email: None,
            address: None,
            notes: None,
            created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn company(name: &str) -> InsuranceCompany {
        InsuranceCompany {
            id: Uuid::new_v4(),
            name: name.to_string(),
            category: CompanyCategory::General,
            logo_url: None,
            is_active: true,
            created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn lead(name: &str, day: u32) -> Lead {
        Lead {
            id: Uuid::new_v4(),
            name: name.to_string(),
            phone: "9999999999".to_string(),
            email: None,
            insurance_type: "Car Insurance".to_string(),
            vehicle_number: None,
            message: None,
            status: LeadStatus::New,
            source: "website".to_string(),
            created_at: Utc.with_ymd_and_hms(2025, 6, day, 10, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2025, 6, day, 10, 0, 0).unwrap(),
        }
    }

    fn dias(n: i64) -> NaiveDate {
        hoje() + chrono::Duration::days(n)
    }

    #[test]
    fn premio_total_soma_apenas_apolices_ativas() {
        let co = company("ICICI Lombard");
        let cu = customer("Rajesh Kumar");
        let inicio = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();

        let policies = vec![
            policy("Car Insurance", co.id, cu.id, Some(25000), inicio, dias(100), PolicyStatus::Active),
            policy("Car Insurance", co.id, cu.id, Some(18000), inicio, dias(100), PolicyStatus::Active),
            // Canceladas e vencidas não entram na soma
            policy("Car Insurance", co.id, cu.id, Some(99999), inicio, dias(100), PolicyStatus::Cancelled),
            policy("Car Insurance", co.id, cu.id, Some(55555), inicio, dias(-10), PolicyStatus::Expired),
            // Prêmio ausente conta como zero, sem panic
            policy("Car Insurance", co.id, cu.id, None, inicio, dias(100), PolicyStatus::Active),
        ];

        let data = build_dashboard(
            &policies,
            &[cu],
            &[co],
            &[],
            hoje(),
            DistributionScope::ActiveOnly,
        );

        assert_eq!(data.stats.total_premium, Decimal::from(43000));
        assert_eq!(data.stats.active_policies, 3);
    }

    #[test]
    fn vencendo_em_breve_e_janela_inclusiva_de_0_a_30_dias() {
        let co = company("Star Health");
        let cu = customer("Priya Sharma");
        let inicio = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();

        let policies = vec![
            policy("Health Insurance", co.id, cu.id, Some(1), inicio, dias(0), PolicyStatus::Active),
            policy("Health Insurance", co.id, cu.id, Some(1), inicio, dias(5), PolicyStatus::Active),
            policy("Health Insurance", co.id, cu.id, Some(1), inicio, dias(30), PolicyStatus::Active),
            // Fora da janela
            policy("Health Insurance", co.id, cu.id, Some(1), inicio, dias(31), PolicyStatus::Active),
            // Já vencida mas ainda 'active': dias negativos ficam de fora
            policy("Health Insurance", co.id, cu.id, Some(1), inicio, dias(-3), PolicyStatus::Active),
            // Dentro da janela mas não ativa
            policy("Health Insurance", co.id, cu.id, Some(1), inicio, dias(5), PolicyStatus::Cancelled),
        ];

        let data = build_dashboard(
            &policies,
            &[cu],
            &[co],
            &[],
            hoje(),
            DistributionScope::ActiveOnly,
        );

        assert_eq!(data.stats.expiring_soon, 3);
    }

    #[test]
    fn distribuicoes_particionam_as_apolices_ativas() {
        let co_a = company("ICICI Lombard");
        let co_b = company("Star Health");
        let cu = customer("Amit Patel");
        let inicio = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();

        let policies = vec![
            policy("Car Insurance", co_a.id, cu.id, Some(1), inicio, dias(100), PolicyStatus::Active),
            policy("Car Insurance", co_a.id, cu.id, Some(1), inicio, dias(100), PolicyStatus::Active),
            policy("Health Insurance", co_b.id, cu.id, Some(1), inicio, dias(100), PolicyStatus::Active),
            policy("Life Insurance", co_b.id, cu.id, Some(1), inicio, dias(100), PolicyStatus::Renewed),
        ];

        let data = build_dashboard(
            &policies,
            &[cu],
            &[co_a, co_b],
            &[],
            hoje(),
            DistributionScope::ActiveOnly,
        );

        let product_total: usize = data.stats.product_distribution.iter().map(|e| e.count).sum();
        let company_total: usize = data.stats.company_distribution.iter().map(|e| e.count).sum();
        assert_eq!(product_total, data.stats.active_policies);
        assert_eq!(company_total, data.stats.active_policies);

        // Mais frequente primeiro
        assert_eq!(data.stats.product_distribution[0].name, "Car Insurance");
        assert_eq!(data.stats.product_distribution[0].count, 2);
    }

    #[test]
    fn empates_na_distribuicao_mantem_ordem_de_chegada() {
        let co = company("Digit");
        let cu = customer("Sneha Reddy");
        let inicio = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();

        let policies = vec![
            policy("Two-Wheeler Insurance", co.id, cu.id, Some(1), inicio, dias(100), PolicyStatus::Active),
            policy("Travel Insurance", co.id, cu.id, Some(1), inicio, dias(100), PolicyStatus::Active),
            policy("Shopkeeper Insurance", co.id, cu.id, Some(1), inicio, dias(100), PolicyStatus::Active),
        ];

        let data = build_dashboard(
            &policies,
            &[cu],
            &[co],
            &[],
            hoje(),
            DistributionScope::ActiveOnly,
        );

        let names: Vec<&str> = data
            .stats
            .product_distribution
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec!["Two-Wheeler Insurance", "Travel Insurance", "Shopkeeper Insurance"]
        );
    }

    #[test]
    fn seguradora_desconhecida_vira_rotulo_unknown() {
        let cu = customer("Rajesh Kumar");
        let inicio = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();

        // Nenhuma seguradora cadastrada resolve esse id
        let policies = vec![policy(
            "Car Insurance",
            Uuid::new_v4(),
            cu.id,
            Some(1),
            inicio,
            dias(100),
            PolicyStatus::Active,
        )];

        let data = build_dashboard(
            &policies,
            &[cu],
            &[],
            &[],
            hoje(),
            DistributionScope::ActiveOnly,
        );

        assert_eq!(data.stats.company_distribution[0].name, "Unknown");
    }

    #[test]
    fn escopo_all_policies_inclui_nao_ativas_na_distribuicao() {
        let co = company("LIC");
        let cu = customer("Sneha Reddy");
        let inicio = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();

        let policies = vec![
            policy("Life Insurance", co.id, cu.id, Some(1), inicio, dias(100), PolicyStatus::Active),
            policy("Life Insurance", co.id, cu.id, Some(1), inicio, dias(100), PolicyStatus::Cancelled),
        ];

        let ativas = build_dashboard(&policies, &[cu.clone()], &[co.clone()], &[], hoje(), DistributionScope::ActiveOnly);
        assert_eq!(ativas.stats.product_distribution[0].count, 1);

        let todas = build_dashboard(&policies, &[cu], &[co], &[], hoje(), DistributionScope::AllPolicies);
        assert_eq!(todas.stats.product_distribution[0].count, 2);
    }

    #[test]
    fn tendencia_mensal_sem_zero_fill_e_em_ordem_cronologica() {
        let co = company("Tata AIG");
        let cu = customer("Amit Patel");

        let jan = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
        let mar = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
        let ano_passado = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();

        let policies = vec![
            policy("Car Insurance", co.id, cu.id, Some(1000), mar, dias(100), PolicyStatus::Active),
            policy("Car Insurance", co.id, cu.id, Some(2000), jan, dias(100), PolicyStatus::Active),
            policy("Car Insurance", co.id, cu.id, Some(3000), jan, dias(100), PolicyStatus::Expired),
            // Ano anterior não entra na tendência
            policy("Car Insurance", co.id, cu.id, Some(9000), ano_passado, dias(100), PolicyStatus::Active),
        ];

        let data = build_dashboard(
            &policies,
            &[cu],
            &[co],
            &[],
            hoje(),
            DistributionScope::ActiveOnly,
        );

        let trend = &data.stats.monthly_trends;
        assert_eq!(trend.len(), 2); // só Jan e Mar, sem Feb zerado
        assert_eq!(trend[0].month, "Jan");
        assert_eq!(trend[0].count, 2);
        assert_eq!(trend[0].premium, Decimal::from(5000));
        assert_eq!(trend[1].month, "Mar");
        assert_eq!(trend[1].count, 1);
    }

    #[test]
    fn leads_recentes_limitados_a_5_mais_novos_primeiro() {
        let leads: Vec<Lead> = (1..=8).map(|d| lead(&format!("Lead {}", d), d)).collect();

        let data = build_dashboard(&[], &[], &[], &leads, hoje(), DistributionScope::ActiveOnly);

        assert_eq!(data.recent_leads.len(), 5);
        assert_eq!(data.recent_leads[0].name, "Lead 8");
        assert_eq!(data.recent_leads[4].name, "Lead 4");
    }

    #[test]
    fn renovacoes_proximas_ordenadas_por_urgencia_e_limitadas_a_5() {
        let co = company("Bajaj Allianz");
        let clientes: Vec<Customer> =
            (0..7).map(|i| customer(&format!("Cliente {}", i))).collect();
        let inicio = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();

        let policies: Vec<Policy> = (0..7)
            .map(|i| {
                policy(
                    "Car Insurance",
                    co.id,
                    clientes[i].id,
                    Some(1),
                    inicio,
                    dias(25 - (i as i64 * 3)), // 25, 22, 19, 16, 13, 10, 7
                    PolicyStatus::Active,
                )
            })
            .collect();

        let data = build_dashboard(
            &policies,
            &clientes,
            &[co],
            &[],
            hoje(),
            DistributionScope::ActiveOnly,
        );

        assert_eq!(data.upcoming_renewals.len(), 5);
        assert_eq!(data.upcoming_renewals[0].days_remaining, 7);
        assert_eq!(data.upcoming_renewals[0].customer_name, "Cliente 6");
        assert_eq!(data.upcoming_renewals[4].days_remaining, 19);
    }

    #[test]
    fn renovacao_sem_cliente_resolvido_vira_unknown() {
        let co = company("Liberty");
        let inicio = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let policies = vec![policy(
            "Car Insurance",
            co.id,
            Uuid::new_v4(),
            Some(1),
            inicio,
            dias(5),
            PolicyStatus::Active,
        )];

        let data = build_dashboard(
            &policies,
            &[],
            &[co],
            &[],
            hoje(),
            DistributionScope::ActiveOnly,
        );

        assert_eq!(data.upcoming_renewals[0].customer_name, "Unknown");
        assert_eq!(data.upcoming_renewals[0].days_remaining, 5);
    }

    #[test]
    fn pagina_de_renovacoes_filtra_por_faixa_e_mostra_atraso() {
        let co = company("Bajaj General");
        let cu = customer("Amit Patel");
        let inicio = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();

        let policies = vec![
            policy("Two-Wheeler Insurance", co.id, cu.id, Some(3500), inicio, dias(-3), PolicyStatus::Expired),
            policy("Car Insurance", co.id, cu.id, Some(25000), inicio, dias(5), PolicyStatus::Active),
            policy("Life Insurance", co.id, cu.id, Some(50000), inicio, dias(45), PolicyStatus::Active),
        ];

        let expiradas = renewal_entries(&policies, &[cu.clone()], &[co.clone()], hoje(), RenewalRange::Expired);
        assert_eq!(expiradas.len(), 1);
        assert_eq!(expiradas[0].days_remaining, -3); // exibido como "3d em atraso"

        let semana = renewal_entries(&policies, &[cu.clone()], &[co.clone()], hoje(), RenewalRange::Week);
        assert_eq!(semana.len(), 1);
        assert_eq!(semana[0].days_remaining, 5);

        let mes = renewal_entries(&policies, &[cu.clone()], &[co.clone()], hoje(), RenewalRange::Month);
        assert_eq!(mes.len(), 1);

        // 45 dias só aparece na faixa de 60
        let sessenta = renewal_entries(&policies, &[cu], &[co], hoje(), RenewalRange::TwoMonths);
        assert_eq!(sessenta.len(), 2);
        assert_eq!(sessenta[0].days_remaining, 5);
        assert_eq!(sessenta[1].days_remaining, 45);
    }

    #[test]
    fn total_de_clientes_vem_da_colecao_de_clientes() {
        let clientes = vec![customer("A"), customer("B"), customer("C")];
        let data = build_dashboard(&[], &clientes, &[], &[], hoje(), DistributionScope::ActiveOnly);
        assert_eq!(data.stats.total_customers, 3);
    }

    #[test]
    fn dias_restantes_e_a_diferenca_exata_em_dias() {
        assert_eq!(days_remaining(dias(5), hoje()), 5);
        assert_eq!(days_remaining(dias(0), hoje()), 0);
        assert_eq!(days_remaining(dias(-3), hoje()), -3);
    }
}
