// src/db/seed.rs

use sqlx::PgPool;

use crate::common::error::AppError;

// Seguradoras parceiras exibidas na vitrine do site.
// (nome, categoria, logo)
const PARTNER_COMPANIES: &[(&str, &str, &str)] = &[
    ("Bajaj Allianz", "general", "/logos/bajaj.png"),
    ("Tata AIG", "general", "/logos/tata.png"),
    ("ICICI Lombard", "general", "/logos/icici.png"),
    ("Digit", "general", "/logos/digit.png"),
    ("Liberty", "general", "/logos/liberty.png"),
    ("Star Health", "health", "/logos/star.png"),
    ("LIC", "life", "/logos/lic.png"),
];

/// Seed explícito e idempotente, executado uma única vez no bootstrap.
/// ON CONFLICT DO NOTHING: rodar de novo não duplica nem sobrescreve
/// edições feitas pelo admin.
pub async fn run(pool: &PgPool) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;

    for (name, category, logo_url) in PARTNER_COMPANIES {
        sqlx::query(
            r#"
            INSERT INTO insurance_companies (name, category, logo_url, is_active)
            VALUES ($1, $2::company_category, $3, TRUE)
            ON CONFLICT (name) DO NOTHING
            "#,
        )
        .bind(*name)
        .bind(*category)
        .bind(*logo_url)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    tracing::info!("🌱 Seed de seguradoras parceiras aplicado.");
    Ok(())
}
