// src/main.rs

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

// Declaração dos nossos módulos
mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod middleware;
mod models;
mod services;

use crate::config::AppState;
use crate::middleware::auth::auth_guard;

#[tokio::main]
async fn main() {
    // Inicializa o logger
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    // Roda as migrações do SQLx na inicialização
    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("Falha ao rodar as migrações do banco de dados.");

    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    // Seed explícito e idempotente das seguradoras parceiras
    db::seed::run(&app_state.db_pool)
        .await
        .expect("Falha ao aplicar o seed inicial.");

    // Rotas públicas: formulário de cotação, vitrine de parceiras e auth
    let public_routes = Router::new()
        .route("/quotes", post(handlers::quotes::submit_quote))
        .route("/partners", get(handlers::companies::list_partners))
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login));

    // Tudo abaixo exige Bearer token de admin
    let admin_routes = Router::new()
        .route("/auth/me", get(handlers::auth::get_me))
        .route("/leads", get(handlers::leads::list_leads))
        .route(
            "/leads/{id}",
            get(handlers::leads::get_lead)
                .put(handlers::leads::update_lead)
                .delete(handlers::leads::delete_lead),
        )
        .route(
            "/customers",
            get(handlers::customers::list_customers).post(handlers::customers::create_customer),
        )
        .route(
            "/customers/{id}",
            get(handlers::customers::get_customer)
                .put(handlers::customers::update_customer)
                .delete(handlers::customers::delete_customer),
        )
        .route(
            "/customers/{id}/policies",
            get(handlers::customers::list_customer_policies),
        )
        .route(
            "/companies",
            get(handlers::companies::list_companies).post(handlers::companies::create_company),
        )
        .route(
            "/companies/{id}",
            get(handlers::companies::get_company)
                .put(handlers::companies::update_company)
                .delete(handlers::companies::delete_company),
        )
        .route(
            "/policies",
            get(handlers::policies::list_policies).post(handlers::policies::create_policy),
        )
        .route(
            "/policies/{id}",
            get(handlers::policies::get_policy)
                .put(handlers::policies::update_policy)
                .delete(handlers::policies::delete_policy),
        )
        .route("/dashboard/stats", get(handlers::dashboard::get_stats))
        .route("/renewals", get(handlers::dashboard::list_renewals))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    // Combina tudo no router principal
    let app = Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api", public_routes)
        .nest("/api", admin_routes)
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", docs::ApiDoc::openapi()),
        )
        .with_state(app_state);

    // Inicia o servidor
    let addr = "0.0.0.0:3000";
    let listener = TcpListener::bind(addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr().unwrap());
    axum::serve(listener, app)
        .await
        .expect("Erro no servidor Axum");
}
