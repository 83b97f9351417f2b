// src/main.rs

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, post},
};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

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

    // Rotas públicas de autenticação
    let auth_routes = Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login));

    let product_routes = Router::new()
        .route("/", get(handlers::products::list_products))
        .route("/new/", post(handlers::products::create_product))
        .route("/{id}/", get(handlers::products::get_product))
        .route("/{id}/edit/", post(handlers::products::update_product))
        .route("/{id}/delete/", post(handlers::products::delete_product))
        // Transferência: serviço -> nova campanha
        .route("/{id}/to_ads/", get(handlers::products::transfer_to_ads));

    let ads_routes = Router::new()
        .route("/", get(handlers::ads::list_ads))
        .route(
            "/new/",
            get(handlers::ads::create_ads_form).post(handlers::ads::create_ads),
        )
        .route("/statistic/", get(handlers::ads::ads_statistic))
        .route("/{id}/", get(handlers::ads::get_ads))
        .route("/{id}/edit/", post(handlers::ads::update_ads))
        .route("/{id}/delete/", post(handlers::ads::delete_ads));

    let lead_routes = Router::new()
        .route("/", get(handlers::leads::list_leads))
        .route("/new/", post(handlers::leads::create_lead))
        .route("/{id}/", get(handlers::leads::get_lead))
        .route("/{id}/edit/", post(handlers::leads::update_lead))
        .route("/{id}/delete/", post(handlers::leads::delete_lead))
        // Transferências: lead -> cliente e lead -> contrato
        .route("/{id}/to_active/", get(handlers::leads::transfer_to_active))
        .route("/{id}/to_contract/", get(handlers::leads::transfer_to_contract));

    let contract_routes = Router::new()
        .route("/", get(handlers::contracts::list_contracts))
        .route(
            "/new/",
            get(handlers::contracts::create_contract_form).post(handlers::contracts::create_contract),
        )
        .route("/{id}/", get(handlers::contracts::get_contract))
        .route("/{id}/edit/", post(handlers::contracts::update_contract))
        .route("/{id}/delete/", post(handlers::contracts::delete_contract));

    let customer_routes = Router::new()
        .route("/", get(handlers::customers::list_customers))
        .route(
            "/new/",
            get(handlers::customers::create_customer_form).post(handlers::customers::create_customer),
        )
        .route("/{id}/", get(handlers::customers::get_customer))
        .route("/{id}/edit/", post(handlers::customers::update_customer))
        .route("/{id}/delete/", post(handlers::customers::delete_customer));

    let rbac_routes = Router::new()
        .route("/permissions", get(handlers::rbac::list_permissions))
        .route(
            "/users/{id}/permissions",
            get(handlers::rbac::list_user_permissions).post(handlers::rbac::grant_user_permissions),
        );

    // Tudo que não é login/registro passa pelo auth_guard; a permissão
    // fina de cada ação fica com o extractor RequirePermission.
    let protected_routes = Router::new()
        .route("/", get(handlers::dashboard::index))
        .route("/auth/me", get(handlers::auth::get_me))
        .merge(rbac_routes)
        .nest("/products", product_routes)
        .nest("/ads", ads_routes)
        .nest("/leads", lead_routes)
        .nest("/contracts", contract_routes)
        .nest("/customers", customer_routes)
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    // Combina tudo no router principal
    let app = Router::new()
        .route("/health", get(|| async { "OK" }))
        .nest("/auth", auth_routes)
        .merge(protected_routes)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", docs::ApiDoc::openapi()))
        .with_state(app_state);

    // Inicia o servidor
    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr().unwrap());
    axum::serve(listener, app).await.expect("Erro no servidor Axum");
}
