// src/docs.rs

use utoipa::OpenApi;
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Auth ---
        handlers::auth::register,
        handlers::auth::login,
        handlers::auth::get_me,

        // --- Dashboard ---
        handlers::dashboard::index,

        // --- RBAC ---
        handlers::rbac::list_permissions,
        handlers::rbac::list_user_permissions,
        handlers::rbac::grant_user_permissions,

        // --- Products ---
        handlers::products::list_products,
        handlers::products::get_product,
        handlers::products::create_product,
        handlers::products::update_product,
        handlers::products::delete_product,
        handlers::products::transfer_to_ads,

        // --- Ads ---
        handlers::ads::list_ads,
        handlers::ads::create_ads_form,
        handlers::ads::get_ads,
        handlers::ads::create_ads,
        handlers::ads::update_ads,
        handlers::ads::delete_ads,
        handlers::ads::ads_statistic,

        // --- Leads ---
        handlers::leads::list_leads,
        handlers::leads::get_lead,
        handlers::leads::create_lead,
        handlers::leads::update_lead,
        handlers::leads::delete_lead,
        handlers::leads::transfer_to_active,
        handlers::leads::transfer_to_contract,

        // --- Contracts ---
        handlers::contracts::list_contracts,
        handlers::contracts::create_contract_form,
        handlers::contracts::get_contract,
        handlers::contracts::create_contract,
        handlers::contracts::update_contract,
        handlers::contracts::delete_contract,

        // --- Customers ---
        handlers::customers::list_customers,
        handlers::customers::create_customer_form,
        handlers::customers::get_customer,
        handlers::customers::create_customer,
        handlers::customers::update_customer,
        handlers::customers::delete_customer,
    ),
    components(
        schemas(
            models::auth::User,
            models::product::Product,
            models::ads::Ads,
            models::ads::AdsCreatePrefill,
            models::ads::AdsStatistic,
            models::ads::PromotionChannel,
            models::lead::Lead,
            models::contract::Contract,
            models::contract::ContractCreatePrefill,
            models::customer::Customer,
            models::customer::CustomerCreatePrefill,
            handlers::auth::RegisterPayload,
            handlers::auth::LoginPayload,
            handlers::auth::TokenResponse,
            handlers::dashboard::DashboardSummary,
            handlers::rbac::GrantPermissionsPayload,
            handlers::products::ProductPayload,
            handlers::ads::AdsPayload,
            handlers::leads::LeadPayload,
            handlers::contracts::ContractPayload,
            handlers::customers::CustomerPayload,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Registro e login"),
        (name = "Dashboard", description = "Visão geral"),
        (name = "RBAC", description = "Permissões por usuário"),
        (name = "Products", description = "Serviços oferecidos"),
        (name = "Ads", description = "Campanhas de divulgação"),
        (name = "Leads", description = "Potenciais clientes"),
        (name = "Contracts", description = "Contratos"),
        (name = "Customers", description = "Clientes ativos"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "api_jwt",
                SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
            );
        }
    }
}
