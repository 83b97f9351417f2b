// src/config.rs

use sqlx::{PgPool, postgres::PgPoolOptions};
use std::{env, sync::Arc, time::Duration};

use crate::{
    common::handoff::HandoffCache,
    db::{
        AdsRepository, ContractRepository, CustomerRepository, LeadRepository,
        ProductRepository, RbacRepository, UserRepository,
    },
    services::{
        AdsService, AuthService, ContractService, CustomerService, LeadService, ProductService,
    },
};

// O estado compartilhado, acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,

    pub auth_service: AuthService,
    pub product_service: ProductService,
    pub ads_service: AdsService,
    pub lead_service: LeadService,
    pub contract_service: ContractService,
    pub customer_service: CustomerService,

    // O guardião de permissões consulta o repositório direto.
    pub rbac_repo: RbacRepository,
    pub user_repo: UserRepository,

    /// Slot de repasse das ações de transferência (Product -> Ads,
    /// Lead -> Customer, Lead -> Contract).
    pub handoff: Arc<HandoffCache>,
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

        // --- Monta o gráfico de dependências ---
        let user_repo = UserRepository::new(db_pool.clone());
        let product_repo = ProductRepository::new(db_pool.clone());
        let ads_repo = AdsRepository::new(db_pool.clone());
        let lead_repo = LeadRepository::new(db_pool.clone());
        let contract_repo = ContractRepository::new(db_pool.clone());
        let customer_repo = CustomerRepository::new(db_pool.clone());
        let rbac_repo = RbacRepository::new(db_pool.clone());

        let auth_service = AuthService::new(user_repo.clone(), jwt_secret);
        let product_service = ProductService::new(product_repo.clone());
        let ads_service = AdsService::new(ads_repo.clone(), product_repo.clone());
        let lead_service = LeadService::new(lead_repo.clone(), ads_repo.clone());
        let contract_service = ContractService::new(
            contract_repo.clone(),
            lead_repo.clone(),
            ads_repo.clone(),
            product_repo,
        );
        let customer_service = CustomerService::new(
            customer_repo,
            lead_repo,
            ads_repo,
            contract_repo,
            db_pool.clone(),
        );

        Ok(Self {
            db_pool,
            auth_service,
            product_service,
            ads_service,
            lead_service,
            contract_service,
            customer_service,
            rbac_repo,
            user_repo,
            handoff: Arc::new(HandoffCache::default()),
        })
    }
}
