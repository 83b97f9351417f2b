pub mod ads_service;
pub mod auth;
pub mod checks;
pub mod contract_service;
pub mod customer_service;
pub mod lead_service;
pub mod product_service;

pub use ads_service::AdsService;
pub use auth::AuthService;
pub use contract_service::ContractService;
pub use customer_service::CustomerService;
pub use lead_service::LeadService;
pub use product_service::ProductService;
