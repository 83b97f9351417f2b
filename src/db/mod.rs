pub mod ads_repo;
pub mod contract_repo;
pub mod customer_repo;
pub mod lead_repo;
pub mod product_repo;
pub mod rbac_repo;
pub mod user_repo;

pub use ads_repo::AdsRepository;
pub use contract_repo::ContractRepository;
pub use customer_repo::CustomerRepository;
pub use lead_repo::LeadRepository;
pub use product_repo::ProductRepository;
pub use rbac_repo::RbacRepository;
pub use user_repo::UserRepository;
