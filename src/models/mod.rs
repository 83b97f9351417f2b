pub mod ads;
pub mod auth;
pub mod contract;
pub mod customer;
pub mod lead;
pub mod product;
