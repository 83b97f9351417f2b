// src/models/product.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Serviço (produto) oferecido aos clientes. Raiz da cadeia
/// Product <- Ads <- Lead <- Contract/Customer.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: String,

    // NUMERIC(10,2) no banco
    #[schema(value_type = f64, example = 100.0)]
    pub price: Decimal,
}
