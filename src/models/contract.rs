// src/models/contract.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Contrato fechado com um lead.
///
/// Invariantes (garantidas pelo service antes de salvar):
/// - `end_day >= start_day`;
/// - `product_id` é o mesmo serviço da campanha (`ads.product_id`);
/// - `ads_id` é a mesma campanha do lead (`lead.ads_id`).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    pub id: Uuid,
    pub name: String,
    pub lead_id: Uuid,
    pub ads_id: Uuid,
    pub product_id: Uuid,

    /// Referência ao scan do contrato (caminho do arquivo), se houver.
    pub document: Option<String>,
    pub comment: Option<String>,

    #[schema(value_type = f64, example = 1500.0)]
    pub cost: Decimal,

    #[schema(value_type = String, format = Date)]
    pub conclusion_day: NaiveDate,
    #[schema(value_type = String, format = Date)]
    pub start_day: NaiveDate,
    #[schema(value_type = String, format = Date)]
    pub end_day: NaiveDate,
}

/// Pré-preenchimento do formulário de contrato, montado a partir do
/// slot de repasse (Lead -> Contract): o lead, sua campanha e o serviço
/// da campanha.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContractCreatePrefill {
    pub lead: Option<crate::models::lead::Lead>,
    pub ads: Option<crate::models::ads::Ads>,
    pub product: Option<crate::models::product::Product>,
}
