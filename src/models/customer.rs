// src/models/customer.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Cliente ativo: um lead convertido, com contrato opcional.
///
/// Invariantes: `ads_id == lead.ads_id`; se `contract_id` estiver
/// preenchido, o contrato aponta para o mesmo lead e a mesma campanha.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: Uuid,
    pub lead_id: Uuid,
    pub ads_id: Uuid,
    pub contract_id: Option<Uuid>,
    pub comment: Option<String>,
}

/// Pré-preenchimento do formulário de cliente (Lead -> Customer).
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerCreatePrefill {
    pub lead: Option<crate::models::lead::Lead>,
    pub ads: Option<crate::models::ads::Ads>,
}
