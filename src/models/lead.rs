// src/models/lead.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Potencial cliente, vindo de uma campanha.
///
/// `to_active` nasce como `false` e vira `true` uma única vez, quando o
/// lead é convertido em Customer. Nenhum endpoint de edição mexe nele.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: String,
    pub ads_id: Uuid,
    pub comment: Option<String>,
    pub to_active: bool,
}
