// src/models/ads.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

// --- ENUMS ---

/// Canal de divulgação da campanha. Persistido como SMALLINT (1 a 8),
/// igual ao CHECK da migração.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[repr(i16)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PromotionChannel {
    SocialNetwork = 1,
    Website = 2,
    Internet = 3,
    OutdoorAd = 4,
    Magazine = 5,
    Tv = 6,
    Radio = 7,
    Other = 8,
}

impl Default for PromotionChannel {
    fn default() -> Self {
        PromotionChannel::Internet
    }
}

/// Campanha de divulgação de um serviço.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Ads {
    pub id: Uuid,
    pub name: String,
    pub product_id: Uuid,
    pub promotion_channel: PromotionChannel,
    pub description: String,

    #[schema(value_type = f64, example = 5000.0)]
    pub budget: Decimal,
}

/// Dados pré-preenchidos do formulário de criação de campanha, montados
/// a partir do slot de repasse (Product -> Ads). Tudo opcional: slot
/// expirado vira formulário vazio.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdsCreatePrefill {
    pub product: Option<crate::models::product::Product>,
}

/// Linha da página de estatísticas: desempenho de uma campanha.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdsStatistic {
    pub name: String,
    pub leads_count: i64,
    pub customers_count: i64,

    #[schema(value_type = f64)]
    pub budget: Decimal,

    /// Soma dos custos dos contratos fechados via esta campanha.
    #[schema(value_type = f64)]
    pub profit: Decimal,

    /// profit / budget; `None` quando a campanha não tem orçamento.
    pub profit_ratio: Option<f64>,
}
