// src/services/ads_service.rs

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    common::{
        error::AppError,
        handoff::{HandoffCache, HandoffKey},
    },
    db::{AdsRepository, ProductRepository},
    models::ads::{Ads, AdsCreatePrefill, AdsStatistic, PromotionChannel},
};

#[derive(Clone)]
pub struct AdsService {
    repo: AdsRepository,
    product_repo: ProductRepository,
}

impl AdsService {
    pub fn new(repo: AdsRepository, product_repo: ProductRepository) -> Self {
        Self { repo, product_repo }
    }

    pub async fn list(&self) -> Result<Vec<Ads>, AppError> {
        self.repo.list().await
    }

    pub async fn get(&self, id: Uuid) -> Result<Ads, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound("Campanha"))
    }

    /// Monta o formulário de criação: se houver um product_id repassado
    /// (ação "criar campanha a partir do serviço"), pré-preenche; slot
    /// expirado ou ausente vira formulário vazio, sem erro.
    pub async fn prefill_create_form(
        &self,
        handoff: &HandoffCache,
        user_id: Uuid,
    ) -> Result<AdsCreatePrefill, AppError> {
        let product = match handoff.consume(user_id, HandoffKey::ProductId) {
            Some(product_id) => self.product_repo.find_by_id(product_id).await?,
            None => None,
        };
        Ok(AdsCreatePrefill { product })
    }

    pub async fn create(
        &self,
        name: &str,
        product_id: Uuid,
        promotion_channel: PromotionChannel,
        description: &str,
        budget: Decimal,
    ) -> Result<Ads, AppError> {
        self.check_product(product_id).await?;
        self.repo
            .create(name, product_id, promotion_channel, description, budget)
            .await
    }

    pub async fn update(
        &self,
        id: Uuid,
        name: &str,
        product_id: Uuid,
        promotion_channel: PromotionChannel,
        description: &str,
        budget: Decimal,
    ) -> Result<Ads, AppError> {
        self.check_product(product_id).await?;
        self.repo
            .update(id, name, product_id, promotion_channel, description, budget)
            .await?
            .ok_or(AppError::NotFound("Campanha"))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let deleted = self.repo.delete(id).await?;
        if deleted == 0 {
            return Err(AppError::NotFound("Campanha"));
        }
        Ok(())
    }

    pub async fn statistics(&self) -> Result<Vec<AdsStatistic>, AppError> {
        self.repo.statistics().await
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        self.repo.count().await
    }

    // FK inválida é erro de formulário, não 500.
    async fn check_product(&self, product_id: Uuid) -> Result<(), AppError> {
        self.product_repo
            .find_by_id(product_id)
            .await?
            .ok_or(AppError::FieldError {
                field: "product",
                message: "O serviço selecionado não existe.".into(),
            })?;
        Ok(())
    }
}
