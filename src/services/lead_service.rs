// src/services/lead_service.rs

use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{AdsRepository, LeadRepository},
    models::lead::Lead,
};

#[derive(Clone)]
pub struct LeadService {
    repo: LeadRepository,
    ads_repo: AdsRepository,
}

impl LeadService {
    pub fn new(repo: LeadRepository, ads_repo: AdsRepository) -> Self {
        Self { repo, ads_repo }
    }

    pub async fn list(&self) -> Result<Vec<Lead>, AppError> {
        self.repo.list_unconverted().await
    }

    pub async fn get(&self, id: Uuid) -> Result<Lead, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound("Lead"))
    }

    pub async fn create(
        &self,
        first_name: &str,
        last_name: &str,
        email: Option<&str>,
        phone: &str,
        ads_id: Uuid,
        comment: Option<&str>,
    ) -> Result<Lead, AppError> {
        self.check_ads(ads_id).await?;
        self.repo
            .create(first_name, last_name, email, phone, ads_id, comment)
            .await
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        id: Uuid,
        first_name: &str,
        last_name: &str,
        email: Option<&str>,
        phone: &str,
        ads_id: Uuid,
        comment: Option<&str>,
    ) -> Result<Lead, AppError> {
        self.check_ads(ads_id).await?;
        self.repo
            .update(id, first_name, last_name, email, phone, ads_id, comment)
            .await?
            .ok_or(AppError::NotFound("Lead"))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let deleted = self.repo.delete(id).await?;
        if deleted == 0 {
            return Err(AppError::NotFound("Lead"));
        }
        Ok(())
    }

    /// Total de leads, convertidos ou não (painel inicial).
    pub async fn count(&self) -> Result<i64, AppError> {
        self.repo.count().await
    }

    async fn check_ads(&self, ads_id: Uuid) -> Result<(), AppError> {
        self.ads_repo
            .find_by_id(ads_id)
            .await?
            .ok_or(AppError::FieldError {
                field: "ads",
                message: "A campanha selecionada não existe.".into(),
            })?;
        Ok(())
    }
}
