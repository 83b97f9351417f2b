// src/services/contract_service.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    common::{
        error::AppError,
        handoff::{HandoffCache, HandoffKey},
    },
    db::{AdsRepository, ContractRepository, LeadRepository, ProductRepository},
    models::{
        ads::Ads,
        contract::{Contract, ContractCreatePrefill},
        lead::Lead,
    },
    services::checks,
};

#[derive(Clone)]
pub struct ContractService {
    repo: ContractRepository,
    lead_repo: LeadRepository,
    ads_repo: AdsRepository,
    product_repo: ProductRepository,
}

impl ContractService {
    pub fn new(
        repo: ContractRepository,
        lead_repo: LeadRepository,
        ads_repo: AdsRepository,
        product_repo: ProductRepository,
    ) -> Self {
        Self { repo, lead_repo, ads_repo, product_repo }
    }

    pub async fn list(&self) -> Result<Vec<Contract>, AppError> {
        self.repo.list().await
    }

    pub async fn get(&self, id: Uuid) -> Result<Contract, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound("Contrato"))
    }

    /// Pré-preenche o formulário a partir de um lead repassado: o lead,
    /// a campanha dele e o serviço da campanha. Cada elo ausente apenas
    /// deixa o campo vazio.
    pub async fn prefill_create_form(
        &self,
        handoff: &HandoffCache,
        user_id: Uuid,
    ) -> Result<ContractCreatePrefill, AppError> {
        let mut prefill = ContractCreatePrefill { lead: None, ads: None, product: None };

        if let Some(lead_id) = handoff.consume(user_id, HandoffKey::LeadId) {
            prefill.lead = self.lead_repo.find_by_id(lead_id).await?;
            if let Some(lead) = &prefill.lead {
                prefill.ads = self.ads_repo.find_by_id(lead.ads_id).await?;
            }
            if let Some(ads) = &prefill.ads {
                prefill.product = self.product_repo.find_by_id(ads.product_id).await?;
            }
        }

        Ok(prefill)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        name: &str,
        lead_id: Uuid,
        ads_id: Uuid,
        product_id: Uuid,
        document: Option<&str>,
        comment: Option<&str>,
        cost: Decimal,
        conclusion_day: NaiveDate,
        start_day: NaiveDate,
        end_day: NaiveDate,
    ) -> Result<Contract, AppError> {
        let (lead, ads) = self.load_links(lead_id, ads_id).await?;

        // Contrato novo só com lead ainda não convertido, como no
        // formulário original.
        checks::check_lead_unconverted(&lead)?;
        checks::check_ads_matches_lead(&lead, &ads)?;
        checks::check_product_matches_ads(&ads, product_id)?;
        checks::check_end_after_start(start_day, end_day)?;

        self.repo
            .create(
                name, lead_id, ads_id, product_id, document, comment, cost,
                conclusion_day, start_day, end_day,
            )
            .await
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        id: Uuid,
        name: &str,
        lead_id: Uuid,
        ads_id: Uuid,
        product_id: Uuid,
        document: Option<&str>,
        comment: Option<&str>,
        cost: Decimal,
        conclusion_day: NaiveDate,
        start_day: NaiveDate,
        end_day: NaiveDate,
    ) -> Result<Contract, AppError> {
        // Na edição o lead já pode estar convertido; o resto das
        // invariantes continua valendo.
        let (lead, ads) = self.load_links(lead_id, ads_id).await?;
        checks::check_ads_matches_lead(&lead, &ads)?;
        checks::check_product_matches_ads(&ads, product_id)?;
        checks::check_end_after_start(start_day, end_day)?;

        self.repo
            .update(
                id, name, lead_id, ads_id, product_id, document, comment, cost,
                conclusion_day, start_day, end_day,
            )
            .await?
            .ok_or(AppError::NotFound("Contrato"))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let deleted = self.repo.delete(id).await?;
        if deleted == 0 {
            return Err(AppError::NotFound("Contrato"));
        }
        Ok(())
    }

    async fn load_links(&self, lead_id: Uuid, ads_id: Uuid) -> Result<(Lead, Ads), AppError> {
        let lead = self
            .lead_repo
            .find_by_id(lead_id)
            .await?
            .ok_or(AppError::FieldError {
                field: "lead",
                message: "O cliente selecionado não existe.".into(),
            })?;
        let ads = self
            .ads_repo
            .find_by_id(ads_id)
            .await?
            .ok_or(AppError::FieldError {
                field: "ads",
                message: "A campanha selecionada não existe.".into(),
            })?;
        Ok((lead, ads))
    }
}
