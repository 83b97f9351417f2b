// src/services/customer_service.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::{
        error::AppError,
        handoff::{HandoffCache, HandoffKey},
    },
    db::{AdsRepository, ContractRepository, CustomerRepository, LeadRepository},
    models::{
        ads::Ads,
        customer::{Customer, CustomerCreatePrefill},
        lead::Lead,
    },
    services::checks,
};

#[derive(Clone)]
pub struct CustomerService {
    repo: CustomerRepository,
    lead_repo: LeadRepository,
    ads_repo: AdsRepository,
    contract_repo: ContractRepository,
    pool: PgPool,
}

impl CustomerService {
    pub fn new(
        repo: CustomerRepository,
        lead_repo: LeadRepository,
        ads_repo: AdsRepository,
        contract_repo: ContractRepository,
        pool: PgPool,
    ) -> Self {
        Self { repo, lead_repo, ads_repo, contract_repo, pool }
    }

    pub async fn list(&self) -> Result<Vec<Customer>, AppError> {
        self.repo.list().await
    }

    pub async fn get(&self, id: Uuid) -> Result<Customer, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound("Cliente"))
    }

    pub async fn prefill_create_form(
        &self,
        handoff: &HandoffCache,
        user_id: Uuid,
    ) -> Result<CustomerCreatePrefill, AppError> {
        let mut prefill = CustomerCreatePrefill { lead: None, ads: None };

        if let Some(lead_id) = handoff.consume(user_id, HandoffKey::LeadId) {
            prefill.lead = self.lead_repo.find_by_id(lead_id).await?;
            if let Some(lead) = &prefill.lead {
                prefill.ads = self.ads_repo.find_by_id(lead.ads_id).await?;
            }
        }

        Ok(prefill)
    }

    /// Converte o lead em cliente. A ativação do lead e o INSERT do
    /// cliente rodam na mesma transação: ou acontecem os dois, ou nenhum.
    pub async fn create(
        &self,
        lead_id: Uuid,
        ads_id: Uuid,
        contract_id: Option<Uuid>,
        comment: Option<&str>,
    ) -> Result<Customer, AppError> {
        let (lead, ads) = self.load_links(lead_id, ads_id).await?;

        checks::check_lead_unconverted(&lead)?;
        checks::check_ads_matches_lead(&lead, &ads)?;
        self.check_contract(contract_id, &lead, &ads).await?;

        let mut tx = self.pool.begin().await?;

        self.lead_repo.mark_active(&mut *tx, lead.id).await?;
        let customer = self
            .repo
            .create(&mut *tx, lead_id, ads_id, contract_id, comment)
            .await?;

        tx.commit().await?;

        tracing::info!("Lead {} convertido em cliente {}", lead.id, customer.id);
        Ok(customer)
    }

    pub async fn update(
        &self,
        id: Uuid,
        lead_id: Uuid,
        ads_id: Uuid,
        contract_id: Option<Uuid>,
        comment: Option<&str>,
    ) -> Result<Customer, AppError> {
        // O lead de um cliente existente já está convertido; aqui só
        // valem as invariantes de consistência.
        let (lead, ads) = self.load_links(lead_id, ads_id).await?;
        checks::check_ads_matches_lead(&lead, &ads)?;
        self.check_contract(contract_id, &lead, &ads).await?;

        self.repo
            .update(id, lead_id, ads_id, contract_id, comment)
            .await?
            .ok_or(AppError::NotFound("Cliente"))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let deleted = self.repo.delete(id).await?;
        if deleted == 0 {
            return Err(AppError::NotFound("Cliente"));
        }
        Ok(())
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        self.repo.count().await
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

    async fn check_contract(
        &self,
        contract_id: Option<Uuid>,
        lead: &Lead,
        ads: &Ads,
    ) -> Result<(), AppError> {
        if let Some(contract_id) = contract_id {
            let contract = self
                .contract_repo
                .find_by_id(contract_id)
                .await?
                .ok_or(AppError::FieldError {
                    field: "contract",
                    message: "O contrato selecionado não existe.".into(),
                })?;
            checks::check_contract_matches(lead, ads, &contract)?;
        }
        Ok(())
    }
}
