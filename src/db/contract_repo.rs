// src/db/contract_repo.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{common::error::AppError, models::contract::Contract};

#[derive(Clone)]
pub struct ContractRepository {
    pool: PgPool,
}

impl ContractRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Contract>, AppError> {
        let contracts =
            sqlx::query_as::<_, Contract>("SELECT * FROM contracts ORDER BY conclusion_day DESC")
                .fetch_all(&self.pool)
                .await?;
        Ok(contracts)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Contract>, AppError> {
        let contract = sqlx::query_as::<_, Contract>("SELECT * FROM contracts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(contract)
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
        let contract = sqlx::query_as::<_, Contract>(
            "INSERT INTO contracts
                (name, lead_id, ads_id, product_id, document, comment,
                 cost, conclusion_day, start_day, end_day)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING *",
        )
        .bind(name)
        .bind(lead_id)
        .bind(ads_id)
        .bind(product_id)
        .bind(document)
        .bind(comment)
        .bind(cost)
        .bind(conclusion_day)
        .bind(start_day)
        .bind(end_day)
        .fetch_one(&self.pool)
        .await?;
        Ok(contract)
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
    ) -> Result<Option<Contract>, AppError> {
        let contract = sqlx::query_as::<_, Contract>(
            "UPDATE contracts
             SET name = $2, lead_id = $3, ads_id = $4, product_id = $5,
                 document = $6, comment = $7, cost = $8,
                 conclusion_day = $9, start_day = $10, end_day = $11
             WHERE id = $1
             RETURNING *",
        )
        .bind(id)
        .bind(name)
        .bind(lead_id)
        .bind(ads_id)
        .bind(product_id)
        .bind(document)
        .bind(comment)
        .bind(cost)
        .bind(conclusion_day)
        .bind(start_day)
        .bind(end_day)
        .fetch_optional(&self.pool)
        .await?;
        Ok(contract)
    }

    pub async fn delete(&self, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM contracts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
