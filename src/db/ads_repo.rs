// src/db/ads_repo.rs

use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::ads::{Ads, AdsStatistic, PromotionChannel},
};

#[derive(Clone)]
pub struct AdsRepository {
    pool: PgPool,
}

impl AdsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Ads>, AppError> {
        let ads = sqlx::query_as::<_, Ads>("SELECT * FROM ads ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await?;
        Ok(ads)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Ads>, AppError> {
        let ads = sqlx::query_as::<_, Ads>("SELECT * FROM ads WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(ads)
    }

    pub async fn create(
        &self,
        name: &str,
        product_id: Uuid,
        promotion_channel: PromotionChannel,
        description: &str,
        budget: Decimal,
    ) -> Result<Ads, AppError> {
        let ads = sqlx::query_as::<_, Ads>(
            "INSERT INTO ads (name, product_id, promotion_channel, description, budget)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING *",
        )
        .bind(name)
        .bind(product_id)
        .bind(promotion_channel)
        .bind(description)
        .bind(budget)
        .fetch_one(&self.pool)
        .await?;
        Ok(ads)
    }

    pub async fn update(
        &self,
        id: Uuid,
        name: &str,
        product_id: Uuid,
        promotion_channel: PromotionChannel,
        description: &str,
        budget: Decimal,
    ) -> Result<Option<Ads>, AppError> {
        let ads = sqlx::query_as::<_, Ads>(
            "UPDATE ads
             SET name = $2, product_id = $3, promotion_channel = $4,
                 description = $5, budget = $6
             WHERE id = $1
             RETURNING *",
        )
        .bind(id)
        .bind(name)
        .bind(product_id)
        .bind(promotion_channel)
        .bind(description)
        .bind(budget)
        .fetch_optional(&self.pool)
        .await?;
        Ok(ads)
    }

    pub async fn delete(&self, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM ads WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM ads")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Desempenho por campanha: leads e clientes originados, orçamento e
    /// receita dos contratos fechados através dela.
    pub async fn statistics(&self) -> Result<Vec<AdsStatistic>, AppError> {
        let rows = sqlx::query_as::<_, AdsStatistic>(
            r#"
            SELECT
                a.name,
                (SELECT COUNT(*) FROM leads l WHERE l.ads_id = a.id) AS leads_count,
                (SELECT COUNT(*) FROM customers c WHERE c.ads_id = a.id) AS customers_count,
                a.budget,
                COALESCE((
                    SELECT SUM(ct.cost)
                    FROM customers c
                    JOIN contracts ct ON ct.id = c.contract_id
                    WHERE c.ads_id = a.id
                ), 0::NUMERIC) AS profit,
                CASE
                    WHEN a.budget = 0 THEN NULL
                    ELSE (COALESCE((
                        SELECT SUM(ct.cost)
                        FROM customers c
                        JOIN contracts ct ON ct.id = c.contract_id
                        WHERE c.ads_id = a.id
                    ), 0::NUMERIC) / a.budget)::FLOAT8
                END AS profit_ratio
            FROM ads a
            ORDER BY a.name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
