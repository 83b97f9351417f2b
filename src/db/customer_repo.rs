// src/db/customer_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{common::error::AppError, models::customer::Customer};

#[derive(Clone)]
pub struct CustomerRepository {
    pool: PgPool,
}

impl CustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Customer>, AppError> {
        let customers = sqlx::query_as::<_, Customer>("SELECT * FROM customers")
            .fetch_all(&self.pool)
            .await?;
        Ok(customers)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Customer>, AppError> {
        let customer = sqlx::query_as::<_, Customer>("SELECT * FROM customers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(customer)
    }

    /// Insere o cliente. Recebe o executor porque roda na mesma
    /// transação que a ativação do lead.
    pub async fn create<'e, E>(
        &self,
        executor: E,
        lead_id: Uuid,
        ads_id: Uuid,
        contract_id: Option<Uuid>,
        comment: Option<&str>,
    ) -> Result<Customer, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let customer = sqlx::query_as::<_, Customer>(
            "INSERT INTO customers (lead_id, ads_id, contract_id, comment)
             VALUES ($1, $2, $3, $4)
             RETURNING *",
        )
        .bind(lead_id)
        .bind(ads_id)
        .bind(contract_id)
        .bind(comment)
        .fetch_one(executor)
        .await?;
        Ok(customer)
    }

    pub async fn update(
        &self,
        id: Uuid,
        lead_id: Uuid,
        ads_id: Uuid,
        contract_id: Option<Uuid>,
        comment: Option<&str>,
    ) -> Result<Option<Customer>, AppError> {
        let customer = sqlx::query_as::<_, Customer>(
            "UPDATE customers
             SET lead_id = $2, ads_id = $3, contract_id = $4, comment = $5
             WHERE id = $1
             RETURNING *",
        )
        .bind(id)
        .bind(lead_id)
        .bind(ads_id)
        .bind(contract_id)
        .bind(comment)
        .fetch_optional(&self.pool)
        .await?;
        Ok(customer)
    }

    pub async fn delete(&self, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM customers")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
