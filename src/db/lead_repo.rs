// src/db/lead_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{common::error::AppError, models::lead::Lead};

#[derive(Clone)]
pub struct LeadRepository {
    pool: PgPool,
}

impl LeadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// A listagem só mostra leads ainda não convertidos; os convertidos
    /// aparecem na tela de clientes.
    pub async fn list_unconverted(&self) -> Result<Vec<Lead>, AppError> {
        let leads = sqlx::query_as::<_, Lead>(
            "SELECT * FROM leads WHERE to_active = FALSE ORDER BY last_name, first_name",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(leads)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Lead>, AppError> {
        let lead = sqlx::query_as::<_, Lead>("SELECT * FROM leads WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(lead)
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
        let lead = sqlx::query_as::<_, Lead>(
            "INSERT INTO leads (first_name, last_name, email, phone, ads_id, comment)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING *",
        )
        .bind(first_name)
        .bind(last_name)
        .bind(email)
        .bind(phone)
        .bind(ads_id)
        .bind(comment)
        .fetch_one(&self.pool)
        .await?;
        Ok(lead)
    }

    /// Atualiza os dados cadastrais. `to_active` fica de fora de
    /// propósito: a promoção acontece só via criação de cliente.
    pub async fn update(
        &self,
        id: Uuid,
        first_name: &str,
        last_name: &str,
        email: Option<&str>,
        phone: &str,
        ads_id: Uuid,
        comment: Option<&str>,
    ) -> Result<Option<Lead>, AppError> {
        let lead = sqlx::query_as::<_, Lead>(
            "UPDATE leads
             SET first_name = $2, last_name = $3, email = $4,
                 phone = $5, ads_id = $6, comment = $7
             WHERE id = $1
             RETURNING *",
        )
        .bind(id)
        .bind(first_name)
        .bind(last_name)
        .bind(email)
        .bind(phone)
        .bind(ads_id)
        .bind(comment)
        .fetch_optional(&self.pool)
        .await?;
        Ok(lead)
    }

    pub async fn delete(&self, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM leads WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM leads")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Marca o lead como convertido. Recebe o executor para rodar na
    /// mesma transação que a criação do cliente.
    pub async fn mark_active<'e, E>(&self, executor: E, id: Uuid) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("UPDATE leads SET to_active = TRUE WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected())
    }
}
