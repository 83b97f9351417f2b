// src/db/rbac_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::common::error::AppError;

#[derive(Clone)]
pub struct RbacRepository {
    pool: PgPool,
}

impl RbacRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn user_has_permission(
        &self,
        user_id: Uuid,
        permission: &str,
    ) -> Result<bool, AppError> {
        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS (
                SELECT 1 FROM user_permissions
                WHERE user_id = $1 AND permission = $2
             )",
        )
        .bind(user_id)
        .bind(permission)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    pub async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<String>, AppError> {
        let rows: Vec<(String,)> = sqlx::query_as(
            "SELECT permission FROM user_permissions
             WHERE user_id = $1
             ORDER BY permission ASC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(|(p,)| p).collect())
    }

    /// Concede as permissões ao usuário; pares repetidos são ignorados.
    pub async fn grant(&self, user_id: Uuid, permissions: &[String]) -> Result<u64, AppError> {
        let result = sqlx::query(
            "INSERT INTO user_permissions (user_id, permission)
             SELECT $1, UNNEST($2::VARCHAR[])
             ON CONFLICT DO NOTHING",
        )
        .bind(user_id)
        .bind(permissions)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }
}
