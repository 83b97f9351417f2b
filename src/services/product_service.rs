// src/services/product_service.rs

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{common::error::AppError, db::ProductRepository, models::product::Product};

#[derive(Clone)]
pub struct ProductService {
    repo: ProductRepository,
}

impl ProductService {
    pub fn new(repo: ProductRepository) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<Product>, AppError> {
        self.repo.list().await
    }

    pub async fn get(&self, id: Uuid) -> Result<Product, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound("Serviço"))
    }

    pub async fn create(
        &self,
        name: &str,
        description: &str,
        price: Decimal,
    ) -> Result<Product, AppError> {
        self.repo.create(name, description, price).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        name: &str,
        description: &str,
        price: Decimal,
    ) -> Result<Product, AppError> {
        self.repo
            .update(id, name, description, price)
            .await?
            .ok_or(AppError::NotFound("Serviço"))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let deleted = self.repo.delete(id).await?;
        if deleted == 0 {
            return Err(AppError::NotFound("Serviço"));
        }
        Ok(())
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        self.repo.count().await
    }
}
