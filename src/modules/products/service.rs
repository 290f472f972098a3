use sqlx::PgPool;
use tracing::instrument;

use crate::utils::errors::AppError;

use super::model::{CreateProductDto, Product};

pub struct ProductService;

impl ProductService {
    /// Insert a product owned by `owner_id`. If the owner row has been
    /// deleted since the token was issued, the foreign-key violation maps
    /// to a 404.
    #[instrument(skip(db))]
    pub async fn create(
        db: &PgPool,
        dto: CreateProductDto,
        owner_id: i32,
    ) -> Result<Product, AppError> {
        let product = sqlx::query_as::<_, Product>(
            "INSERT INTO products (name, price, content, owner_id)
             VALUES ($1, $2, $3, $4)
             RETURNING id, name, price, content, owner_id, created_at, updated_at",
        )
        .bind(&dto.name)
        .bind(dto.price)
        .bind(&dto.content)
        .bind(owner_id)
        .fetch_one(db)
        .await?;

        Ok(product)
    }

    #[instrument(skip(db))]
    pub async fn list(db: &PgPool) -> Result<Vec<Product>, AppError> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT id, name, price, content, owner_id, created_at, updated_at
             FROM products
             ORDER BY id",
        )
        .fetch_all(db)
        .await?;

        Ok(products)
    }

    #[instrument(skip(db))]
    pub async fn get(db: &PgPool, id: i32) -> Result<Product, AppError> {
        let product = sqlx::query_as::<_, Product>(
            "SELECT id, name, price, content, owner_id, created_at, updated_at
             FROM products
             WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(AppError::not_found)?;

        Ok(product)
    }
}
