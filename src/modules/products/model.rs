use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::validator::{FieldKind, FieldSpec, JsonContract};

/// A product row, serialized in camelCase on the wire.
#[derive(Serialize, FromRow, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub content: Option<String>,
    pub owner_id: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Product creation payload.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct CreateProductDto {
    pub name: String,
    pub price: f64,
    pub content: Option<String>,
}

impl JsonContract for CreateProductDto {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("name", FieldKind::String),
        FieldSpec::required("price", FieldKind::Number),
        FieldSpec::optional("content", FieldKind::String),
    ];
}
