use axum::Json;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::{AppError, ErrorBody};
use crate::validator::ValidatedJson;

use super::model::{CreateProductDto, Product};
use super::service::ProductService;

/// Create a new product owned by the authenticated user
#[utoipa::path(
    post,
    path = "/api/products",
    request_body = CreateProductDto,
    responses(
        (status = 201, description = "Product created successfully", body = Product),
        (status = 400, description = "Validation failed", body = ErrorBody),
        (status = 401, description = "Invalid or missing token", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    security(("bearer_auth" = [])),
    tag = "Products"
)]
#[instrument(skip(state, dto))]
pub async fn create_product(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateProductDto>,
) -> Result<(StatusCode, Json<Product>), AppError> {
    let owner_id = auth_user.user_id()?;
    let product = ProductService::create(&state.db, dto, owner_id).await?;

    Ok((StatusCode::CREATED, Json(product)))
}

/// List all products
#[utoipa::path(
    get,
    path = "/api/products",
    responses(
        (status = 200, description = "All products", body = Vec<Product>),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "Products"
)]
#[instrument(skip(state))]
pub async fn get_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>, AppError> {
    let products = ProductService::list(&state.db).await?;
    Ok(Json(products))
}

/// Get a single product by id
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "The product", body = Product),
        (status = 400, description = "Invalid product id", body = ErrorBody),
        (status = 404, description = "Product not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "Products"
)]
#[instrument(skip(state, id))]
pub async fn get_product(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<Product>, AppError> {
    let Path(id) = id.map_err(|_| AppError::bad_request("Invalid product id"))?;
    let product = ProductService::get(&state.db, id).await?;

    Ok(Json(product))
}
