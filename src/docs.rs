use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::products::model::{CreateProductDto, Product};
use crate::modules::users::model::{CreateUserDto, LoginDto, TokenResponse, User};
use crate::router::HealthResponse;
use crate::utils::errors::{ErrorBody, ValidationIssue};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::router::health_check,
        crate::modules::users::controller::register_user,
        crate::modules::users::controller::login_user,
        crate::modules::products::controller::create_product,
        crate::modules::products::controller::get_products,
        crate::modules::products::controller::get_product,
    ),
    components(
        schemas(
            User,
            CreateUserDto,
            LoginDto,
            TokenResponse,
            Product,
            CreateProductDto,
            HealthResponse,
            ErrorBody,
            ValidationIssue,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Service health"),
        (name = "Users", description = "User registration and authentication"),
        (name = "Products", description = "Product management endpoints")
    ),
    info(
        title = "Storefront API",
        version = "0.1.0",
        description = "A REST API built with Rust, Axum, and PostgreSQL for managing users and products with JWT-based authentication.",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
