use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::instrument;

use crate::state::AppState;
use crate::utils::errors::{AppError, ErrorBody};
use crate::utils::jwt::create_token;
use crate::validator::ValidatedJson;

use super::model::{CreateUserDto, LoginDto, TokenResponse, User};
use super::service::UserService;

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User registered successfully", body = User),
        (status = 400, description = "Validation failed", body = ErrorBody),
        (status = 409, description = "Email already registered", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "Users"
)]
#[instrument(skip(state, dto))]
pub async fn register_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateUserDto>,
) -> Result<(StatusCode, Json<User>), AppError> {
    let user = UserService::register(&state.db, state.hasher, dto).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Login and receive a JWT
#[utoipa::path(
    post,
    path = "/api/users/login",
    request_body = LoginDto,
    responses(
        (status = 200, description = "Login successful", body = TokenResponse),
        (status = 400, description = "Validation failed", body = ErrorBody),
        (status = 401, description = "Invalid credentials", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "Users"
)]
#[instrument(skip(state, dto))]
pub async fn login_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginDto>,
) -> Result<Json<TokenResponse>, AppError> {
    let user = UserService::authenticate(&state.db, state.hasher, dto).await?;
    let token = create_token(&user, &state.jwt_config)?;

    Ok(Json(TokenResponse { token }))
}
