//! User data models and DTOs.
//!
//! [`User`] is the public projection returned to clients; the credential
//! columns only ever appear in [`UserWithCredentials`], which stays inside
//! the service layer. Request DTOs redact the password in their `Debug`
//! output so plaintext can never reach a log line.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::validator::{FieldKind, FieldSpec, JsonContract};

/// Public view of a user. Deliberately omits `password` and `salt`; a
/// response built from this type cannot leak them.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub name: String,
}

/// Full user row including stored credentials. Never serialized.
#[derive(FromRow, Clone)]
pub struct UserWithCredentials {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub password: String,
    pub salt: String,
}

impl std::fmt::Debug for UserWithCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserWithCredentials")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("name", &self.name)
            .field("password", &"[REDACTED]")
            .field("salt", &"[REDACTED]")
            .finish()
    }
}

/// Registration payload.
#[derive(Deserialize, Clone, Validate, ToSchema)]
pub struct CreateUserDto {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    pub name: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

impl JsonContract for CreateUserDto {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("email", FieldKind::String),
        FieldSpec::required("name", FieldKind::String),
        FieldSpec::required("password", FieldKind::String),
    ];
}

impl std::fmt::Debug for CreateUserDto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateUserDto")
            .field("email", &self.email)
            .field("name", &self.name)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Login payload.
#[derive(Deserialize, Clone, Validate, ToSchema)]
pub struct LoginDto {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    pub password: String,
}

impl JsonContract for LoginDto {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("email", FieldKind::String),
        FieldSpec::required("password", FieldKind::String),
    ];
}

impl std::fmt::Debug for LoginDto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginDto")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Successful login response.
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    pub token: String,
}

/// JWT claims carried by access tokens.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,
    pub email: String,
    pub name: String,
    pub iat: usize,
    pub exp: usize,
}
