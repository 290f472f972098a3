use sqlx::PgPool;
use tracing::instrument;

use crate::utils::errors::AppError;
use crate::utils::password::PasswordHasher;

use super::model::{CreateUserDto, LoginDto, User, UserWithCredentials};

pub struct UserService;

impl UserService {
    /// Hash the password off the async runtime and insert the user. A
    /// duplicate email surfaces as the unique-constraint violation from the
    /// database; there is no racy pre-check SELECT.
    #[instrument(skip(db, hasher, dto), fields(email = %dto.email))]
    pub async fn register(
        db: &PgPool,
        hasher: PasswordHasher,
        dto: CreateUserDto,
    ) -> Result<User, AppError> {
        let password = dto.password.clone();
        let credential = tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(AppError::internal)?;

        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (email, name, password, salt)
             VALUES ($1, $2, $3, $4)
             RETURNING id, email, name",
        )
        .bind(&dto.email)
        .bind(&dto.name)
        .bind(&credential.digest)
        .bind(&credential.salt)
        .fetch_one(db)
        .await?;

        Ok(user)
    }

    /// Verify credentials. When the email is unknown a decoy derivation
    /// runs anyway, so both failure paths take the same time and return the
    /// same opaque error.
    #[instrument(skip(db, hasher, dto), fields(email = %dto.email))]
    pub async fn authenticate(
        db: &PgPool,
        hasher: PasswordHasher,
        dto: LoginDto,
    ) -> Result<User, AppError> {
        let row = sqlx::query_as::<_, UserWithCredentials>(
            "SELECT id, email, name, password, salt FROM users WHERE email = $1",
        )
        .bind(&dto.email)
        .fetch_optional(db)
        .await?;

        let LoginDto { password, .. } = dto;

        match row {
            None => {
                tokio::task::spawn_blocking(move || {
                    hasher.verify_against_missing_account(&password)
                })
                .await
                .map_err(AppError::internal)?;

                Err(AppError::unauthorized("Invalid email or password"))
            }
            Some(user) => {
                let salt = user.salt.clone();
                let expected = user.password.clone();
                let is_valid =
                    tokio::task::spawn_blocking(move || hasher.verify(&password, &salt, &expected))
                        .await
                        .map_err(AppError::internal)?;

                if !is_valid {
                    return Err(AppError::unauthorized("Invalid email or password"));
                }

                Ok(User {
                    id: user.id,
                    email: user.email,
                    name: user.name,
                })
            }
        }
    }
}
