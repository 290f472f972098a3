use sqlx::PgPool;

use crate::config::database::init_db_pool;
use crate::config::jwt::JwtConfig;
use crate::utils::password::PasswordHasher;

/// Everything a handler needs, constructed once at startup and never
/// mutated afterwards.
#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub jwt_config: JwtConfig,
    pub hasher: PasswordHasher,
}

pub async fn init_app_state() -> AppState {
    AppState {
        db: init_db_pool().await,
        jwt_config: JwtConfig::from_env(),
        hasher: PasswordHasher::new(),
    }
}
