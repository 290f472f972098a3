use sqlx::PgPool;
use uuid::Uuid;

use storefront::config::jwt::JwtConfig;
use storefront::modules::users::model::User;
use storefront::router::init_router;
use storefront::state::AppState;
use storefront::utils::jwt::create_token;
use storefront::utils::password::PasswordHasher;

pub fn setup_test_app(pool: PgPool) -> axum::Router {
    dotenvy::dotenv().ok();
    let state = AppState {
        db: pool,
        jwt_config: JwtConfig::from_env(),
        hasher: PasswordHasher::new(),
    };
    init_router(state)
}

#[allow(dead_code)]
pub struct TestUser {
    pub id: i32,
    pub email: String,
    pub password: String,
}

/// Insert a user with properly hashed credentials.
#[allow(dead_code)]
pub async fn create_test_user(pool: &PgPool, email: &str, password: &str) -> TestUser {
    let credential = PasswordHasher::new().hash(password);

    let (id,): (i32,) = sqlx::query_as(
        "INSERT INTO users (email, name, password, salt)
         VALUES ($1, $2, $3, $4)
         RETURNING id",
    )
    .bind(email)
    .bind("Test User")
    .bind(&credential.digest)
    .bind(&credential.salt)
    .fetch_one(pool)
    .await
    .unwrap();

    TestUser {
        id,
        email: email.to_string(),
        password: password.to_string(),
    }
}

/// Sign a token the way the login endpoint would.
#[allow(dead_code)]
pub fn auth_token_for(id: i32, email: &str) -> String {
    dotenvy::dotenv().ok();
    let user = User {
        id,
        email: email.to_string(),
        name: "Test User".to_string(),
    };
    create_token(&user, &JwtConfig::from_env()).unwrap()
}

#[allow(dead_code)]
pub fn generate_unique_email() -> String {
    format!("test-{}@example.com", Uuid::new_v4())
}
