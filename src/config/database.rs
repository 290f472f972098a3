//! Database connection pool initialization.
//!
//! Reads the connection string from `DATABASE_URL` and builds the sqlx
//! pool shared by the whole application. The pool is created once at
//! startup, cloned cheaply into handlers through [`crate::state::AppState`],
//! and closed once at shutdown.
//!
//! # Panics
//!
//! [`init_db_pool`] panics if `DATABASE_URL` is unset or the database is
//! unreachable; there is nothing useful the server can do without it.

use sqlx::PgPool;
use std::env;

pub async fn init_db_pool() -> PgPool {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to database")
}
