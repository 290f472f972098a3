use dotenvy::dotenv;

use storefront::config::server::ServerConfig;
use storefront::logging::init_tracing;
use storefront::router::init_router;
use storefront::state::init_app_state;

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_tracing();

    let server_config = ServerConfig::from_env();
    let state = init_app_state().await;
    let app = init_router(state.clone());

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", server_config.port))
        .await
        .unwrap();
    println!(
        "🚀 Server running on http://localhost:{}",
        server_config.port
    );
    println!(
        "📚 Swagger UI available at http://localhost:{}/swagger-ui",
        server_config.port
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    state.db.close().await;
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install ctrl-c handler");
}
