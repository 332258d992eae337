#![recursion_limit = "256"]

mod db;
mod frame;
mod rate_limit;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    let pool = db::init_pool(&database_url)
        .await
        .expect("database init failed");

    // Seed the operator account (non-fatal: logins fail until one exists).
    match services::auth::ensure_admin_user(&pool).await {
        Ok(Some(email)) => tracing::info!(%email, "admin account ready"),
        Ok(None) => tracing::warn!("ADMIN_EMAIL/ADMIN_PASSWORD not set — no admin account seeded"),
        Err(e) => tracing::error!(error = %e, "admin account seed failed"),
    }

    let state = state::AppState::new(pool);

    let app = routes::leptos_app(state).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "vigia-erp listening");
    axum::serve(listener, app).await.expect("server failed");
}
