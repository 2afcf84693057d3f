use std::net::SocketAddr;
use std::sync::Arc;

use comercio_api::{app, state::AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "comercio_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = comercio_store::app_config::Config::load().expect("Failed to load config");
    tracing::info!("Starting comercio API on port {}", config.server.port);

    let db = comercio_store::DbClient::new(&config.database.url)
        .await
        .expect("Failed to connect to database");
    db.ensure_schema().await.expect("Failed to create schema");

    let mailer =
        comercio_store::SmtpMailer::new(&config.smtp).expect("Failed to build SMTP transport");

    let state = AppState {
        companies: Arc::new(comercio_store::PgCompanyRepository::new(db.pool.clone())),
        products: Arc::new(comercio_store::PgProductRepository::new(db.pool.clone())),
        mailer: Arc::new(mailer),
    };

    let app = app(state, &config.cors.allowed_origins);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
