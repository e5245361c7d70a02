use std::path::PathBuf;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::app::build_router;
use api::gql::build_schema;
use api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    let database_path = PathBuf::from(
        std::env::var("DATABASE_PATH").unwrap_or_else(|_| "database.sqlite".into()),
    );
    let max_connections: u32 = std::env::var("DATABASE_MAX_CONNECTIONS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(5);

    let pool = infra::db::connect(&database_path, max_connections).await?;
    tracing::info!(
        "Opened {} with max {} connections",
        database_path.display(),
        max_connections
    );

    // Creates the lineup tables; a provisioned stats database passes through
    // untouched.
    infra::db::MIGRATOR.run(&pool).await?;
    tracing::info!("Schema up to date");

    let state = AppState::new(pool);
    let schema = build_schema(state.clone());
    let app = build_router(state, schema);

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "8080".into())
        .parse()?;
    let addr = format!("0.0.0.0:{port}");
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
