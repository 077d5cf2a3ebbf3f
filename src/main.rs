use dotenvy::dotenv;
use lucky_bites::{
    config::{database, seed},
    errors::Result,
};
use std::path::Path;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing as early as possible.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load .env, non-fatal: env vars can be set externally.
    dotenv().ok();

    let db = database::create_connection()
        .await
        .inspect(|_| info!("Database connection established"))
        .inspect_err(|e| error!("Failed to connect to database: {e}"))?;
    database::create_tables(&db).await?;
    info!("Database tables ready");

    if Path::new("config.toml").exists() {
        let config = seed::load_default_config()?;
        seed::seed_database(&db, &config)
            .await
            .inspect_err(|e| error!("Failed to seed demo data: {e}"))?;
        info!("Seed data processed");
    } else {
        warn!("No config.toml found, starting with an unseeded database");
    }

    info!("Lucky Bites settlement core ready");
    Ok(())
}
