//! Populate an empty `workouts` table with the initial schedule.

use anyhow::Context;
use workouts_api::config::ServerConfig;
use workouts_api::telemetry;
use workouts_db::seed::{seed_workouts, SeedOutcome};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    telemetry::init_tracing();

    let config = ServerConfig::from_env().context("Failed to load configuration")?;

    let pool = workouts_db::create_pool(&config.database_url, config.db_max_connections)
        .await
        .context("Failed to connect to database")?;

    workouts_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    match seed_workouts(&pool).await.context("Seeding failed")? {
        SeedOutcome::Inserted(count) => tracing::info!(count, "Database seeded"),
        SeedOutcome::Skipped(existing) => {
            tracing::info!(existing, "Database already populated, nothing to do")
        }
    }

    pool.close().await;
    Ok(())
}
