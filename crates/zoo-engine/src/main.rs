//! Placement engine binary for the Dierentuin zoo.
//!
//! Loads configuration, connects to `PostgreSQL`, runs one auto-assign
//! pass, and logs the resulting constraint report.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `zoo-config.yaml` (or `$ZOO_CONFIG`)
//! 2. Initialize structured logging (tracing)
//! 3. Connect to `PostgreSQL` and run migrations
//! 4. Run auto-assign
//! 5. Log constraint issues and feeding warnings for the whole zoo

mod error;
mod pg_store;

use std::path::PathBuf;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use zoo_core::config::ZooConfig;
use zoo_core::constraints::STATUS_KEY;
use zoo_core::feeding::WARNING_MARKER;
use zoo_core::planner::Planner;
use zoo_core::zoo::{check_zoo_constraints, zoo_feeding_time};
use zoo_db::{PostgresConfig, PostgresPool};

use crate::error::EngineError;
use crate::pg_store::PgZooStore;

/// Default configuration file, relative to the working directory.
const DEFAULT_CONFIG_PATH: &str = "zoo-config.yaml";

/// Application entry point for the placement engine.
///
/// # Errors
///
/// Returns an error if configuration, the database, or the run fails.
#[tokio::main]
async fn main() -> Result<(), EngineError> {
    // 1. Load configuration.
    let (config, config_path) = load_config()?;

    // 2. Initialize structured logging. RUST_LOG wins over the config file.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .init();

    info!("zoo-engine starting");
    match &config_path {
        Some(path) => info!(path = %path.display(), "Configuration loaded"),
        None => info!("Config file not found, using defaults"),
    }

    // 3. Connect to PostgreSQL.
    let pg_config = PostgresConfig::new(&config.infrastructure.postgres_url)
        .with_max_connections(config.infrastructure.max_connections);
    let pool = PostgresPool::connect(&pg_config).await?;
    pool.run_migrations().await?;

    // 4. Auto-assign.
    let mut store = PgZooStore::new(pool.clone());
    let planner = Planner::new(config.planner.clone());
    let summary = planner
        .auto_assign(&mut store, config.planner.clear_existing)
        .await?;
    info!(
        clear_existing = config.planner.clear_existing,
        assigned = summary.assigned,
        enclosures_created = summary.enclosures_created,
        "{summary}"
    );

    // 5. Report what is still wrong.
    log_constraint_report(&store).await?;

    pool.close().await;
    info!("zoo-engine shutdown complete");
    Ok(())
}

/// Load the configuration file, falling back to defaults when absent.
///
/// Returns the path that was read, if any.
fn load_config() -> Result<(ZooConfig, Option<PathBuf>), EngineError> {
    let path = std::env::var_os("ZOO_CONFIG")
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);
    if path.exists() {
        let config = ZooConfig::from_file(&path)?;
        Ok((config, Some(path)))
    } else {
        Ok((ZooConfig::from_env(), None))
    }
}

/// Log every constraint issue and every feeding warning in the zoo.
async fn log_constraint_report(store: &PgZooStore) -> Result<(), EngineError> {
    let report = check_zoo_constraints(store).await?;
    let mut issue_count: usize = 0;
    for (enclosure, entries) in &report {
        for (subject, issues) in entries {
            if subject == STATUS_KEY {
                continue;
            }
            for issue in issues {
                warn!(enclosure, subject, issue, "Constraint issue");
                issue_count = issue_count.saturating_add(1);
            }
        }
    }

    let feeding = zoo_feeding_time(store).await?;
    for (enclosure, lines) in &feeding {
        for line in lines.iter().filter(|l| l.contains(WARNING_MARKER)) {
            warn!(enclosure, line, "Feeding warning");
        }
    }

    info!(
        enclosures = report.len(),
        issues = issue_count,
        "Constraint check complete"
    );
    Ok(())
}
