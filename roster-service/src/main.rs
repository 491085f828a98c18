use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use roster_service::api::{self, AppState};
use roster_service::domain::rules::RuleSettings;
use roster_service::domain::services::RosterGenerator;
use roster_service::infrastructure::repositories::{PostgresShiftRepository, PostgresStaffRepository};
use roster_service::infrastructure::{config::Settings, database};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roster_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Roster Service...");

    let settings = Settings::new()?;
    tracing::info!("Configuration loaded: {:?}", settings);

    let db_pool = database::create_pool(&settings.database.url, settings.database.max_connections).await?;
    tracing::info!("Database connection pool created");

    database::run_migrations(&db_pool).await?;
    tracing::info!("Database migrations completed");

    let staff_repo = Arc::new(PostgresStaffRepository::new(db_pool.clone()));
    let shift_repo = Arc::new(PostgresShiftRepository::new(db_pool));
    let rule_settings = RuleSettings {
        weekly_hours_cap: settings.scheduling_rules.weekly_hours_cap,
        consecutive_work_cap: settings.scheduling_rules.consecutive_work_cap,
        strict_staffing_ceiling: settings.scheduling_rules.strict_staffing_ceiling,
    };
    let roster_generator = Arc::new(RosterGenerator::new(staff_repo, shift_repo, rule_settings));
    let state = AppState::new(
        roster_generator,
        settings.server.solve_timeout_secs,
        settings.scheduling_rules.default_target_holidays,
    );

    let app = api::create_router(state);

    let listener = tokio::net::TcpListener::bind(settings.server_address()).await?;
    let addr = listener.local_addr()?;
    tracing::info!("Roster Service listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
