use anyhow::Result;
use api::{session::SessionContext, workflow::event::EventWorkflow};
use kernel::model::event::query::EventFilter;
use registry::AppRegistry;
use shared::config::AppConfig;
use shared::env::{which, Environment};
use std::sync::Arc;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    init_logger()?;
    bootstrap().await
}

fn init_logger() -> Result<()> {
    let log_level = match which() {
        Environment::Development => "debug",
        Environment::Production => "info",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| log_level.into());

    let subscriber = tracing_subscriber::fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_target(false);

    tracing_subscriber::registry()
        .with(subscriber)
        .with(env_filter)
        .try_init()?;

    Ok(())
}

async fn bootstrap() -> Result<()> {
    let app_config = AppConfig::new()?;
    let registry = AppRegistry::new(&app_config)?;

    let session = Arc::new(SessionContext::init(registry.session_store()).await?);
    match session.current_user() {
        Some(user) => {
            tracing::info!(email = %user.email, role = %user.role, "session restored")
        }
        None => tracing::info!("no stored session, starting logged out"),
    }

    let events = EventWorkflow::new(registry.event_repository(), session.clone());
    let visible = events.visible(&EventFilter::default()).await?;
    tracing::info!(count = visible.len(), "event collection reachable");

    Ok(())
}
