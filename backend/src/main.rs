//! Backend entry-point: loads settings, wires adapters and serves the REST API.

mod server;

use actix_web::web;
#[cfg(feature = "metrics")]
use actix_web_prom::PrometheusMetricsBuilder;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, create_server};
use travel_backend::inbound::http::health::HealthState;
use travel_backend::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use travel_backend::settings::ServerSettings;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load()
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let mut config = ServerConfig::from_settings(&settings);

    if let Some(database_url) = settings.database_url() {
        if settings.run_migrations() {
            run_pending_migrations(database_url)
                .await
                .map_err(|e| std::io::Error::other(format!("migrations failed: {e}")))?;
        }
        let pool_config =
            PoolConfig::new(database_url).with_max_size(settings.db_max_connections());
        let pool = DbPool::new(pool_config)
            .await
            .map_err(|e| std::io::Error::other(format!("database pool: {e}")))?;
        config = config.with_db_pool(pool);
    }

    #[cfg(feature = "metrics")]
    {
        config = config.with_metrics(make_metrics());
    }

    info!(addr = %settings.bind_addr(), "starting server");
    let health_state = web::Data::new(HealthState::new());
    create_server(health_state, config)?.await
}

#[cfg(feature = "metrics")]
fn make_metrics() -> Option<actix_web_prom::PrometheusMetrics> {
    match PrometheusMetricsBuilder::new("travel")
        .endpoint("/metrics")
        .build()
    {
        Ok(metrics) => Some(metrics),
        Err(e) => {
            warn!(error = %e, "metrics disabled: registry setup failed");
            None
        }
    }
}
