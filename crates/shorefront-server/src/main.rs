use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use shorefront_commerce::StorefrontClient;
use shorefront_server::model::{AppState, Configuration};
use shorefront_server::startup::{LoggingConfig, http_server, init_logging};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let configuration = Configuration::new();

    let logging = LoggingConfig {
        level: configuration.log_level(),
        log_dir: configuration.log_dir().map(PathBuf::from),
    };
    let _logging_guard = init_logging(&logging).map_err(|e| anyhow::anyhow!(e.to_string()))?;

    let db = configuration.database_connection().await?;
    let commerce = Arc::new(StorefrontClient::new(configuration.storefront()));

    let address = configuration.server_address();
    let port = configuration.server_port();

    let app_state = Arc::new(AppState::new(configuration, db, commerce));

    info!(address, port, "Starting Shorefront server");
    http_server(app_state, address, port)?.await?;

    Ok(())
}
