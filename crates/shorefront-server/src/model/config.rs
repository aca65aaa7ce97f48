//! Configuration management for the Shorefront server
//!
//! Layers `SHOREFRONT`-prefixed environment variables,
//! `conf/application.yml` and CLI overrides, in ascending precedence.

use clap::Parser;
use config::{Config, Environment};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use shorefront_commerce::StorefrontConfig;
use shorefront_persistence::create_tables;

pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Command line arguments for the server
#[derive(Debug, Parser)]
#[command()]
struct Cli {
    #[arg(long = "db-url", env = "DATABASE_URL")]
    database_url: Option<String>,
    #[arg(short = 'p', long = "port")]
    port: Option<u16>,
}

/// Application configuration loaded from config files and environment
#[derive(Clone, Debug, Default)]
pub struct Configuration {
    pub config: Config,
}

impl Configuration {
    pub fn new() -> Self {
        let args = Cli::parse();
        let mut config_builder = Config::builder()
            .add_source(
                Environment::with_prefix("shorefront")
                    .separator(".")
                    .try_parsing(true),
            )
            .add_source(config::File::with_name("conf/application.yml").required(false));

        if let Some(v) = args.database_url {
            config_builder = config_builder
                .set_override("db.url", v)
                .expect("Failed to set database URL override");
        }
        if let Some(v) = args.port {
            config_builder = config_builder
                .set_override("server.port", v)
                .expect("Failed to set server port override");
        }

        let app_config = config_builder
            .build()
            .expect("Failed to build configuration - check conf/application.yml");

        Configuration { config: app_config }
    }

    pub fn server_address(&self) -> String {
        self.config
            .get_string("server.address")
            .unwrap_or("0.0.0.0".to_string())
    }

    pub fn server_port(&self) -> u16 {
        self.config
            .get_int("server.port")
            .map(|port| port as u16)
            .unwrap_or(DEFAULT_SERVER_PORT)
    }

    pub fn database_url(&self) -> String {
        self.config
            .get_string("db.url")
            .unwrap_or("sqlite::memory:".to_string())
    }

    pub fn log_level(&self) -> String {
        self.config
            .get_string("logging.level")
            .unwrap_or("info".to_string())
    }

    pub fn log_dir(&self) -> Option<String> {
        self.config.get_string("logging.dir").ok()
    }

    pub fn storefront(&self) -> StorefrontConfig {
        let mut storefront = StorefrontConfig::new(
            &self
                .config
                .get_string("commerce.store_domain")
                .unwrap_or_default(),
            &self
                .config
                .get_string("commerce.access_token")
                .unwrap_or_default(),
        );
        if let Ok(api_version) = self.config.get_string("commerce.api_version") {
            storefront.api_version = api_version;
        }

        storefront
    }

    /// Connect to the configured database. Sqlite databases get their
    /// schema bootstrapped from the entities; external databases are
    /// expected to be migrated already.
    pub async fn database_connection(&self) -> anyhow::Result<DatabaseConnection> {
        let url = self.database_url();

        let mut options = ConnectOptions::new(url.clone());
        options.sqlx_logging(
            self.config
                .get_bool("db.sqlx_logging")
                .unwrap_or(false),
        );
        let db = Database::connect(options).await?;

        if url.starts_with("sqlite") {
            create_tables(&db).await?;
        }

        Ok(db)
    }
}
