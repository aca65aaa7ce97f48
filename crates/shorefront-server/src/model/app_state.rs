//! Shared application state handed to every handler

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use shorefront_commerce::StorefrontClient;

use super::config::Configuration;

pub struct AppState {
    pub configuration: Configuration,
    pub db: DatabaseConnection,
    pub commerce: Arc<StorefrontClient>,
}

impl AppState {
    pub fn new(
        configuration: Configuration,
        db: DatabaseConnection,
        commerce: Arc<StorefrontClient>,
    ) -> Self {
        AppState {
            configuration,
            db,
            commerce,
        }
    }
}
