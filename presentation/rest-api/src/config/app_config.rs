use business::domain::settings::model::DatabaseSettings;
use business::domain::settings::source::SettingsSource;
use poem::middleware::Cors;

use super::{
    cors_config, database_config, security_config::SecurityConfig, server_config::ServerConfig,
};

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub security: SecurityConfig,
    pub database: DatabaseSettings,
}

impl AppConfig {
    pub fn from_settings(settings: &dyn SettingsSource) -> Self {
        Self {
            server: ServerConfig::from_settings(settings),
            cors: cors_config::init_cors(settings),
            security: SecurityConfig::from_settings(settings),
            database: database_config::init_database_settings(settings),
        }
    }
}
