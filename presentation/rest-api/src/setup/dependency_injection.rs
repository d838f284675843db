use std::sync::Arc;

use business::application::connection::get_connection::GetConnectionUseCaseImpl;
use business::domain::settings::model::DatabaseSettings;
use logger::TracingLogger;
use persistence::db::MySqlConnector;

use crate::api::request_context::TaskLocalRequestContext;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub database_api: crate::api::database::routes::DatabaseApi,
}

impl DependencyContainer {
    pub fn new(database: DatabaseSettings) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        let get_connection_use_case = Arc::new(GetConnectionUseCaseImpl {
            settings: Arc::new(database),
            connector: Arc::new(MySqlConnector::new()),
            context: Arc::new(TaskLocalRequestContext),
            logger,
        });

        let database_api = crate::api::database::routes::DatabaseApi::new(get_connection_use_case);

        Self {
            health_api,
            database_api,
        }
    }
}
