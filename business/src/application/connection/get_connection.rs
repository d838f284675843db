use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::access::current_user::RequestContext;
use crate::domain::access::role::Role;
use crate::domain::connection::connector::{ConnectOptions, DatabaseConnector};
use crate::domain::connection::errors::ConnectionError;
use crate::domain::connection::use_cases::get_connection::{
    GetConnectionParams, GetConnectionUseCase,
};
use crate::domain::logger::Logger;
use crate::domain::settings::model::DatabaseSettings;

pub struct GetConnectionUseCaseImpl<C: DatabaseConnector> {
    pub settings: Arc<DatabaseSettings>,
    pub connector: Arc<C>,
    pub context: Arc<dyn RequestContext>,
    pub logger: Arc<dyn Logger>,
}

impl<C: DatabaseConnector> GetConnectionUseCaseImpl<C> {
    fn resolve_role(&self, explicit: Option<String>) -> Option<String> {
        explicit.or_else(|| self.context.current_user().and_then(|user| user.role))
    }
}

#[async_trait]
impl<C: DatabaseConnector> GetConnectionUseCase for GetConnectionUseCaseImpl<C> {
    type Connection = C::Connection;

    async fn execute(
        &self,
        params: GetConnectionParams,
    ) -> Result<Self::Connection, ConnectionError> {
        let role_name = self.resolve_role(params.role);
        let role = role_name.as_deref().and_then(Role::parse);

        if let (Some(name), None) = (role_name.as_deref(), role) {
            self.logger.warn(&format!(
                "Unrecognized role '{}', using application credentials",
                name
            ));
        }

        let (kind, credentials) = self.settings.credentials_for(role);
        let options = ConnectOptions::new(
            &self.settings.host,
            credentials,
            self.settings.name.as_deref(),
        );

        self.logger.debug(&format!(
            "Opening database connection to {} with {} credentials (role: {})",
            options.host,
            kind,
            role.map_or_else(|| "none".to_string(), |r| r.to_string())
        ));

        self.connector.connect(&options).await.inspect_err(|e| {
            self.logger.error(&format!(
                "Database connection with {} credentials failed: {:?}",
                kind, e
            ));
        })
    }
}
