use async_trait::async_trait;

use crate::domain::settings::model::CredentialPair;

use super::errors::ConnectionError;

/// Authentication plugin requested from the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthPlugin {
    #[default]
    MysqlNativePassword,
}

impl std::fmt::Display for AuthPlugin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthPlugin::MysqlNativePassword => write!(f, "mysql_native_password"),
        }
    }
}

/// Everything the client needs to open one connection.
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectOptions {
    pub host: String,
    pub username: Option<String>,
    pub password: Option<String>,
    pub database: Option<String>,
    pub auth_plugin: AuthPlugin,
}

impl ConnectOptions {
    pub fn new(host: &str, credentials: &CredentialPair, database: Option<&str>) -> Self {
        Self {
            host: host.to_string(),
            username: credentials.username.clone(),
            password: credentials.password.clone(),
            database: database.map(str::to_string),
            auth_plugin: AuthPlugin::default(),
        }
    }
}

impl std::fmt::Debug for ConnectOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectOptions")
            .field("host", &self.host)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("database", &self.database)
            .field("auth_plugin", &self.auth_plugin)
            .finish()
    }
}

/// Opens a fresh connection per call. The returned handle belongs to the
/// caller; implementations keep no reference to it.
#[async_trait]
pub trait DatabaseConnector: Send + Sync {
    type Connection: Send;

    async fn connect(&self, options: &ConnectOptions) -> Result<Self::Connection, ConnectionError>;
}
