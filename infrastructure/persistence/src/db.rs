use async_trait::async_trait;
use sqlx::mysql::MySqlConnectOptions;
use sqlx::{Connection, MySqlConnection};
use thiserror::Error;

use business::domain::connection::connector::{AuthPlugin, ConnectOptions, DatabaseConnector};
use business::domain::connection::errors::ConnectionError;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database.query_error")]
    QueryError(#[source] sqlx::Error),
}

/// Translates connection options into the MySQL client's own options.
///
/// The username is always set: the client defaults to `root`, so an unset
/// user becomes an empty one and the server rejects it on connect. Unset
/// password or database are simply not sent.
pub fn mysql_options(options: &ConnectOptions) -> MySqlConnectOptions {
    let mut mysql = MySqlConnectOptions::new()
        .host(&options.host)
        .username(options.username.as_deref().unwrap_or(""));

    if let Some(password) = &options.password {
        mysql = mysql.password(password);
    }
    if let Some(database) = &options.database {
        mysql = mysql.database(database);
    }

    // sqlx cannot pin the auth plugin, it follows the server's auth switch.
    // The requested plugin is only logged on connect; cleartext stays off.
    match options.auth_plugin {
        AuthPlugin::MysqlNativePassword => mysql.enable_cleartext_plugin(false),
    }
}

/// Opens a single MySQL connection per call. No pooling.
#[derive(Debug, Default, Clone, Copy)]
pub struct MySqlConnector;

impl MySqlConnector {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DatabaseConnector for MySqlConnector {
    type Connection = MySqlConnection;

    async fn connect(&self, options: &ConnectOptions) -> Result<MySqlConnection, ConnectionError> {
        tracing::debug!(
            host = %options.host,
            database = ?options.database,
            auth_plugin = %options.auth_plugin,
            "Connecting to MySQL"
        );

        MySqlConnection::connect_with(&mysql_options(options))
            .await
            .map_err(ConnectionError::failed)
    }
}

/// Returns the account the server authenticated this session as.
pub async fn current_database_user(
    connection: &mut MySqlConnection,
) -> Result<String, DatabaseError> {
    sqlx::query_scalar::<_, String>("SELECT CURRENT_USER()")
        .fetch_one(connection)
        .await
        .map_err(DatabaseError::QueryError)
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::settings::model::CredentialPair;

    #[test]
    fn should_build_mysql_options_from_selected_credentials() {
        // Arrange
        let credentials =
            CredentialPair::new(Some("svc".to_string()), Some("secret".to_string()));
        let options = ConnectOptions::new("dbserver", &credentials, Some("app"));

        // Act
        let mysql = mysql_options(&options);

        // Assert
        assert_eq!(mysql.get_host(), "dbserver");
        assert_eq!(mysql.get_username(), "svc");
        assert_eq!(mysql.get_database(), Some("app"));
    }

    #[test]
    fn should_leave_database_unset_when_missing() {
        let options = ConnectOptions::new("db", &CredentialPair::default(), None);

        let mysql = mysql_options(&options);

        assert_eq!(mysql.get_host(), "db");
        assert_eq!(mysql.get_database(), None);
    }

    #[test]
    fn should_not_fall_back_to_root_when_username_is_unset() {
        let options = ConnectOptions::new("db", &CredentialPair::default(), None);

        let mysql = mysql_options(&options);

        assert_eq!(mysql.get_username(), "");
    }

    #[tokio::test]
    async fn should_return_connection_error_when_host_is_unreachable() {
        let credentials = CredentialPair::new(Some("svc".to_string()), Some("secret".to_string()));
        let options = ConnectOptions::new("host.invalid", &credentials, Some("app"));

        let result = MySqlConnector::new().connect(&options).await;

        assert!(matches!(result, Err(ConnectionError::Failed(_))));
    }
}
