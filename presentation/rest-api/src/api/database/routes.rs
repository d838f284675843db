use std::sync::Arc;

use business::domain::connection::use_cases::get_connection::{
    GetConnectionParams, GetConnectionUseCase,
};
use persistence::db::current_database_user;
use poem_openapi::{OpenApi, payload::Json};
use sqlx::{Connection, MySqlConnection};

use crate::api::database::dto::DatabaseSessionResponse;
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::request_context::current_user;
use crate::api::tags::ApiTags;

pub struct DatabaseApi {
    get_connection_use_case: Arc<dyn GetConnectionUseCase<Connection = MySqlConnection>>,
}

impl DatabaseApi {
    pub fn new(
        get_connection_use_case: Arc<dyn GetConnectionUseCase<Connection = MySqlConnection>>,
    ) -> Self {
        Self {
            get_connection_use_case,
        }
    }
}

#[OpenApi]
impl DatabaseApi {
    /// Inspect the database session for the caller
    ///
    /// Opens a connection with the credentials that match the caller's role
    /// and reports the account the server authenticated it as.
    #[oai(path = "/db/session", method = "get", tag = "ApiTags::Database")]
    async fn session(&self) -> GetDatabaseSessionResponse {
        // Role is resolved here, at the request boundary, and passed down.
        let role = current_user().and_then(|user| user.role);

        let mut connection = match self
            .get_connection_use_case
            .execute(GetConnectionParams { role: role.clone() })
            .await
        {
            Ok(connection) => connection,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                return GetDatabaseSessionResponse::ServiceUnavailable(json);
            }
        };

        let result = current_database_user(&mut connection).await;
        if let Err(e) = connection.close().await {
            tracing::warn!("Failed to close database connection: {e}");
        }

        match result {
            Ok(database_user) => GetDatabaseSessionResponse::Ok(Json(DatabaseSessionResponse {
                role,
                database_user,
            })),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetDatabaseSessionResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetDatabaseSessionResponse {
    #[oai(status = 200)]
    Ok(Json<DatabaseSessionResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use business::domain::connection::errors::ConnectionError;
    use poem::Route;
    use poem::test::TestClient;
    use poem_openapi::OpenApiService;

    struct UnreachableDatabase;

    #[async_trait]
    impl GetConnectionUseCase for UnreachableDatabase {
        type Connection = MySqlConnection;

        async fn execute(
            &self,
            _params: GetConnectionParams,
        ) -> Result<MySqlConnection, ConnectionError> {
            Err(ConnectionError::failed("host unreachable"))
        }
    }

    #[tokio::test]
    async fn should_return_service_unavailable_when_connection_fails() {
        let api = DatabaseApi::new(Arc::new(UnreachableDatabase));
        let cli = TestClient::new(Route::new().nest("/", OpenApiService::new(api, "test", "0.1.0")));

        let resp = cli.get("/db/session").send().await;

        resp.assert_status(poem::http::StatusCode::SERVICE_UNAVAILABLE);
        let json = resp.json().await;
        json.value()
            .object()
            .get("message")
            .assert_string("connection.failed");
    }
}
