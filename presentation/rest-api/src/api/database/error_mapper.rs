use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::connection::errors::ConnectionError;
use persistence::db::DatabaseError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ConnectionError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match &self {
            ConnectionError::Failed(_) => (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorResponse::new("ConnectionError", "connection.failed")),
            ),
        }
    }
}

impl IntoErrorResponse for DatabaseError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match &self {
            DatabaseError::QueryError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("InternalError", "database.query_error")),
            ),
        }
    }
}
