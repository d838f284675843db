use poem_openapi::Object;

/// Which database account a request ends up using.
#[derive(Debug, Clone, Object)]
pub struct DatabaseSessionResponse {
    /// Role read from the session token, as sent
    #[oai(skip_serializing_if_is_none)]
    pub role: Option<String>,
    /// Account reported by the server for this connection (CURRENT_USER())
    pub database_user: String,
}
