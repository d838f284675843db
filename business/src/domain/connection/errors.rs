/// Errors raised while opening a database connection.
/// The client error is kept as the source, untouched.
#[derive(Debug, thiserror::Error)]
pub enum ConnectionError {
    #[error("connection.failed")]
    Failed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ConnectionError {
    pub fn failed(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        ConnectionError::Failed(source.into())
    }
}
