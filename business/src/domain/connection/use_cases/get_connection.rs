use async_trait::async_trait;

use crate::domain::connection::errors::ConnectionError;

pub struct GetConnectionParams {
    /// Raw role value. `None` means "look it up in the request context".
    pub role: Option<String>,
}

#[async_trait]
pub trait GetConnectionUseCase: Send + Sync {
    type Connection: Send;

    async fn execute(
        &self,
        params: GetConnectionParams,
    ) -> Result<Self::Connection, ConnectionError>;
}
