use business::domain::settings::source::SettingsSource;

/// Server configuration for HTTP listener
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: String,
}

impl ServerConfig {
    /// Environment variables:
    /// - SERVICE_IP: IP address to bind (default: "127.0.0.1")
    /// - SERVICE_PORT: Port to bind (default: "8080")
    pub fn from_settings(settings: &dyn SettingsSource) -> Self {
        let ip = settings
            .get("SERVICE_IP", Some("127.0.0.1"))
            .unwrap_or_default();
        let port = settings.get("SERVICE_PORT", Some("8080")).unwrap_or_default();

        Self { ip, port }
    }

    /// Get the bind address as "ip:port"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}
