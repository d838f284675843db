use business::domain::settings::source::SettingsSource;
use poem::middleware::Cors;

const DEFAULT_ORIGINS: &str = "http://localhost:5173,http://localhost:3000";

/// Initialize CORS middleware for the reservations frontend
///
/// Environment variables:
/// - CORS_ALLOWED_ORIGINS: Comma-separated list of allowed origins
///   (default: "http://localhost:5173,http://localhost:3000")
pub fn init_cors(settings: &dyn SettingsSource) -> Cors {
    let allowed_origins = settings
        .get("CORS_ALLOWED_ORIGINS", Some(DEFAULT_ORIGINS))
        .unwrap_or_default();

    Cors::new()
        .allow_origins(allowed_origins.split(',').map(str::trim))
        .allow_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allow_headers(vec!["content-type", "authorization"])
        .allow_credentials(true)
}
