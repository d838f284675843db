use business::domain::settings::source::{SECRET_KEY, SettingsSource};

/// Key used to sign and verify session tokens.
#[derive(Clone)]
pub struct SecurityConfig {
    pub secret_key: Option<String>,
}

impl SecurityConfig {
    pub fn from_settings(settings: &dyn SettingsSource) -> Self {
        let secret_key = settings.get(SECRET_KEY, None);
        if secret_key.is_none() {
            tracing::warn!("SECRET_KEY is not set, all requests will be treated as anonymous");
        }
        Self { secret_key }
    }
}
