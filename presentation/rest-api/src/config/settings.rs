use std::collections::HashMap;

use business::domain::settings::source::SettingsSource;
use once_cell::sync::Lazy;

static DOTENV_LOADED: Lazy<bool> = Lazy::new(|| match dotenvy::dotenv() {
    Ok(path) => {
        tracing::debug!("Loaded environment from {}", path.display());
        true
    }
    Err(_) => false,
});

/// Snapshot of the process environment taken once at startup.
///
/// Environment variables:
/// - DB_HOST (default: "db"), DB_NAME
/// - DB_APP_USER / DB_APP_PASSWORD
/// - DB_ADMIN_USER / DB_ADMIN_PASSWORD
/// - DB_FUNC_USER / DB_FUNC_PASSWORD
/// - DB_PART_USER / DB_PART_PASSWORD
/// - SECRET_KEY
/// - SERVICE_IP, SERVICE_PORT, CORS_ALLOWED_ORIGINS
#[derive(Debug, Clone, Default)]
pub struct EnvSettings {
    values: HashMap<String, String>,
}

impl EnvSettings {
    /// Loads `.env` (at most once per process) and snapshots the environment.
    /// Variables already set in the process take precedence over the file.
    pub fn load() -> Self {
        Lazy::force(&DOTENV_LOADED);
        Self::from_vars(std::env::vars())
    }

    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: vars
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl SettingsSource for EnvSettings {
    fn value(&self, name: &str) -> Option<String> {
        self.values.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::settings::source::{DB_HOST, DEFAULT_DB_HOST};

    #[test]
    fn should_return_default_when_unset() {
        let settings = EnvSettings::from_vars(Vec::<(String, String)>::new());

        assert_eq!(
            settings.get(DB_HOST, Some(DEFAULT_DB_HOST)),
            Some("db".to_string())
        );
    }

    #[test]
    fn should_return_exact_value_when_set() {
        let settings = EnvSettings::from_vars([("DB_HOST", "dbserver")]);

        assert_eq!(
            settings.get(DB_HOST, Some(DEFAULT_DB_HOST)),
            Some("dbserver".to_string())
        );
    }

    #[test]
    fn should_return_none_without_value_or_default() {
        let settings = EnvSettings::from_vars([("DB_HOST", "dbserver")]);

        assert_eq!(settings.get("DB_NAME", None), None);
    }

    #[test]
    fn should_load_twice_without_side_effects() {
        let first = EnvSettings::load();
        let second = EnvSettings::load();

        assert_eq!(first.value("PATH"), second.value("PATH"));
    }
}
