use crate::domain::access::role::Role;

use super::source::{
    DB_ADMIN_PASSWORD, DB_ADMIN_USER, DB_APP_PASSWORD, DB_APP_USER, DB_FUNC_PASSWORD,
    DB_FUNC_USER, DB_HOST, DB_NAME, DB_PART_PASSWORD, DB_PART_USER, DEFAULT_DB_HOST,
    SettingsSource,
};

/// A database username/password combination. Either half may be missing when
/// the corresponding variable is unset; the database client decides what that
/// means.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CredentialPair {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl CredentialPair {
    pub fn new(username: Option<String>, password: Option<String>) -> Self {
        Self { username, password }
    }

    fn load(source: &dyn SettingsSource, user_key: &str, password_key: &str) -> Self {
        Self::new(source.get(user_key, None), source.get(password_key, None))
    }
}

impl std::fmt::Debug for CredentialPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialPair")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .finish()
    }
}

/// Which of the four fixed credential pairs was picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CredentialKind {
    Application,
    Administrator,
    Staff,
    Participant,
}

impl CredentialKind {
    /// Total mapping: no role means application-level access.
    pub fn for_role(role: Option<Role>) -> Self {
        match role {
            Some(Role::Administrator) => CredentialKind::Administrator,
            Some(Role::Staff) => CredentialKind::Staff,
            Some(Role::Participant) => CredentialKind::Participant,
            None => CredentialKind::Application,
        }
    }
}

impl std::fmt::Display for CredentialKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CredentialKind::Application => write!(f, "application"),
            CredentialKind::Administrator => write!(f, "administrator"),
            CredentialKind::Staff => write!(f, "staff"),
            CredentialKind::Participant => write!(f, "participant"),
        }
    }
}

/// Database settings resolved once at startup and shared read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseSettings {
    pub host: String,
    pub name: Option<String>,
    pub application: CredentialPair,
    pub administrator: CredentialPair,
    pub staff: CredentialPair,
    pub participant: CredentialPair,
}

impl DatabaseSettings {
    pub fn load(source: &dyn SettingsSource) -> Self {
        Self {
            host: source
                .get(DB_HOST, Some(DEFAULT_DB_HOST))
                .unwrap_or_else(|| DEFAULT_DB_HOST.to_string()),
            name: source.get(DB_NAME, None),
            application: CredentialPair::load(source, DB_APP_USER, DB_APP_PASSWORD),
            administrator: CredentialPair::load(source, DB_ADMIN_USER, DB_ADMIN_PASSWORD),
            staff: CredentialPair::load(source, DB_FUNC_USER, DB_FUNC_PASSWORD),
            participant: CredentialPair::load(source, DB_PART_USER, DB_PART_PASSWORD),
        }
    }

    pub fn credentials(&self, kind: CredentialKind) -> &CredentialPair {
        match kind {
            CredentialKind::Application => &self.application,
            CredentialKind::Administrator => &self.administrator,
            CredentialKind::Staff => &self.staff,
            CredentialKind::Participant => &self.participant,
        }
    }

    pub fn credentials_for(&self, role: Option<Role>) -> (CredentialKind, &CredentialPair) {
        let kind = CredentialKind::for_role(role);
        (kind, self.credentials(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashMap;

    struct MapSource(HashMap<String, String>);

    impl MapSource {
        fn new(pairs: &[(&str, &str)]) -> Self {
            Self(
                pairs
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            )
        }
    }

    impl SettingsSource for MapSource {
        fn value(&self, name: &str) -> Option<String> {
            self.0.get(name).cloned()
        }
    }

    fn full_settings() -> DatabaseSettings {
        DatabaseSettings::load(&MapSource::new(&[
            ("DB_HOST", "dbserver"),
            ("DB_NAME", "app"),
            ("DB_APP_USER", "app_user"),
            ("DB_APP_PASSWORD", "app_pw"),
            ("DB_ADMIN_USER", "admin_user"),
            ("DB_ADMIN_PASSWORD", "admin_pw"),
            ("DB_FUNC_USER", "svc"),
            ("DB_FUNC_PASSWORD", "secret"),
            ("DB_PART_USER", "part_user"),
            ("DB_PART_PASSWORD", "part_pw"),
        ]))
    }

    #[test]
    fn should_default_host_when_unset() {
        let settings = DatabaseSettings::load(&MapSource::new(&[]));

        assert_eq!(settings.host, "db");
        assert_eq!(settings.name, None);
        assert_eq!(settings.application, CredentialPair::default());
    }

    #[test]
    fn should_use_exact_environment_values() {
        let settings = full_settings();

        assert_eq!(settings.host, "dbserver");
        assert_eq!(settings.name.as_deref(), Some("app"));
        assert_eq!(settings.staff.username.as_deref(), Some("svc"));
        assert_eq!(settings.staff.password.as_deref(), Some("secret"));
    }

    #[test]
    fn should_keep_empty_host_as_set() {
        let settings = DatabaseSettings::load(&MapSource::new(&[("DB_HOST", "")]));

        assert_eq!(settings.host, "");
    }

    #[test]
    fn should_select_pair_per_role() {
        let settings = full_settings();

        let (kind, pair) = settings.credentials_for(Some(Role::Administrator));
        assert_eq!(kind, CredentialKind::Administrator);
        assert_eq!(pair.username.as_deref(), Some("admin_user"));
        assert_eq!(pair.password.as_deref(), Some("admin_pw"));

        let (kind, pair) = settings.credentials_for(Some(Role::Staff));
        assert_eq!(kind, CredentialKind::Staff);
        assert_eq!(pair.username.as_deref(), Some("svc"));

        let (kind, pair) = settings.credentials_for(Some(Role::Participant));
        assert_eq!(kind, CredentialKind::Participant);
        assert_eq!(pair.username.as_deref(), Some("part_user"));

        let (kind, pair) = settings.credentials_for(None);
        assert_eq!(kind, CredentialKind::Application);
        assert_eq!(pair.username.as_deref(), Some("app_user"));
    }

    #[test]
    fn should_not_print_password_in_debug_output() {
        let pair = CredentialPair::new(Some("svc".to_string()), Some("secret".to_string()));

        let debug = format!("{:?}", pair);

        assert!(debug.contains("svc"));
        assert!(!debug.contains("secret"));
    }

    proptest! {
        #[test]
        fn unknown_role_strings_select_application_pair(value in "\\PC*") {
            prop_assume!(
                !["Administrador", "Administrator", "Funcionario", "Participante"]
                    .contains(&value.as_str())
            );
            let settings = full_settings();

            let (kind, pair) = settings.credentials_for(Role::parse(&value));

            prop_assert_eq!(kind, CredentialKind::Application);
            prop_assert_eq!(pair, &settings.application);
        }

        #[test]
        fn selection_is_deterministic(value in "\\PC*") {
            let settings = full_settings();

            let first = settings.credentials_for(Role::parse(&value));
            let second = settings.credentials_for(Role::parse(&value));

            prop_assert_eq!(first, second);
        }
    }
}
