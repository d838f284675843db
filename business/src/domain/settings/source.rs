pub const DB_HOST: &str = "DB_HOST";
pub const DB_NAME: &str = "DB_NAME";
pub const DB_APP_USER: &str = "DB_APP_USER";
pub const DB_APP_PASSWORD: &str = "DB_APP_PASSWORD";
pub const DB_ADMIN_USER: &str = "DB_ADMIN_USER";
pub const DB_ADMIN_PASSWORD: &str = "DB_ADMIN_PASSWORD";
pub const DB_FUNC_USER: &str = "DB_FUNC_USER";
pub const DB_FUNC_PASSWORD: &str = "DB_FUNC_PASSWORD";
pub const DB_PART_USER: &str = "DB_PART_USER";
pub const DB_PART_PASSWORD: &str = "DB_PART_PASSWORD";
pub const SECRET_KEY: &str = "SECRET_KEY";

/// Host used when `DB_HOST` is unset: the database service name inside the
/// compose network.
pub const DEFAULT_DB_HOST: &str = "db";

/// Read-only key/value store backing the application settings.
///
/// No validation or type coercion happens here; a missing value is simply
/// `None` and callers that need it must check.
pub trait SettingsSource: Send + Sync {
    /// Raw stored value, if any. An empty string counts as present.
    fn value(&self, name: &str) -> Option<String>;

    /// Stored value, else `default`, else `None`.
    fn get(&self, name: &str, default: Option<&str>) -> Option<String> {
        self.value(name).or_else(|| default.map(str::to_string))
    }
}
