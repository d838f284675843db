use business::domain::settings::model::DatabaseSettings;
use business::domain::settings::source::SettingsSource;

/// Resolve the database host, name and the four credential pairs.
///
/// Missing values are not an error here; they surface when a connection
/// is attempted.
pub fn init_database_settings(settings: &dyn SettingsSource) -> DatabaseSettings {
    let database = DatabaseSettings::load(settings);

    if database.name.is_none() {
        tracing::warn!("DB_NAME is not set, connections will not select a database");
    }
    tracing::info!(
        host = %database.host,
        database = ?database.name,
        "Database settings loaded"
    );

    database
}
