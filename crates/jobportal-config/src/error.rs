use thiserror::Error;

/// Raised when the loaded configuration cannot safely be used to start the service.
///
/// Parse failures on individual fields never produce this error; they fall
/// back to their defaults. Only the load-bearing values are checked.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("DATABASE_URL is empty: database connection string is required")]
    MissingDatabaseUrl,

    #[error("JWT_SECRET is empty or the placeholder: signing secret must be set to a secure value")]
    InsecureJwtSecret,
}
