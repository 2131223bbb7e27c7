use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, info};

use crate::app::AppPolicyConfig;
use crate::cache::CacheConfig;
use crate::database::DatabaseConfig;
use crate::error::ConfigError;
use crate::jwt::JwtConfig;
use crate::mail::MailConfig;
use crate::overlay::{Overlay, load_overlay, load_overlay_from};
use crate::resolve::Resolver;
use crate::security::SecurityConfig;
use crate::server::ServerConfig;
use crate::source::{EnvSource, ProcessEnv};
use crate::storage::StorageConfig;

/// Everything the service needs to start, resolved once at startup.
///
/// Built by [`Config::load`] or [`ConfigLoader`] and then only read. Share it
/// by reference (or behind an `Arc`) with the database, cache, storage and
/// mail clients.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub cache: CacheConfig,
    pub jwt: JwtConfig,
    pub storage: StorageConfig,
    pub mail: MailConfig,
    pub app: AppPolicyConfig,
    pub security: SecurityConfig,
}

impl Config {
    /// Applies the `.env` overlay, then loads and validates from the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        ConfigLoader::new().load()
    }

    /// Loads and validates from an arbitrary source. Touches no global state.
    pub fn from_source(source: &impl EnvSource) -> Result<Self, ConfigError> {
        let config = Self::resolve(source);
        config.validate()?;
        Ok(config)
    }

    /// Resolves every field without validating.
    pub fn resolve(source: &impl EnvSource) -> Self {
        let env = Resolver::new(source);
        Self {
            server: ServerConfig::resolve(&env),
            database: DatabaseConfig::resolve(&env),
            cache: CacheConfig::resolve(&env),
            jwt: JwtConfig::resolve(&env),
            storage: StorageConfig::resolve(&env),
            mail: MailConfig::resolve(&env),
            app: AppPolicyConfig::resolve(&env),
            security: SecurityConfig::resolve(&env),
        }
    }

    /// Checks the two values the service cannot run without.
    ///
    /// Reports the first failure: the database URL is checked before the JWT secret.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.url.trim().is_empty() {
            return Err(ConfigError::MissingDatabaseUrl);
        }
        if self.jwt.has_insecure_secret() {
            return Err(ConfigError::InsecureJwtSecret);
        }
        Ok(())
    }
}

/// Where the loader looks for the overlay file.
#[derive(Clone, Debug)]
enum OverlayFile {
    WorkingDir,
    Path(PathBuf),
}

/// Builder for loading a [`Config`].
///
/// # Example
///
/// ```no_run
/// use jobportal_config::ConfigLoader;
///
/// let config = ConfigLoader::new()
///     .overlay_path("config/local.env")
///     .load()?;
/// # Ok::<(), jobportal_config::ConfigError>(())
/// ```
#[derive(Clone, Debug)]
pub struct ConfigLoader<S = ProcessEnv> {
    source: S,
    overlay: Option<OverlayFile>,
}

impl ConfigLoader<ProcessEnv> {
    /// Reads the process environment after applying `.env` if one exists.
    pub fn new() -> Self {
        Self {
            source: ProcessEnv,
            overlay: Some(OverlayFile::WorkingDir),
        }
    }
}

impl Default for ConfigLoader<ProcessEnv> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: EnvSource> ConfigLoader<S> {
    /// Reads from `source` with no overlay file.
    pub fn from_source(source: S) -> Self {
        Self {
            source,
            overlay: None,
        }
    }

    /// Applies the overlay from `path` instead of `./.env`.
    pub fn overlay_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.overlay = Some(OverlayFile::Path(path.into()));
        self
    }

    /// Skips the overlay file and reads the source as it is.
    pub fn without_overlay(mut self) -> Self {
        self.overlay = None;
        self
    }

    /// Applies the overlay (if any), then resolves and validates.
    pub fn load(&self) -> Result<Config, ConfigError> {
        let overlay = match &self.overlay {
            Some(OverlayFile::WorkingDir) => Some(load_overlay()),
            Some(OverlayFile::Path(path)) => Some(load_overlay_from(path)),
            None => None,
        };
        if let Some(Overlay::Loaded(path)) = &overlay {
            debug!(path = %path.display(), "Resolving configuration with overlay");
        }

        let config = Config::from_source(&self.source)?;
        info!(
            environment = %config.server.environment,
            mode = %config.server.mode,
            port = %config.server.port,
            "Configuration loaded"
        );
        Ok(config)
    }
}
