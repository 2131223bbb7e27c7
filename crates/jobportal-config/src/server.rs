use serde::Serialize;

use crate::resolve::Resolver;

/// HTTP server settings.
///
/// # Environment Variables
///
/// - `PORT`: listen port (default: `8080`)
/// - `ENVIRONMENT`: deployment name (default: `development`)
/// - `GIN_MODE`: serving mode, `debug` or `release` (default: `debug`)
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ServerConfig {
    pub port: String,
    pub environment: String,
    pub mode: String,
}

impl ServerConfig {
    pub(crate) fn resolve(env: &Resolver<'_>) -> Self {
        Self {
            port: env.string("PORT", "8080"),
            environment: env.string("ENVIRONMENT", "development"),
            mode: env.string("GIN_MODE", "debug"),
        }
    }

    /// True when `ENVIRONMENT` is `production`, ignoring case.
    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case("production")
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: "8080".into(),
            environment: "development".into(),
            mode: "debug".into(),
        }
    }
}
