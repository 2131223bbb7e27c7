use std::time::Duration;

use serde::Serialize;

use crate::resolve::Resolver;

/// Published default for `JWT_SECRET`. Loading fails while it is still in use.
pub const PLACEHOLDER_JWT_SECRET: &str = "your-secret-key";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct JwtConfig {
    #[serde(skip_serializing)]
    pub secret: String,
    #[serde(with = "humantime_serde")]
    pub expiry: Duration,
}

impl JwtConfig {
    pub(crate) fn resolve(env: &Resolver<'_>) -> Self {
        Self {
            secret: env.required_string("JWT_SECRET", PLACEHOLDER_JWT_SECRET),
            expiry: env.duration("JWT_EXPIRY", "24h"),
        }
    }

    /// True when the secret is empty or still the published placeholder.
    pub fn has_insecure_secret(&self) -> bool {
        self.secret.trim().is_empty() || self.secret == PLACEHOLDER_JWT_SECRET
    }
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: PLACEHOLDER_JWT_SECRET.into(),
            expiry: Duration::from_secs(24 * 60 * 60),
        }
    }
}
