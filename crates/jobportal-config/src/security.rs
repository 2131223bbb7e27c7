use serde::Serialize;

use crate::resolve::{Resolver, split_list};

const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000";

/// Password hashing cost and CORS allow-list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SecurityConfig {
    pub bcrypt_cost: i64,
    pub cors_allowed_origins: Vec<String>,
}

impl SecurityConfig {
    pub(crate) fn resolve(env: &Resolver<'_>) -> Self {
        Self {
            bcrypt_cost: env.integer("BCRYPT_COST", 12),
            cors_allowed_origins: env.list("CORS_ALLOWED_ORIGINS", DEFAULT_CORS_ORIGINS),
        }
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: 12,
            cors_allowed_origins: split_list(DEFAULT_CORS_ORIGINS),
        }
    }
}
