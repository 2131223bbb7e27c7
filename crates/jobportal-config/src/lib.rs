//! # JobPortal Config
//!
//! Configuration for the JobPortal API, loaded from environment variables.
//!
//! Every field has a documented default. Values that are unset or fail to
//! parse fall back to that default instead of failing the load. Only two
//! values are validated:
//!
//! - `DATABASE_URL` must not be empty
//! - `JWT_SECRET` must be set and must not be the published placeholder
//!
//! Sections:
//!
//! - [`server`]: listen port, environment name, serving mode
//! - [`database`]: PostgreSQL connection string and pool settings
//! - [`cache`]: Redis connection settings
//! - [`jwt`]: token signing secret and expiry
//! - [`storage`]: object storage credentials and upload limits
//! - [`mail`]: SMTP settings
//! - [`app`]: bonus points, application caps, rate limits
//! - [`security`]: bcrypt cost and CORS origins
//!
//! # Example
//!
//! ```ignore
//! use jobportal_config::Config;
//!
//! // Applies `.env` if present, then reads the process environment
//! let config = Config::load()?;
//! println!("listening on {}", config.server.port);
//! ```
//!
//! Tests and embedders can read from a map instead of the process environment:
//!
//! ```
//! use std::collections::HashMap;
//! use jobportal_config::Config;
//!
//! let env = HashMap::from([("JWT_SECRET", "correct-horse-battery-staple")]);
//! let config = Config::from_source(&env).unwrap();
//! assert_eq!(config.database.max_connections, 25);
//! ```

pub mod app;
pub mod cache;
pub mod config;
pub mod database;
pub mod error;
pub mod jwt;
pub mod mail;
pub mod overlay;
pub mod resolve;
pub mod security;
pub mod server;
pub mod source;
pub mod storage;

// Re-export commonly used types at crate root
pub use app::AppPolicyConfig;
pub use cache::CacheConfig;
pub use config::{Config, ConfigLoader};
pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use jwt::{JwtConfig, PLACEHOLDER_JWT_SECRET};
pub use mail::MailConfig;
pub use overlay::{DEFAULT_OVERLAY_FILE, Overlay, load_overlay, load_overlay_from};
pub use security::SecurityConfig;
pub use server::ServerConfig;
pub use source::{EnvSource, ProcessEnv};
pub use storage::StorageConfig;
