//! Redis cache configuration.

use serde::{Serialize, Serializer};

use crate::resolve::Resolver;

/// Redis connection settings.
///
/// # Environment Variables
///
/// - `REDIS_URL`: Redis connection URL (default: `redis://localhost:6379`)
/// - `REDIS_PASSWORD`: auth password (default: empty)
/// - `REDIS_DB`: logical database index (default: `0`)
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CacheConfig {
    /// Connection URL. Serialized without its `user:password@` part.
    #[serde(serialize_with = "serialize_without_credentials")]
    pub url: String,

    #[serde(skip_serializing)]
    pub password: String,

    pub db_index: i64,
}

impl CacheConfig {
    pub(crate) fn resolve(env: &Resolver<'_>) -> Self {
        Self {
            url: env.string("REDIS_URL", "redis://localhost:6379"),
            password: env.string("REDIS_PASSWORD", ""),
            db_index: env.integer("REDIS_DB", 0),
        }
    }

    /// The connection URL with any userinfo removed, safe to log or print.
    ///
    /// `redis://:pw@cache:6379/0` becomes `redis://cache:6379/0`.
    pub fn url_without_credentials(&self) -> String {
        strip_userinfo(&self.url)
    }
}

fn strip_userinfo(url: &str) -> String {
    let (scheme, rest) = match url.split_once("://") {
        Some((scheme, rest)) => (Some(scheme), rest),
        None => (None, url),
    };
    let authority_end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let (authority, tail) = rest.split_at(authority_end);
    let host = authority.rsplit_once('@').map_or(authority, |(_, host)| host);

    match scheme {
        Some(scheme) => format!("{scheme}://{host}{tail}"),
        None => format!("{host}{tail}"),
    }
}

fn serialize_without_credentials<S>(url: &str, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&strip_userinfo(url))
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            url: "redis://localhost:6379".into(),
            password: String::new(),
            db_index: 0,
        }
    }
}
