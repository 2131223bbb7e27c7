use std::time::Duration;

use jobportal_config::Config;

/// Renders the non-secret parts of a configuration for operators.
///
/// The database connection string, passwords, storage keys, the JWT secret
/// and any credentials embedded in the cache URL are never printed.
pub fn summary(config: &Config) -> String {
    let c = config;

    let mail = if c.mail.enabled {
        format!(
            "{}:{} as {} <{}>",
            c.mail.host, c.mail.port, c.mail.from_name, c.mail.from_email
        )
    } else {
        "disabled".to_string()
    };

    [
        "✅ Configuration is valid".to_string(),
        format!(
            "   Server:   port {} ({} / {})",
            c.server.port, c.server.environment, c.server.mode
        ),
        format!(
            "   Database: {} max connections, idle {}, lifetime {}",
            c.database.max_connections,
            humanize(c.database.max_idle_time),
            humanize(c.database.max_lifetime)
        ),
        format!(
            "   Cache:    {} (db {})",
            c.cache.url_without_credentials(),
            c.cache.db_index
        ),
        format!("   JWT:      expiry {}", humanize(c.jwt.expiry)),
        format!(
            "   Storage:  {} bucket {} (tls: {}), images [{}], documents [{}]",
            c.storage.endpoint,
            c.storage.bucket,
            c.storage.use_tls,
            c.storage.allowed_image_types.join(", "),
            c.storage.allowed_document_types.join(", ")
        ),
        format!("   Mail:     {mail}"),
        format!(
            "   Limits:   {} applications/day, {} req/min (burst {})",
            c.app.max_applications_per_day,
            c.app.rate_limit_requests_per_minute,
            c.app.rate_limit_burst
        ),
        format!("   CORS:     {}", c.security.cors_allowed_origins.join(", ")),
    ]
    .join("\n")
}

fn humanize(d: Duration) -> String {
    humantime::format_duration(d).to_string()
}
