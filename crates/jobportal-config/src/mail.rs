use serde::Serialize;

use crate::resolve::Resolver;

/// SMTP settings for outgoing notifications.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MailConfig {
    pub enabled: bool,
    pub host: String,
    pub port: i64,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub from_email: String,
    pub from_name: String,
}

impl MailConfig {
    pub(crate) fn resolve(env: &Resolver<'_>) -> Self {
        Self {
            enabled: env.boolean("SMTP_ENABLED", false),
            host: env.string("SMTP_HOST", ""),
            port: env.integer("SMTP_PORT", 587),
            username: env.string("SMTP_USERNAME", ""),
            password: env.string("SMTP_PASSWORD", ""),
            from_email: env.string("SMTP_FROM_EMAIL", "noreply@jobportal101.com"),
            from_name: env.string("SMTP_FROM_NAME", "JobPortal101"),
        }
    }
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            host: String::new(),
            port: 587,
            username: String::new(),
            password: String::new(),
            from_email: "noreply@jobportal101.com".into(),
            from_name: "JobPortal101".into(),
        }
    }
}
