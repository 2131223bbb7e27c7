/// Every variable the loader reads.
pub const CONFIG_KEYS: &[&str] = &[
    "PORT",
    "ENVIRONMENT",
    "GIN_MODE",
    "DATABASE_URL",
    "DB_MAX_CONNECTIONS",
    "DB_MAX_IDLE_TIME",
    "DB_MAX_LIFETIME",
    "REDIS_URL",
    "REDIS_PASSWORD",
    "REDIS_DB",
    "JWT_SECRET",
    "JWT_EXPIRY",
    "STORAGE_ENDPOINT",
    "STORAGE_ACCESS_KEY",
    "STORAGE_SECRET_KEY",
    "STORAGE_BUCKET",
    "STORAGE_USE_SSL",
    "MAX_RESUME_SIZE_MB",
    "MAX_IMAGE_SIZE_MB",
    "ALLOWED_IMAGE_TYPES",
    "ALLOWED_DOCUMENT_TYPES",
    "SMTP_ENABLED",
    "SMTP_HOST",
    "SMTP_PORT",
    "SMTP_USERNAME",
    "SMTP_PASSWORD",
    "SMTP_FROM_EMAIL",
    "SMTP_FROM_NAME",
    "SIGNUP_BONUS_POINTS",
    "PROFILE_COMPLETION_BONUS",
    "REFERRAL_BONUS_POINTS",
    "MAX_APPLICATIONS_PER_DAY",
    "FEATURED_JOB_DURATION_DAYS",
    "RATE_LIMIT_REQUESTS_PER_MINUTE",
    "RATE_LIMIT_BURST",
    "BCRYPT_COST",
    "CORS_ALLOWED_ORIGINS",
];

pub const TEST_SECRET: &str = "correct-horse-battery-staple";

/// Runs `f` with every config variable unset except `overrides`.
/// The previous environment is restored afterwards.
pub fn with_clean_env<R>(overrides: &[(&str, &str)], f: impl FnOnce() -> R) -> R {
    let vars: Vec<(&str, Option<&str>)> = CONFIG_KEYS
        .iter()
        .map(|key| {
            let value = overrides
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| *v);
            (*key, value)
        })
        .collect();

    temp_env::with_vars(vars, f)
}
