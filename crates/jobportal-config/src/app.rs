//! Business policy knobs.
//!
//! These values are only carried here; the services that award points, cap
//! applications and enforce rate limits read them from [`AppPolicyConfig`].

use std::time::Duration;

use serde::Serialize;

use crate::resolve::Resolver;

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// Application policy configuration.
///
/// # Environment Variables
///
/// - `SIGNUP_BONUS_POINTS`: Default 50
/// - `PROFILE_COMPLETION_BONUS`: Default 100
/// - `REFERRAL_BONUS_POINTS`: Default 200
/// - `MAX_APPLICATIONS_PER_DAY`: Default 10
/// - `FEATURED_JOB_DURATION_DAYS`: Default 30
/// - `RATE_LIMIT_REQUESTS_PER_MINUTE`: Default 60
/// - `RATE_LIMIT_BURST`: Default 10
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AppPolicyConfig {
    pub signup_bonus_points: i64,
    pub profile_completion_bonus: i64,
    pub referral_bonus_points: i64,
    pub max_applications_per_day: i64,
    pub featured_job_duration_days: i64,

    /// Sustained request rate per client.
    pub rate_limit_requests_per_minute: i64,

    /// Requests a client may make above the sustained rate before throttling.
    pub rate_limit_burst: i64,
}

impl AppPolicyConfig {
    pub(crate) fn resolve(env: &Resolver<'_>) -> Self {
        Self {
            signup_bonus_points: env.integer("SIGNUP_BONUS_POINTS", 50),
            profile_completion_bonus: env.integer("PROFILE_COMPLETION_BONUS", 100),
            referral_bonus_points: env.integer("REFERRAL_BONUS_POINTS", 200),
            max_applications_per_day: env.integer("MAX_APPLICATIONS_PER_DAY", 10),
            featured_job_duration_days: env.integer("FEATURED_JOB_DURATION_DAYS", 30),
            rate_limit_requests_per_minute: env.integer("RATE_LIMIT_REQUESTS_PER_MINUTE", 60),
            rate_limit_burst: env.integer("RATE_LIMIT_BURST", 10),
        }
    }

    /// How long a job stays featured. Zero when the day count is negative.
    pub fn featured_job_duration(&self) -> Duration {
        let days = u64::try_from(self.featured_job_duration_days).unwrap_or(0);
        Duration::from_secs(days.saturating_mul(SECONDS_PER_DAY))
    }
}

impl Default for AppPolicyConfig {
    fn default() -> Self {
        Self {
            signup_bonus_points: 50,
            profile_completion_bonus: 100,
            referral_bonus_points: 200,
            max_applications_per_day: 10,
            featured_job_duration_days: 30,
            rate_limit_requests_per_minute: 60,
            rate_limit_burst: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = AppPolicyConfig::default();
        assert_eq!(config.signup_bonus_points, 50);
        assert_eq!(config.profile_completion_bonus, 100);
        assert_eq!(config.referral_bonus_points, 200);
        assert_eq!(config.max_applications_per_day, 10);
        assert_eq!(config.featured_job_duration_days, 30);
        assert_eq!(config.rate_limit_requests_per_minute, 60);
        assert_eq!(config.rate_limit_burst, 10);
    }

    #[test]
    fn test_resolve_matches_default_when_unset() {
        let env: HashMap<&str, &str> = HashMap::new();
        assert_eq!(
            AppPolicyConfig::resolve(&Resolver::new(&env)),
            AppPolicyConfig::default()
        );
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let env = HashMap::from([
            ("SIGNUP_BONUS_POINTS", "fifty"),
            ("RATE_LIMIT_BURST", "1e3"),
        ]);
        let config = AppPolicyConfig::resolve(&Resolver::new(&env));
        assert_eq!(config.signup_bonus_points, 50);
        assert_eq!(config.rate_limit_burst, 10);
    }

    #[test]
    fn test_negative_values_are_kept() {
        let env = HashMap::from([
            ("MAX_APPLICATIONS_PER_DAY", "-3"),
            ("FEATURED_JOB_DURATION_DAYS", "-1"),
        ]);
        let config = AppPolicyConfig::resolve(&Resolver::new(&env));
        assert_eq!(config.max_applications_per_day, -3);
        assert_eq!(config.featured_job_duration_days, -1);
        assert_eq!(config.featured_job_duration(), Duration::ZERO);
    }

    #[test]
    fn test_featured_job_duration() {
        let env = HashMap::from([("FEATURED_JOB_DURATION_DAYS", "7")]);
        let config = AppPolicyConfig::resolve(&Resolver::new(&env));
        assert_eq!(config.featured_job_duration(), Duration::from_secs(7 * 86400));
    }

    #[test]
    fn test_config_debug() {
        let config = AppPolicyConfig::default();
        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("AppPolicyConfig"));
        assert!(debug_str.contains("rate_limit_burst"));
    }
}
