// Environment-driven configuration

use std::env;
use std::fmt::Display;
use std::str::FromStr;
use tracing::warn;

/// Reads `key` from the environment, falling back to `default` when the
/// variable is unset or does not parse.
fn env_or<T>(key: &str, default: T) -> T
where
    T: FromStr + Display,
{
    match env::var(key) {
        Ok(raw) => match raw.trim().parse::<T>() {
            Ok(value) => value,
            Err(_) => {
                warn!(key = key, value = %raw, default = %default, "Ignoring unparseable setting");
                default
            }
        },
        Err(_) => default,
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub database_url: String,
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            database_url: "sqlite://rdap.db".to_string(),
            cors_origins: vec!["http://localhost:3000".to_string()],
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let cors_origins = env::var("CORS_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or(defaults.cors_origins);

        Self {
            port: env_or("PORT", defaults.port),
            database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            cors_origins,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AdmissionConfig {
    /// Ceiling on concurrently executing protocol operations.
    pub max_concurrent: usize,
}

impl Default for AdmissionConfig {
    fn default() -> Self {
        Self { max_concurrent: 100 }
    }
}

impl AdmissionConfig {
    pub fn from_env() -> Self {
        let max_concurrent = env_or(
            "RDAP_MAX_CONCURRENT_REQUESTS",
            Self::default().max_concurrent,
        );
        Self::with_ceiling(max_concurrent)
    }

    pub fn with_ceiling(max_concurrent: usize) -> Self {
        if max_concurrent == 0 {
            warn!("RDAP_MAX_CONCURRENT_REQUESTS must be at least 1, using 1");
        }
        Self {
            max_concurrent: max_concurrent.max(1),
        }
    }
}

/// Inclusive integer window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntRange {
    pub min: i64,
    pub max: i64,
}

impl IntRange {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Falls back to `default` when the configured window is inverted.
    fn from_env(prefix: &str, default: IntRange) -> Self {
        let range = Self {
            min: env_or(&format!("{prefix}_MIN"), default.min),
            max: env_or(&format!("{prefix}_MAX"), default.max),
        };
        if range.min > range.max {
            warn!(
                prefix = prefix,
                min = range.min,
                max = range.max,
                "Ignoring inverted numeric window"
            );
            return default;
        }
        range
    }
}

/// Maximum lengths and numeric windows enforced by the validators.
#[derive(Debug, Clone)]
pub struct ValidationLimits {
    pub handle_max_length: usize,
    pub ldh_name_max_length: usize,
    pub unicode_name_max_length: usize,
    pub idn_table_max_length: usize,
    pub lang_max_length: usize,
    pub port43_max_length: usize,
    pub entity_name_max_length: usize,
    pub digest_max_length: usize,
    pub event_actor_max_length: usize,
    pub search_term_max_length: usize,
    /// Characters required before a `*` in a search pattern.
    pub min_search_prefix: usize,
    pub search_result_limit: u32,
    pub max_sig_life: IntRange,
    pub key_tag: IntRange,
    pub algorithm: IntRange,
    pub digest_type: IntRange,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            handle_max_length: 100,
            ldh_name_max_length: 255,
            unicode_name_max_length: 255,
            idn_table_max_length: 64,
            lang_max_length: 64,
            port43_max_length: 255,
            entity_name_max_length: 255,
            digest_max_length: 512,
            event_actor_max_length: 255,
            search_term_max_length: 255,
            min_search_prefix: 1,
            search_result_limit: 100,
            max_sig_life: IntRange::new(0, i32::MAX as i64),
            key_tag: IntRange::new(0, 65_535),
            algorithm: IntRange::new(0, 255),
            digest_type: IntRange::new(0, 255),
        }
    }
}

impl ValidationLimits {
    pub fn from_env() -> Self {
        let d = Self::default();
        Self {
            handle_max_length: env_or("RDAP_HANDLE_MAX_LENGTH", d.handle_max_length),
            ldh_name_max_length: env_or("RDAP_LDH_NAME_MAX_LENGTH", d.ldh_name_max_length),
            unicode_name_max_length: env_or(
                "RDAP_UNICODE_NAME_MAX_LENGTH",
                d.unicode_name_max_length,
            ),
            idn_table_max_length: env_or("RDAP_IDN_TABLE_MAX_LENGTH", d.idn_table_max_length),
            lang_max_length: env_or("RDAP_LANG_MAX_LENGTH", d.lang_max_length),
            port43_max_length: env_or("RDAP_PORT43_MAX_LENGTH", d.port43_max_length),
            entity_name_max_length: env_or(
                "RDAP_ENTITY_NAME_MAX_LENGTH",
                d.entity_name_max_length,
            ),
            digest_max_length: env_or("RDAP_DIGEST_MAX_LENGTH", d.digest_max_length),
            event_actor_max_length: env_or(
                "RDAP_EVENT_ACTOR_MAX_LENGTH",
                d.event_actor_max_length,
            ),
            search_term_max_length: env_or(
                "RDAP_SEARCH_TERM_MAX_LENGTH",
                d.search_term_max_length,
            ),
            min_search_prefix: env_or("RDAP_MIN_SEARCH_PREFIX", d.min_search_prefix),
            search_result_limit: env_or("RDAP_SEARCH_RESULT_LIMIT", d.search_result_limit),
            max_sig_life: IntRange::from_env("RDAP_MAX_SIG_LIFE", d.max_sig_life),
            key_tag: IntRange::from_env("RDAP_KEY_TAG", d.key_tag),
            algorithm: IntRange::from_env("RDAP_ALGORITHM", d.algorithm),
            digest_type: IntRange::from_env("RDAP_DIGEST_TYPE", d.digest_type),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub admission: AdmissionConfig,
    pub limits: ValidationLimits,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            admission: AdmissionConfig::from_env(),
            limits: ValidationLimits::from_env(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_ceiling_is_raised_to_one() {
        assert_eq!(AdmissionConfig::with_ceiling(0).max_concurrent, 1);
        assert_eq!(AdmissionConfig::with_ceiling(7).max_concurrent, 7);
    }

    #[test]
    fn test_env_override_and_fallback() {
        env::set_var("RDAP_TEST_ONLY_LIMIT", "42");
        assert_eq!(env_or("RDAP_TEST_ONLY_LIMIT", 5usize), 42);

        env::set_var("RDAP_TEST_ONLY_LIMIT", "forty-two");
        assert_eq!(env_or("RDAP_TEST_ONLY_LIMIT", 5usize), 5);

        env::remove_var("RDAP_TEST_ONLY_LIMIT");
        assert_eq!(env_or("RDAP_TEST_ONLY_LIMIT", 5usize), 5);
    }

    #[test]
    fn test_default_windows() {
        let limits = ValidationLimits::default();
        assert_eq!(limits.max_sig_life.min, 0);
        assert_eq!(limits.key_tag.max, 65_535);
    }

    #[test]
    fn test_inverted_window_falls_back_to_default() {
        let default = IntRange::new(0, 255);
        env::set_var("RDAP_TEST_ONLY_WINDOW_MIN", "300");
        env::set_var("RDAP_TEST_ONLY_WINDOW_MAX", "10");
        assert_eq!(IntRange::from_env("RDAP_TEST_ONLY_WINDOW", default), default);

        env::set_var("RDAP_TEST_ONLY_WINDOW_MIN", "10");
        env::set_var("RDAP_TEST_ONLY_WINDOW_MAX", "20");
        assert_eq!(
            IntRange::from_env("RDAP_TEST_ONLY_WINDOW", default),
            IntRange::new(10, 20)
        );

        env::remove_var("RDAP_TEST_ONLY_WINDOW_MIN");
        env::remove_var("RDAP_TEST_ONLY_WINDOW_MAX");
    }
}
