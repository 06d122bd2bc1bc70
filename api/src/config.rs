use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Default number of posts the mock feed will ever generate
pub const DEFAULT_MAX_POSTS: i64 = 100;

/// Simulated network delays for the mock feed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyConfig {
    pub page: Duration,
    pub lookup: Duration,
    pub toggle: Duration,
}

impl LatencyConfig {
    /// No delays at all (tests)
    pub fn none() -> Self {
        Self {
            page: Duration::ZERO,
            lookup: Duration::ZERO,
            toggle: Duration::ZERO,
        }
    }
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            page: Duration::from_millis(500),
            lookup: Duration::from_millis(200),
            toggle: Duration::from_millis(300),
        }
    }
}

/// Settings the mock feed is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedSettings {
    /// Upper bound on generated post indices (exclusive)
    pub max_posts: i64,
    pub latency: LatencyConfig,
}

impl FeedSettings {
    /// Default bound with no latency
    pub fn instant() -> Self {
        Self {
            max_posts: DEFAULT_MAX_POSTS,
            latency: LatencyConfig::none(),
        }
    }
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            max_posts: DEFAULT_MAX_POSTS,
            latency: LatencyConfig::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub feed: FeedSettings,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = LatencyConfig::default();

        Self {
            port: env_or("PORT", 8080),
            feed: FeedSettings {
                max_posts: env_or("FEED_MAX_POSTS", DEFAULT_MAX_POSTS),
                latency: LatencyConfig {
                    page: env_millis("FEED_PAGE_LATENCY_MS", defaults.page),
                    lookup: env_millis("FEED_LOOKUP_LATENCY_MS", defaults.lookup),
                    toggle: env_millis("FEED_TOGGLE_LATENCY_MS", defaults.toggle),
                },
            },
        }
    }
}

fn env_or<T>(key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => parse_or(key, &raw, default),
        Err(_) => default,
    }
}

fn env_millis(key: &str, default: Duration) -> Duration {
    let millis = env_or(key, default.as_millis() as u64);
    Duration::from_millis(millis)
}

fn parse_or<T>(key: &str, raw: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
{
    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!("Ignoring invalid {}={:?}, using {}", key, raw, default);
            default
        }
    }
}
