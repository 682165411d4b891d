use std::time::Duration;

/// Development default; production deployments set `FOLIO_API_URL`.
pub const DEFAULT_BASE_URL: &str = "http://localhost:1337/api";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_MAX_ATTEMPTS: u32 = 3;
const DEFAULT_BASE_DELAY: Duration = Duration::from_secs(1);
const DEFAULT_MAX_DELAY: Duration = Duration::from_secs(30);

/// Bounded exponential backoff for transient failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the initial attempt.
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            base_delay: DEFAULT_BASE_DELAY,
            max_delay: DEFAULT_MAX_DELAY,
        }
    }
}

impl RetryPolicy {
    /// Delay before retry number `attempt` (0-based): `base * 2^attempt`,
    /// capped at `max_delay`.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt);
        self.base_delay.saturating_mul(factor).min(self.max_delay)
    }
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub retry: RetryPolicy,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            retry: RetryPolicy::default(),
        }
    }
}

impl ApiConfig {
    /// Build from the environment, falling back to development defaults.
    ///
    /// `FOLIO_API_URL` switches endpoints, `FOLIO_API_TIMEOUT_MS` overrides
    /// the request timeout, `FOLIO_API_RETRIES` the retry budget.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(url) = env_string("FOLIO_API_URL") {
            config.base_url = url;
        }
        if let Some(timeout) = env_duration_ms("FOLIO_API_TIMEOUT_MS") {
            config.timeout = timeout;
        }
        if let Some(retries) = env_u32("FOLIO_API_RETRIES") {
            config.retry.max_attempts = retries;
        }
        config
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

fn env_string(var: &str) -> Option<String> {
    std::env::var(var)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn env_duration_ms(var: &str) -> Option<Duration> {
    env_string(var)
        .and_then(|v| v.parse::<u64>().ok())
        .filter(|ms| *ms > 0)
        .map(Duration::from_millis)
}

fn env_u32(var: &str) -> Option<u32> {
    env_string(var).and_then(|v| v.parse::<u32>().ok())
}
