//! Stripe connection settings.

use std::fmt;
use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "https://api.stripe.com";

/// API version every request is pinned to.
pub const API_VERSION: &str = "2023-08-16";

/// Matches the official client libraries' default network timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(80);

/// Settings needed to build a [`StripeClient`](crate::StripeClient).
#[derive(Clone)]
pub struct StripeConfig {
    pub(crate) secret_key: String,
    pub(crate) api_base: String,
    pub(crate) api_version: String,
    pub(crate) timeout: Duration,
}

impl StripeConfig {
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            secret_key: secret_key.into(),
            api_base: DEFAULT_API_BASE.to_string(),
            api_version: API_VERSION.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Points the client at a different host (local stub, egress proxy).
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// True for test-mode keys.
    pub fn is_test_mode(&self) -> bool {
        self.secret_key.starts_with("sk_test_") || self.secret_key.starts_with("rk_test_")
    }
}

impl fmt::Debug for StripeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StripeConfig")
            .field("secret_key", &"[redacted]")
            .field("api_base", &self.api_base)
            .field("api_version", &self.api_version)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StripeConfig::new("sk_test_123");
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.api_version, "2023-08-16");
        assert_eq!(config.timeout, Duration::from_secs(80));
        assert!(config.is_test_mode());
    }

    #[test]
    fn test_debug_hides_secret() {
        let config = StripeConfig::new("sk_live_secret");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("sk_live_secret"));
        assert!(!config.is_test_mode());
    }
}
