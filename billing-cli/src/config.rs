//! Configuration loading from environment.

use std::env;
use std::time::Duration;

use billing_stripe::StripeConfig;

/// Application configuration.
pub struct Config {
    pub secret_key: String,
    pub api_base: Option<String>,
    pub timeout: Option<Duration>,
    pub currency: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// `secret_key` comes from the command line and takes precedence over
    /// `STRIPE_SECRET_KEY`.
    pub fn from_env(secret_key: Option<String>) -> anyhow::Result<Self> {
        let secret_key = resolve_secret_key(secret_key, env::var("STRIPE_SECRET_KEY").ok())?;

        let api_base = env::var("STRIPE_API_BASE").ok();

        let timeout = env::var("STRIPE_TIMEOUT_SECS")
            .ok()
            .map(|secs| secs.parse().map(Duration::from_secs))
            .transpose()
            .map_err(|_| anyhow::anyhow!("STRIPE_TIMEOUT_SECS must be a whole number of seconds"))?;

        let currency = env::var("BILLING_CURRENCY")
            .unwrap_or_else(|_| billing_hex::DEFAULT_CURRENCY.to_string());

        Ok(Self {
            secret_key,
            api_base,
            timeout,
            currency,
        })
    }

    pub fn stripe(&self) -> StripeConfig {
        let mut config = StripeConfig::new(&self.secret_key);
        if let Some(base) = &self.api_base {
            config = config.with_api_base(base);
        }
        if let Some(timeout) = self.timeout {
            config = config.with_timeout(timeout);
        }
        config
    }
}

/// The `--secret-key` flag wins over `STRIPE_SECRET_KEY`.
fn resolve_secret_key(flag: Option<String>, env: Option<String>) -> anyhow::Result<String> {
    flag.or(env)
        .ok_or_else(|| anyhow::anyhow!("STRIPE_SECRET_KEY environment variable is required"))
}
