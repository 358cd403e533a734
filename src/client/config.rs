//! Client configuration options.

use std::time::Duration;

use url::Url;

use crate::{Environment, Error, Result};

/// Default request timeout, applied to the whole exchange.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default `User-Agent` header value.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64)";

/// Configuration for the Whistle client.
///
/// # Example
///
/// ```
/// use whistle_rs::{ClientConfig, Environment};
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_environment(Environment::Staging)
///     .with_timeout(Duration::from_secs(30))
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Which vendor deployment to talk to
    pub environment: Environment,
    /// Overrides the environment's base URL when set
    pub base_url: Option<Url>,
    /// Request timeout (connect + read)
    pub timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a configuration from `WHISTLE_*` environment variables.
    ///
    /// Recognized variables are `WHISTLE_ENVIRONMENT` (`production`,
    /// `prod` or `staging`), `WHISTLE_TIMEOUT_SECS` and
    /// `WHISTLE_USER_AGENT`. Unset variables keep their defaults.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(env) = std::env::var("WHISTLE_ENVIRONMENT") {
            config.environment = env.parse()?;
        }

        if let Ok(secs) = std::env::var("WHISTLE_TIMEOUT_SECS") {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                Error::Config(format!("WHISTLE_TIMEOUT_SECS is not a number: {:?}", secs))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        if let Ok(user_agent) = std::env::var("WHISTLE_USER_AGENT") {
            config.user_agent = user_agent;
        }

        Ok(config)
    }

    /// Select the vendor environment.
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Send requests to `base_url` instead of the environment's URL.
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// The base URL every request path is joined onto.
    pub fn resolved_base_url(&self) -> Result<Url> {
        match &self.base_url {
            Some(url) => Ok(url.clone()),
            None => Ok(Url::parse(self.environment.api_base_url())?),
        }
    }
}
