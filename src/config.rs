//! Client configuration.
//!
//! Layered with figment: built-in defaults, then an optional TOML file, then
//! `CART_`-prefixed environment variables (`CART_BASE_URL`, `CART_LOG_LEVEL`,
//! `CART_TIMEOUT_SECS`). Command-line overrides are merged last by the binary.

use std::path::Path;
use std::time::Duration;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::Result;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Origin of the cart backend, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Per-request timeout. Unset means requests never time out.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            log_level: default_log_level(),
            timeout_secs: None,
        }
    }
}

impl ClientConfig {
    /// Defaults merged with the environment.
    pub fn load() -> Result<Self> {
        Self::figment(None).extract().map_err(Into::into)
    }

    /// Defaults merged with a TOML file and the environment.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        Self::figment(Some(path.as_ref()))
            .extract()
            .map_err(Into::into)
    }

    /// The provider chain, exposed so callers can merge their own overrides.
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(ClientConfig::default()));
        if let Some(path) = path {
            figment = figment.merge(Toml::file(path));
        }
        figment.merge(Env::prefixed("CART_"))
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Base URL with any trailing slash removed.
    pub fn origin(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn defaults_without_sources() {
        Jail::expect_with(|_jail| {
            let config = ClientConfig::load().expect("load");
            assert_eq!(config, ClientConfig::default());
            assert_eq!(config.base_url, "http://localhost:3000");
            assert!(config.timeout().is_none());
            Ok(())
        });
    }

    #[test]
    fn file_then_env() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "cart.toml",
                r#"
                    base_url = "http://shop.local:8080/"
                    timeout_secs = 5
                "#,
            )?;
            jail.set_env("CART_LOG_LEVEL", "debug");

            let config = ClientConfig::load_from("cart.toml").expect("load");
            assert_eq!(config.origin(), "http://shop.local:8080");
            assert_eq!(config.timeout(), Some(Duration::from_secs(5)));
            assert_eq!(config.log_level, "debug");
            Ok(())
        });
    }

    #[test]
    fn env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file("cart.toml", r#"base_url = "http://a""#)?;
            jail.set_env("CART_BASE_URL", "http://b");

            let config = ClientConfig::load_from("cart.toml").expect("load");
            assert_eq!(config.base_url, "http://b");
            Ok(())
        });
    }
}
