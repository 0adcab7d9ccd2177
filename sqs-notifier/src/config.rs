//! Configuration module for environment variable parsing.
//!
//! Reads the SQS credentials, region and destination list from environment
//! variables. The library itself never reads the environment; only the
//! binary calls [`Config::from_env`].

use std::env;

use url::Url;

use crate::error::{Error, Result};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Settings used to initialize the SQS client
    pub transport: TransportConfig,

    /// Queue URLs to fan out to, in delivery order
    pub queue_urls: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Config {
            transport: TransportConfig {
                access_key_id: env::var("AWS_ACCESS_KEY_ID").unwrap_or_default(),
                secret_access_key: env::var("AWS_SECRET_ACCESS_KEY").unwrap_or_default(),
                region: env::var("AWS_REGION").unwrap_or_default(),
                endpoint_url: env::var("SQS_ENDPOINT_URL")
                    .ok()
                    .filter(|v| !v.trim().is_empty()),
            },

            queue_urls: parse_csv("SQS_QUEUE_URLS").unwrap_or_default(),
        }
    }
}

/// Settings for building the SQS transport.
///
/// Empty credentials or an empty region defer to the AWS default provider
/// chain (environment, profile files, instance metadata).
#[derive(Clone, Default)]
pub struct TransportConfig {
    /// Static access key id
    pub access_key_id: String,

    /// Static secret access key
    pub secret_access_key: String,

    /// AWS region, e.g. `us-east-1`
    pub region: String,

    /// Optional endpoint override for SQS-compatible local services
    pub endpoint_url: Option<String>,
}

// Hand-written so the secret never reaches the logs.
impl std::fmt::Debug for TransportConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransportConfig")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"<redacted>")
            .field("region", &self.region)
            .field("endpoint_url", &self.endpoint_url)
            .finish()
    }
}

impl TransportConfig {
    /// Build a config from the three construction strings.
    pub fn new(
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            region: region.into(),
            endpoint_url: None,
        }
    }

    /// Point the client at a different SQS endpoint.
    pub fn with_endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.endpoint_url = Some(endpoint_url.into());
        self
    }

    /// Whether static credentials were supplied.
    pub fn has_static_credentials(&self) -> bool {
        !self.access_key_id.is_empty() && !self.secret_access_key.is_empty()
    }

    /// Reject settings the SQS client cannot be built from.
    pub fn validate(&self) -> Result<()> {
        if self.access_key_id.is_empty() != self.secret_access_key.is_empty() {
            return Err(Error::Configuration(
                "access key id and secret access key must be set together".to_string(),
            ));
        }

        if !self.region.is_empty() && !is_valid_region(&self.region) {
            return Err(Error::Configuration(format!(
                "malformed region '{}'",
                self.region
            )));
        }

        if let Some(endpoint) = &self.endpoint_url {
            let parsed = Url::parse(endpoint).map_err(|e| {
                Error::Configuration(format!("invalid endpoint url '{endpoint}': {e}"))
            })?;
            if parsed.cannot_be_a_base() {
                return Err(Error::Configuration(format!(
                    "endpoint url '{endpoint}' is not an absolute url"
                )));
            }
        }

        Ok(())
    }
}

/// Region names are lowercase ASCII letters, digits and dashes.
fn is_valid_region(region: &str) -> bool {
    !region.starts_with('-')
        && !region.ends_with('-')
        && region
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Parse a comma-separated list of strings.
fn parse_csv(name: &str) -> Option<Vec<String>> {
    env::var(name).ok().map(|raw| {
        raw.split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_csv_keeps_order_and_duplicates() {
        env::set_var("TEST_SQS_CSV", "https://q/b, https://q/a,,https://q/b ");
        let result = parse_csv("TEST_SQS_CSV");
        assert_eq!(
            result,
            Some(vec![
                "https://q/b".to_string(),
                "https://q/a".to_string(),
                "https://q/b".to_string(),
            ])
        );
        env::remove_var("TEST_SQS_CSV");
    }

    #[test]
    fn test_parse_csv_missing() {
        assert_eq!(parse_csv("NONEXISTENT_SQS_VAR"), None);
    }

    #[test]
    fn test_empty_config_is_valid() {
        assert!(TransportConfig::new("", "", "").validate().is_ok());
    }

    #[test]
    fn test_static_credentials_and_region() {
        let config = TransportConfig::new("AKIDEXAMPLE", "secret", "eu-west-1");
        assert!(config.validate().is_ok());
        assert!(config.has_static_credentials());
    }

    #[test]
    fn test_half_credentials_rejected() {
        let err = TransportConfig::new("AKIDEXAMPLE", "", "us-east-1")
            .validate()
            .unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));

        let err = TransportConfig::new("", "secret", "us-east-1")
            .validate()
            .unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_malformed_region_rejected() {
        for region in ["US East", "us_east_1", "-us-east-1", "us-east-1-"] {
            let err = TransportConfig::new("", "", region).validate().unwrap_err();
            assert!(matches!(err, Error::Configuration(_)), "region {region}");
        }
    }

    #[test]
    fn test_endpoint_url_validation() {
        let ok = TransportConfig::new("", "", "us-east-1").with_endpoint_url("http://localhost:4566");
        assert!(ok.validate().is_ok());

        let bad = TransportConfig::new("", "", "us-east-1").with_endpoint_url("not a url");
        assert!(matches!(bad.validate(), Err(Error::Configuration(_))));

        let opaque = TransportConfig::new("", "", "us-east-1").with_endpoint_url("mailto:ops@example.com");
        assert!(matches!(opaque.validate(), Err(Error::Configuration(_))));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = TransportConfig::new("AKIDEXAMPLE", "hunter2", "us-east-1");
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("AKIDEXAMPLE"));
    }
}
