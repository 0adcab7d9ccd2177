//! Amazon SQS transport built on the AWS SDK.

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_credential_types::Credentials;
use aws_sdk_sqs::Client;
use tracing::info;

use super::transport::{SendMessage, SendReceipt};
use crate::config::TransportConfig;
use crate::error::{Result, TransportError};

const CREDENTIALS_PROVIDER_NAME: &str = "sqs-notifier-static";

/// [`SendMessage`] implementation backed by an `aws_sdk_sqs::Client`.
///
/// Queue identifiers are passed to SQS as queue URLs.
#[derive(Clone, Debug)]
pub struct SqsTransport {
    client: Client,
}

impl SqsTransport {
    /// Wrap an already configured SQS client.
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }

    /// Build an SQS client from static credentials, region and optional
    /// endpoint override.
    ///
    /// Fails with [`Error::Configuration`](crate::Error::Configuration)
    /// before any client is created when the settings are unusable.
    pub async fn connect(config: &TransportConfig) -> Result<Self> {
        config.validate()?;

        let mut loader = aws_config::defaults(BehaviorVersion::latest());

        if config.has_static_credentials() {
            loader = loader.credentials_provider(Credentials::new(
                config.access_key_id.clone(),
                config.secret_access_key.clone(),
                None,
                None,
                CREDENTIALS_PROVIDER_NAME,
            ));
        }

        if !config.region.is_empty() {
            loader = loader.region(Region::new(config.region.clone()));
        }

        if let Some(endpoint) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint.clone());
        }

        let sdk_config = loader.load().await;

        info!(
            region = ?sdk_config.region().map(|r| r.as_ref().to_string()),
            static_credentials = config.has_static_credentials(),
            endpoint_override = config.endpoint_url.is_some(),
            "sqs_transport_configured"
        );

        Ok(Self::from_client(Client::new(&sdk_config)))
    }

    /// The underlying SDK client.
    pub fn client(&self) -> &Client {
        &self.client
    }
}

#[async_trait]
impl SendMessage for SqsTransport {
    async fn send_message(&self, queue: &str, payload: &str) -> std::result::Result<SendReceipt, TransportError> {
        let output = self
            .client
            .send_message()
            .queue_url(queue)
            .message_body(payload)
            .send()
            .await
            .map_err(TransportError::service)?;

        Ok(SendReceipt::new(output.message_id().map(str::to_string)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[tokio::test]
    async fn test_connect_with_static_credentials() {
        let config = TransportConfig::new("AKIDEXAMPLE", "secret", "us-east-1")
            .with_endpoint_url("http://localhost:4566");

        let transport = SqsTransport::connect(&config).await.unwrap();

        let region = transport.client().config().region().map(|r| r.as_ref().to_string());
        assert_eq!(region, Some("us-east-1".to_string()));
    }

    #[tokio::test]
    async fn test_connect_rejects_malformed_region() {
        let config = TransportConfig::new("AKIDEXAMPLE", "secret", "Not A Region");

        let err = SqsTransport::connect(&config).await.unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[tokio::test]
    async fn test_connect_rejects_half_credentials() {
        let config = TransportConfig::new("AKIDEXAMPLE", "", "us-east-1");

        let err = SqsTransport::connect(&config).await.unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }
}
