//! Fan-out publisher that delivers one notification to every registered queue.
//!
//! Delivery is sequential and stops at the first failure. It is not atomic:
//! when queue *k* fails, queues before it have already accepted the message
//! and nothing is rolled back. Retrying a failed `send` re-delivers to every
//! queue, including those that succeeded the first time.

use std::future::Future;

use tracing::{info, warn};

use super::sqs::SqsTransport;
use super::transport::SendMessage;
use crate::config::TransportConfig;
use crate::error::{Error, Result, TransportError};

/// Publisher with an ordered list of destination queues.
///
/// Destinations are added with [`add_destinations`](Self::add_destinations)
/// before sending. Sending only borrows the publisher, so a fully configured
/// publisher can be shared behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Publisher<T = SqsTransport> {
    transport: T,
    destinations: Vec<String>,
}

/// Publisher backed by Amazon SQS.
pub type SqsPublisher = Publisher<SqsTransport>;

impl Publisher<SqsTransport> {
    /// Create an SQS publisher from static credentials and a region.
    ///
    /// Empty credentials and an empty region fall back to the AWS default
    /// provider chain.
    pub async fn new(
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        region: impl Into<String>,
    ) -> Result<Self> {
        Self::from_config(&TransportConfig::new(access_key_id, secret_access_key, region)).await
    }

    /// Create an SQS publisher from a full transport configuration.
    pub async fn from_config(config: &TransportConfig) -> Result<Self> {
        let transport = SqsTransport::connect(config).await?;
        Ok(Self::with_transport(transport))
    }
}

impl<T: SendMessage> Publisher<T> {
    /// Create a publisher with no destinations over the given transport.
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport,
            destinations: Vec::new(),
        }
    }

    /// Append destinations in the order given.
    ///
    /// Identifiers are not validated or deduplicated; a queue added twice
    /// receives every message twice.
    pub fn add_destinations<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.destinations.extend(ids.into_iter().map(Into::into));
    }

    /// Registered destinations in delivery order.
    pub fn destinations(&self) -> &[String] {
        &self.destinations
    }

    /// Send `subject` and `body` to every destination.
    ///
    /// The payload is `subject + "\n" + body`. With no destinations this is
    /// a no-op. On the first failed delivery the remaining destinations are
    /// skipped and [`Error::Delivery`] names the failing queue.
    pub async fn send(&self, subject: &str, body: &str) -> Result<()> {
        self.send_until(std::future::pending::<()>(), subject, body)
            .await
    }

    /// Like [`send`](Self::send), but abandons the in-flight delivery when
    /// `shutdown` completes.
    ///
    /// A cancelled delivery is reported as [`Error::Delivery`] for the queue
    /// being sent to, with a [`TransportError::Cancelled`] source.
    pub async fn send_until<F>(&self, shutdown: F, subject: &str, body: &str) -> Result<()>
    where
        F: Future<Output = ()>,
    {
        if self.destinations.is_empty() {
            info!("sqs_fanout_skipped");
            return Ok(());
        }

        let payload = format_payload(subject, body);

        info!(
            destinations = self.destinations.len(),
            body_length = payload.len(),
            "sqs_fanout_start"
        );

        tokio::pin!(shutdown);

        for (position, queue) in self.destinations.iter().enumerate() {
            let outcome = tokio::select! {
                biased;
                _ = &mut shutdown => Err(TransportError::Cancelled),
                sent = self.transport.send_message(queue, &payload) => sent,
            };

            match outcome {
                Ok(receipt) => {
                    info!(
                        queue = %queue,
                        position = position,
                        message_id = ?receipt.message_id,
                        body_length = payload.len(),
                        "sqs_message_sent"
                    );
                }
                Err(source) => {
                    if source.is_cancelled() {
                        warn!(queue = %queue, position = position, "sqs_fanout_cancelled");
                    } else {
                        warn!(
                            queue = %queue,
                            position = position,
                            error = %source,
                            "sqs_message_failed"
                        );
                    }

                    return Err(Error::Delivery {
                        queue: queue.clone(),
                        source,
                    });
                }
            }
        }

        info!(destinations = self.destinations.len(), "sqs_fanout_complete");

        Ok(())
    }
}

/// Join subject and body with a line break.
pub fn format_payload(subject: &str, body: &str) -> String {
    let mut payload = String::with_capacity(subject.len() + 1 + body.len());
    payload.push_str(subject);
    payload.push('\n');
    payload.push_str(body);
    payload
}
