//! The single-operation transport capability used by the publisher.
//!
//! The publisher only needs to hand one payload to one queue. Anything that
//! can do that, the SQS client or a test double, implements [`SendMessage`].

use async_trait::async_trait;

use crate::error::TransportError;

/// Opaque success value returned by a transport.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendReceipt {
    /// Service-assigned message id, when the service returns one
    pub message_id: Option<String>,
}

impl SendReceipt {
    pub fn new(message_id: Option<String>) -> Self {
        Self { message_id }
    }
}

/// Send a single message body to a single queue.
///
/// `queue` and `payload` are opaque to the caller; implementations decide
/// how a queue identifier is addressed on the wire.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SendMessage: Send + Sync {
    async fn send_message(&self, queue: &str, payload: &str) -> Result<SendReceipt, TransportError>;
}

#[async_trait]
impl<T> SendMessage for std::sync::Arc<T>
where
    T: SendMessage + ?Sized,
{
    async fn send_message(&self, queue: &str, payload: &str) -> Result<SendReceipt, TransportError> {
        (**self).send_message(queue, payload).await
    }
}
