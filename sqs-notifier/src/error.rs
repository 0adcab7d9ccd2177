//! Error types for publisher construction and message delivery.

use thiserror::Error;

/// Boxed error returned by the underlying queue client.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failure reported by a transport for a single send.
#[derive(Error, Debug)]
pub enum TransportError {
    /// The queueing service or its client rejected the message
    #[error("{0}")]
    Service(#[source] BoxError),

    /// The caller's shutdown signal fired while the send was in flight
    #[error("send cancelled before completion")]
    Cancelled,
}

impl TransportError {
    /// Wrap any client error as a service failure.
    pub fn service<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        TransportError::Service(Box::new(err))
    }

    /// Whether this failure came from cancellation rather than the service.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, TransportError::Cancelled)
    }
}

/// Errors surfaced by the publisher.
#[derive(Error, Debug)]
pub enum Error {
    /// The transport could not be initialized from the supplied settings
    #[error("invalid transport configuration: {0}")]
    Configuration(String),

    /// Delivery to `queue` failed; earlier queues may already hold the message
    #[error("failed to send message to queue '{queue}'")]
    Delivery {
        queue: String,
        #[source]
        source: TransportError,
    },
}

impl Error {
    /// The destination that failed, for delivery errors.
    pub fn failed_queue(&self) -> Option<&str> {
        match self {
            Error::Delivery { queue, .. } => Some(queue.as_str()),
            Error::Configuration(_) => None,
        }
    }
}

/// Result type alias for publisher operations
pub type Result<T> = std::result::Result<T, Error>;
