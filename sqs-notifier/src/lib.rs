//! SQS Notifier - fan-out notification publishing to Amazon SQS.
//!
//! A [`Publisher`] holds an ordered list of queue URLs and delivers the same
//! `subject + "\n" + body` message to each of them in turn, stopping at the
//! first failure.
//!
//! ```no_run
//! use sqs_notifier::SqsPublisher;
//!
//! # async fn example() -> sqs_notifier::Result<()> {
//! let mut publisher = SqsPublisher::new("AKID", "secret", "us-east-1").await?;
//! publisher.add_destinations([
//!     "https://sqs.us-east-1.amazonaws.com/123456789012/alerts",
//!     "https://sqs.us-east-1.amazonaws.com/123456789012/audit",
//! ]);
//! publisher.send("deploy finished", "api v2 is live").await?;
//! # Ok(())
//! # }
//! ```
//!
//! Delivery is not atomic. When a later queue fails, earlier queues keep the
//! message, and [`Error::Delivery`] only names the queue that failed.

pub mod config;
pub mod error;
pub mod queue;

// Re-export commonly used types
pub use config::{Config, TransportConfig};
pub use error::{Error, Result, TransportError};
pub use queue::{Publisher, SendMessage, SendReceipt, SqsPublisher, SqsTransport};
