//! Queue module for Amazon SQS publishing.
//!
//! This module provides:
//! - The one-method transport capability (`SendMessage`)
//! - The SQS-backed transport
//! - The fan-out publisher
//!
//! ## Flow
//!
//! ```text
//! subject + body → Publisher → SendMessage → queue 1, queue 2, ... (in order)
//! ```

pub mod publisher;
pub mod sqs;
pub mod transport;

pub use publisher::{format_payload, Publisher, SqsPublisher};
pub use sqs::SqsTransport;
pub use transport::{SendMessage, SendReceipt};
