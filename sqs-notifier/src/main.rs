//! sqs-notify - send one notification to every configured SQS queue.
//!
//! Usage: `sqs-notify <subject> <body>`
//!
//! Credentials, region and queue URLs come from the environment
//! (`AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY`, `AWS_REGION`,
//! `SQS_QUEUE_URLS`, optional `SQS_ENDPOINT_URL`).

use anyhow::{bail, Context, Result};
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use sqs_notifier::{Config, SqsPublisher};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize structured JSON logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json().flatten_event(true))
        .init();

    let mut args = std::env::args().skip(1);
    let (subject, body) = match (args.next(), args.next()) {
        (Some(subject), Some(body)) => (subject, body),
        _ => bail!("usage: sqs-notify <subject> <body>"),
    };

    let config = Config::from_env();
    info!(
        region = %config.transport.region,
        static_credentials = config.transport.has_static_credentials(),
        endpoint_override = config.transport.endpoint_url.is_some(),
        queues = config.queue_urls.len(),
        "config_loaded"
    );

    let mut publisher = SqsPublisher::from_config(&config.transport)
        .await
        .context("Failed to initialize SQS publisher")?;
    publisher.add_destinations(config.queue_urls);

    publisher
        .send_until(shutdown_signal(), &subject, &body)
        .await
        .context("Failed to publish notification")?;

    info!("notification_published");
    Ok(())
}

/// Completes on SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "ctrl_c_handler_failed");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "sigterm_handler_failed");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received SIGINT"),
        _ = terminate => info!("Received SIGTERM"),
    }
}
