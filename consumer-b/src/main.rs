use anyhow::Context;
use kafka_listener::{ListenerConfig, MessageListener};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const GROUP_ID: &str = "group-b";
const DISPLAY_NAME: &str = "Consumer B";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting consumer-b");

    let config = ListenerConfig::from_env(GROUP_ID);
    let listener = MessageListener::new(config, DISPLAY_NAME)
        .context("Failed to create Kafka consumer")?;

    listener.run().await?;
    Ok(())
}
