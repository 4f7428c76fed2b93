//! Consumer-side plumbing shared by the consumer binaries.
//!
//! Each consumer process subscribes to the fixed topic under its own group
//! id and prints every delivered message to stdout. Offsets, rebalancing
//! and commit cadence stay with librdkafka's defaults (auto-commit).

use dotenv::dotenv;
use rdkafka::config::ClientConfig;
use rdkafka::consumer::{Consumer, StreamConsumer};
use rdkafka::message::Message;
use std::env;
use thiserror::Error;
use tracing::{error, info, warn};

/// Topic every consumer subscribes to. Fixed; mirrors the producer side.
pub const MESSAGE_TOPIC: &str = "messages";

#[derive(Debug, Error)]
pub enum ListenerError {
    #[error("Kafka error: {0}")]
    Kafka(String),
}

impl From<rdkafka::error::KafkaError> for ListenerError {
    fn from(err: rdkafka::error::KafkaError) -> Self {
        ListenerError::Kafka(err.to_string())
    }
}

/// Listener configuration
#[derive(Debug, Clone)]
pub struct ListenerConfig {
    /// Kafka brokers (comma-separated)
    pub brokers: String,
    /// Consumer group ID
    pub group_id: String,
    /// Topic name
    pub topic: String,
}

impl ListenerConfig {
    /// Build from the environment; only the bootstrap address is
    /// configurable, the group id is fixed per process.
    pub fn from_env(group_id: &str) -> Self {
        dotenv().ok();

        let brokers = env::var("KAFKA_BROKERS").unwrap_or_else(|_| "localhost:9092".into());

        Self {
            brokers,
            group_id: group_id.to_string(),
            topic: MESSAGE_TOPIC.to_string(),
        }
    }
}

/// The stdout contract line: `<ConsumerName> received: <message>`.
pub fn format_received(display_name: &str, message: &str) -> String {
    format!("{} received: {}", display_name, message)
}

/// Subscribes to the topic and prints every delivered message.
pub struct MessageListener {
    consumer: StreamConsumer,
    config: ListenerConfig,
    display_name: String,
}

impl MessageListener {
    pub fn new(config: ListenerConfig, display_name: &str) -> Result<Self, ListenerError> {
        let consumer: StreamConsumer = ClientConfig::new()
            .set("bootstrap.servers", &config.brokers)
            .set("group.id", &config.group_id)
            .set("enable.auto.commit", "true")
            .set("auto.offset.reset", "earliest")
            .create()?;

        consumer.subscribe(&[&config.topic])?;

        info!(
            topic = %config.topic,
            group = %config.group_id,
            "subscribed to topic"
        );

        Ok(Self {
            consumer,
            config,
            display_name: display_name.to_string(),
        })
    }

    pub fn group_id(&self) -> &str {
        &self.config.group_id
    }

    /// Poll loop. Broker errors and undecodable payloads are logged and
    /// skipped; the loop itself never exits.
    pub async fn run(&self) -> Result<(), ListenerError> {
        loop {
            match self.consumer.recv().await {
                Err(e) => {
                    error!(error = %e, "consumer poll error");
                }
                Ok(msg) => {
                    let payload = match msg.payload_view::<str>() {
                        Some(Ok(text)) => text,
                        Some(Err(e)) => {
                            warn!(error = %e, "skipping non-UTF-8 payload");
                            continue;
                        }
                        None => {
                            warn!("skipping message with empty payload");
                            continue;
                        }
                    };

                    // Observable output of the process, not a log record.
                    println!("{}", format_received(&self.display_name, payload));
                }
            }
        }
    }
}
