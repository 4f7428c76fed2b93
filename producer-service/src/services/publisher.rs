use async_trait::async_trait;
use rdkafka::producer::{FutureProducer, FutureRecord, Producer};
use rdkafka::ClientConfig;
use std::time::Duration;
use tracing::debug;

use crate::error::{AppError, Result};

/// Topic every message lands on. Fixed; there is no dynamic topic creation.
pub const MESSAGE_TOPIC: &str = "messages";

/// Seam between the HTTP handler and the broker client, so endpoint tests
/// can run against an in-memory double.
#[async_trait]
pub trait MessagePublisher: Send + Sync {
    async fn publish(&self, message: &str) -> Result<()>;
}

/// Kafka-backed publisher over a `FutureProducer`.
///
/// Owns the broker connection for the process lifetime; `close` flushes
/// outstanding deliveries on shutdown.
pub struct KafkaMessagePublisher {
    producer: FutureProducer,
    topic: String,
    timeout: Duration,
}

impl KafkaMessagePublisher {
    pub fn new(brokers: &str) -> Result<Self> {
        let producer = ClientConfig::new()
            .set("bootstrap.servers", brokers)
            .set("message.timeout.ms", "5000")
            .create()
            .map_err(|e: rdkafka::error::KafkaError| AppError::Kafka(e.to_string()))?;

        Ok(Self {
            producer,
            topic: MESSAGE_TOPIC.to_string(),
            timeout: Duration::from_secs(5),
        })
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn close(&self) -> Result<()> {
        self.producer.flush(self.timeout)?;
        Ok(())
    }
}

#[async_trait]
impl MessagePublisher for KafkaMessagePublisher {
    async fn publish(&self, message: &str) -> Result<()> {
        // No key: partition assignment stays with the client's default.
        let record = FutureRecord::<(), _>::to(&self.topic).payload(message);

        self.producer
            .send(record, self.timeout)
            .await
            .map_err(|(e, _)| AppError::Kafka(e.to_string()))?;

        debug!(topic = %self.topic, "message published");
        Ok(())
    }
}
