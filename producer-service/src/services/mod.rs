pub mod publisher;

pub use publisher::{KafkaMessagePublisher, MessagePublisher, MESSAGE_TOPIC};
